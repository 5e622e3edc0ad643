//! Supervisor interrupt-enable plumbing.

cfg_if::cfg_if! {
    if #[cfg(target_arch = "riscv64")] {
        use riscv::interrupt;
        use riscv::register::sie;

        pub fn enable_interrupt() {
            unsafe {
                interrupt::enable();
            }
        }

        pub fn disable_interrupt() {
            interrupt::disable();
        }

        /// Lets supervisor timer interrupts through once `sstatus.SIE`
        /// is set.
        pub fn enable_timer_interrupt() {
            unsafe {
                sie::set_stimer();
            }
        }

        /// Lets supervisor external interrupts through once `sstatus.SIE`
        /// is set.
        pub fn enable_external_interrupt() {
            unsafe {
                sie::set_sext();
            }
        }

        /// Parks the hart until the next interrupt.
        pub fn wait_for_interrupt() {
            unsafe {
                core::arch::asm!("wfi");
            }
        }
    } else {
        pub fn enable_interrupt() {}
        pub fn disable_interrupt() {}
        pub fn enable_timer_interrupt() {}
        pub fn enable_external_interrupt() {}
        pub fn wait_for_interrupt() {}
    }
}
