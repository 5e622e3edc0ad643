//! Supervisor trap dispatch.
//!
//! Hardware reaches the kernel only through the vector installed here.
//! The assembly stub saves the caller-saved registers, calls
//! [`kernel_trap_handler::kernel_trap_handler`] and returns with `sret`;
//! interrupts stay disabled for the whole handler (the hart clears
//! `sstatus.SIE` on trap entry).

pub mod kernel_trap_handler;
pub mod trap_env;

pub use kernel_trap_handler::TICKS;

/// Installs the trap vector on the calling hart, opens the timer and
/// external interrupt sources, and programs the first deadline.
///
/// `sstatus.SIE` is left alone; the caller decides when interrupts
/// actually start flowing.
pub fn init_hart() {
    trap_env::set_kernel_stvec();
    arch::interrupt::enable_timer_interrupt();
    arch::interrupt::enable_external_interrupt();
    arch::time::set_timer(arch::time::get_time() + config::board::TIMER_INTERVAL);
}
