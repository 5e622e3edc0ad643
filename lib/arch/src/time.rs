//! The time CSR and the SBI timer.

cfg_if::cfg_if! {
    if #[cfg(target_arch = "riscv64")] {
        use riscv::register::time;

        /// Current value of the time CSR.
        pub fn get_time() -> usize {
            time::read()
        }

        /// Programs the next timer interrupt for `deadline` (a time-CSR
        /// value). The SBI call also clears the pending timer bit.
        pub fn set_timer(deadline: usize) {
            sbi_rt::set_timer(deadline as u64);
        }
    } else {
        pub fn get_time() -> usize {
            0
        }

        pub fn set_timer(_deadline: usize) {}
    }
}
