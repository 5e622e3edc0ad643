//! Hart lifecycle.

cfg_if::cfg_if! {
    if #[cfg(target_arch = "riscv64")] {
        use sbi_rt::{NoReason, Shutdown, SystemFailure, system_reset};

        /// Stops the hart through the SBI firmware. `failure` selects the
        /// reset reason reported to the platform.
        pub fn hart_shutdown(failure: bool) -> ! {
            if failure {
                system_reset(Shutdown, SystemFailure);
            } else {
                system_reset(Shutdown, NoReason);
            }
            unreachable!()
        }
    } else {
        pub fn hart_shutdown(_failure: bool) -> ! {
            unreachable!("hart_shutdown off-target");
        }
    }
}
