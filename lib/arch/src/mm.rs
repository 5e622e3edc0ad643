//! Address-translation control.

cfg_if::cfg_if! {
    if #[cfg(target_arch = "riscv64")] {
        use riscv::register::satp::{self, Satp};

        /// Invalidates every address-translation cache entry on the
        /// calling hart.
        pub fn sfence_vma() {
            riscv::asm::sfence_vma_all();
        }

        /// Installs `root_ppn` as the Sv39 translation root on the calling
        /// hart and flushes the TLB.
        ///
        /// # Safety
        /// The table rooted at `root_ppn` must map every address the hart
        /// will touch, or the next instruction fetch faults.
        pub unsafe fn enable_paging(root_ppn: usize) {
            let mut satp = Satp::from_bits(0);
            satp.set_mode(satp::Mode::Sv39);
            satp.set_ppn(root_ppn);
            unsafe {
                satp::write(satp);
            }
            sfence_vma();
        }
    } else {
        pub fn sfence_vma() {}

        /// # Safety
        /// No-op off-target.
        pub unsafe fn enable_paging(_root_ppn: usize) {}
    }
}
