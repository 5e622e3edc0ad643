//! Kernel heap allocator.
//!
//! The buddy system allocator backs the kernel heap, carved out of a
//! fixed `.bss` arena. Host test builds keep the platform allocator.

#[cfg(target_arch = "riscv64")]
mod imp {
    use buddy_system_allocator as buddy;

    use config::mm::KERNEL_HEAP_SIZE;

    static mut KERNEL_HEAP: [u8; KERNEL_HEAP_SIZE] = [0; KERNEL_HEAP_SIZE];

    #[global_allocator]
    static HEAP_ALLOCATOR: buddy::LockedHeap<32> = buddy::LockedHeap::empty();

    /// Initialises the heap allocator.
    ///
    /// # Safety
    /// Must be called once, before the first heap allocation.
    pub unsafe fn init_heap_allocator() {
        let start_addr = &raw mut KERNEL_HEAP as usize;
        unsafe {
            HEAP_ALLOCATOR.lock().init(start_addr, KERNEL_HEAP_SIZE);
        }
        log::info!(
            "[kernel] heap initialized: {:#x} - {:#x}",
            start_addr,
            start_addr + KERNEL_HEAP_SIZE
        );
    }
}

#[cfg(target_arch = "riscv64")]
pub use imp::init_heap_allocator;
