//! Memory layout

/// Start of physical memory
pub const RAM_START: usize = 0x8000_0000;
/// Size of physical memory
pub const RAM_SIZE: usize = 128 * 1024 * 1024;
/// End of physical memory
pub const RAM_END: usize = RAM_START + RAM_SIZE;

/// Offset of the kernel image from `RAM_START`; the SBI firmware owns the
/// first part of the arena.
pub const KERNEL_OFFSET: usize = 0x20_0000;
/// Load address of the kernel image
pub const KERNEL_START: usize = RAM_START + KERNEL_OFFSET;

/// Size of the per-hart boot stack
pub const KERNEL_STACK_SIZE: usize = 64 * 1024;
/// Size of the kernel heap
pub const KERNEL_HEAP_SIZE: usize = 1024 * 1024;

/// Page size
pub const PAGE_SIZE: usize = 4096;
/// Width of the in-page offset
pub const PAGE_OFFSET_WIDTH: usize = 12;
/// Number of entries in one page table
pub const PTE_PER_TABLE: usize = 512;
/// Width of one virtual-page-number index slice
pub const VPN_INDEX_WIDTH: usize = 9;
/// Number of page-table levels in Sv39
pub const PAGE_TABLE_LEVELS: usize = 3;
/// Width of a physical address in Sv39
pub const PA_WIDTH_SV39: usize = 56;
/// Width of a virtual address in Sv39
pub const VA_WIDTH_SV39: usize = 39;
/// Width of a physical page number in Sv39
pub const PPN_WIDTH_SV39: usize = PA_WIDTH_SV39 - PAGE_OFFSET_WIDTH;
/// Width of a virtual page number in Sv39
pub const VPN_WIDTH_SV39: usize = VA_WIDTH_SV39 - PAGE_OFFSET_WIDTH;

#[cfg(target_arch = "riscv64")]
unsafe extern "C" {
    fn _ekernel();
}

/// First byte of physical memory past the kernel image, from the linker.
#[cfg(target_arch = "riscv64")]
pub fn kernel_end_phys() -> usize {
    _ekernel as usize
}
