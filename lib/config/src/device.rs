//! MMIO map and interrupt wiring of the qemu virt machine.

/// Number of harts the boot stack is sized for
pub const MAX_HARTS: usize = 4;

/// UART0 MMIO window (ns16550a)
pub const UART0_BASE: usize = 0x1000_0000;
/// Size of the UART0 window
pub const UART0_SIZE: usize = 0x1000;
/// IRQ line of UART0
pub const UART0_IRQ: usize = 10;

/// Platform-level interrupt controller window
pub const PLIC_BASE: usize = 0xc00_0000;
/// Size of the PLIC window
pub const PLIC_SIZE: usize = 0x40_0000;

/// Core-local interruptor window
pub const CLINT_BASE: usize = 0x200_0000;
/// Size of the CLINT window
pub const CLINT_SIZE: usize = 0x1_0000;

/// First VIRTIO MMIO window
pub const VIRTIO0_BASE: usize = 0x1000_1000;
/// Size of the VIRTIO0 window
pub const VIRTIO0_SIZE: usize = 0x1000;
/// IRQ line of VIRTIO0
pub const VIRTIO0_IRQ: usize = 1;
