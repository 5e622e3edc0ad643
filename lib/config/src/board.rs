//! Board timing parameters.

/// Timebase frequency of the qemu virt machine, in ticks per second
pub const CLOCK_FREQ: usize = 10_000_000;

/// Distance between timer deadlines, in time-CSR units (about 0.1 s)
pub const TIMER_INTERVAL: usize = 1_000_000;
