//! Platform-level interrupt controller shim.
//!
//! A thin layer over the PLIC register map: device priorities at boot,
//! per-hart supervisor enables, and the claim/complete cycle driven by
//! the external-interrupt handler. A claim of `None` means no device is
//! pending.

use core::num::NonZeroU32;

use ::plic::{HartContext, InterruptSource, Plic};

use config::device::{PLIC_BASE, UART0_IRQ, VIRTIO0_IRQ};

/// Supervisor-mode PLIC context of a hart on the qemu virt machine.
#[derive(Debug, Clone, Copy)]
struct SupervisorCtx {
    hart: usize,
}

impl HartContext for SupervisorCtx {
    fn index(self) -> usize {
        self.hart * 2 + 1
    }
}

#[derive(Debug, Clone, Copy)]
struct Irq {
    no: usize,
}

impl InterruptSource for Irq {
    fn id(self) -> NonZeroU32 {
        NonZeroU32::new(self.no as u32).expect("IRQ 0 is not a device")
    }
}

fn plic() -> *mut Plic {
    PLIC_BASE as *mut Plic
}

/// Gives the wired devices a non-zero priority; a device left at
/// priority zero can never interrupt.
pub fn init() {
    for irq in [UART0_IRQ, VIRTIO0_IRQ] {
        unsafe {
            (*plic()).set_priority(Irq { no: irq }, 1);
        }
    }
}

/// Enables the wired devices for `hart`'s supervisor context and lowers
/// the threshold so any non-zero priority gets through.
pub fn init_hart(hart: usize) {
    let ctx = SupervisorCtx { hart };
    unsafe {
        (*plic()).set_threshold(ctx, 0);
        for irq in [UART0_IRQ, VIRTIO0_IRQ] {
            (*plic()).enable(Irq { no: irq }, ctx);
        }
    }
    log::debug!("[plic] hart {} external interrupts enabled", hart);
}

/// Claims the highest-priority pending interrupt, if any.
pub fn claim(hart: usize) -> Option<usize> {
    let irq = unsafe { (*plic()).claim(SupervisorCtx { hart }) };
    irq.map(|irq| irq.get() as usize)
}

/// Signals completion so the device may interrupt again.
pub fn complete(hart: usize, irq: usize) {
    unsafe {
        (*plic()).complete(SupervisorCtx { hart }, Irq { no: irq });
    }
}
