use core::sync::atomic::{AtomicUsize, Ordering};

use alloc::format;

use riscv::InterruptNumber;
use riscv::{
    interrupt::{Interrupt, Trap},
    register::{scause, sepc, stval},
};

use config::board::TIMER_INTERVAL;
use config::device::{UART0_IRQ, VIRTIO0_IRQ};

/// Timer ticks seen since boot. Written only by the trap handler on this
/// hart; anyone may read it.
pub static TICKS: AtomicUsize = AtomicUsize::new(0);

/// Ticks between heartbeat lines.
const HEARTBEAT_PERIOD: usize = 100;

/// Demultiplexes one supervisor trap: timer tick, PLIC-routed device
/// interrupt, or a fatal condition.
#[unsafe(no_mangle)]
pub fn kernel_trap_handler() {
    let scause = scause::read();
    match scause.cause() {
        Trap::Interrupt(i) => match Interrupt::from_number(i) {
            Ok(Interrupt::SupervisorTimer) => timer_interrupt(),
            Ok(Interrupt::SupervisorExternal) => external_interrupt(),
            _ => trap_panic(),
        },
        Trap::Exception(_) => trap_panic(),
    }
}

/// Bumps the tick counter and programs the next deadline. Re-arming the
/// timer through SBI also clears the pending timer bit in `sip`.
fn timer_interrupt() {
    let ticks = TICKS.fetch_add(1, Ordering::Relaxed) + 1;
    if ticks % HEARTBEAT_PERIOD == 0 {
        log::info!("[kernel] {} ticks", ticks);
    }
    arch::time::set_timer(arch::time::get_time() + TIMER_INTERVAL);
}

/// One claim/complete cycle against the PLIC. The kernel runs a single
/// hart, so the claim always goes to hart 0's supervisor context.
fn external_interrupt() {
    let hart = 0;
    let Some(irq) = driver::plic::claim(hart) else {
        return;
    };
    match irq {
        UART0_IRQ => driver::console::handle_irq(),
        VIRTIO0_IRQ => log::debug!("[kernel] virtio interrupt"),
        _ => log::warn!("[kernel] unexpected interrupt irq={}", irq),
    }
    driver::plic::complete(hart, irq);
}

/// Every synchronous exception and unrecognised interrupt is fatal.
fn trap_panic() -> ! {
    let log = format!(
        "[kernel] trap: cause = {:?}, sepc = {:#x}, stval = {:#x}",
        scause::read().cause(),
        sepc::read(),
        stval::read(),
    );
    log::error!("{}", log);
    panic!("{}", log);
}
