//! UART byte sink.
//!
//! The qemu virt machine exposes an ns16550a at `UART0_BASE`. Sends block
//! until the transmitter is idle, so no byte is ever dropped. Until
//! [`init`] has run, output falls back to the SBI legacy console, which
//! keeps early boot messages visible.

use mutex::SpinNoIrqLock;
use spin::Once;
use uart_16550::MmioSerialPort;

use config::device::UART0_BASE;

static SERIAL: Once<SpinNoIrqLock<MmioSerialPort>> = Once::new();

/// Brings up the UART and switches output away from the SBI fallback.
/// Also enables the receive interrupt used by the external-interrupt path.
pub fn init() {
    SERIAL.call_once(|| {
        let mut port = unsafe { MmioSerialPort::new(UART0_BASE) };
        port.init();
        SpinNoIrqLock::new(port)
    });
}

/// Writes one byte, blocking until the transmitter accepts it.
pub fn put_char(c: u8) {
    match SERIAL.get() {
        Some(serial) => serial.lock().send(c),
        None => sbi_put_char(c),
    }
}

/// Writes every byte of `s`.
pub fn put_str(s: &str) {
    for &c in s.as_bytes() {
        put_char(c);
    }
}

/// Drains and echoes pending receive bytes. Called from the
/// external-interrupt handler after the PLIC claim.
pub fn handle_irq() {
    if let Some(serial) = SERIAL.get() {
        let mut serial = serial.lock();
        while let Ok(c) = serial.try_receive() {
            serial.send(c);
        }
    }
}

#[cfg(target_arch = "riscv64")]
fn sbi_put_char(c: u8) {
    #[allow(deprecated)]
    sbi_rt::legacy::console_putchar(c as usize);
}

#[cfg(not(target_arch = "riscv64"))]
fn sbi_put_char(_c: u8) {}
