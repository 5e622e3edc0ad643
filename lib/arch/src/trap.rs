//! Trap-vector installation.

/// How the hart locates a handler when a trap arrives.
///
/// In direct mode every trap jumps to the installed address; in vectored
/// mode interrupts index into a table of handlers. This kernel uses
/// direct mode only.
#[derive(Debug, Clone, Copy)]
pub enum TrapMode {
    Direct,
    Vectored,
}

cfg_if::cfg_if! {
    if #[cfg(target_arch = "riscv64")] {
        use riscv::register::mtvec::TrapMode as RiscvTrapMode;
        use riscv::register::stvec::{self, Stvec};

        impl From<TrapMode> for RiscvTrapMode {
            fn from(mode: TrapMode) -> Self {
                match mode {
                    TrapMode::Direct => RiscvTrapMode::Direct,
                    TrapMode::Vectored => RiscvTrapMode::Vectored,
                }
            }
        }

        /// Points `stvec` at `handler_addr`.
        pub fn set_trap_handler(handler_addr: usize, mode: TrapMode) {
            unsafe {
                let mut stvec = Stvec::from_bits(0);
                stvec.set_address(handler_addr);
                stvec.set_trap_mode(mode.into());
                stvec::write(stvec);
            }
        }
    } else {
        pub fn set_trap_handler(_handler_addr: usize, _mode: TrapMode) {}
    }
}
