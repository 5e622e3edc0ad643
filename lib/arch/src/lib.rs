//! CSR and SBI shims.
//!
//! Everything the rest of the kernel needs from the privileged
//! architecture goes through this crate. On targets other than riscv64
//! the functions degrade to no-ops so that the library crates stay
//! buildable and testable off-target.

#![no_std]

pub mod hart;
pub mod interrupt;
pub mod mm;
pub mod time;
pub mod trap;
