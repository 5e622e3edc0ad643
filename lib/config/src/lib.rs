#![no_std]

pub mod board;
pub mod device;
pub mod mm;
