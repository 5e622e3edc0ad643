//! Physical and virtual memory management.
//!
//! The frame allocator hands out 4 KiB physical frames; the `vm` module
//! builds Sv39 page tables out of them and owns the kernel address space.
//! Both are initialised before paging is enabled, so physical addresses
//! double as pointers throughout this crate (identity mapping).

#![no_std]

pub mod address;
pub mod frame;
pub mod heap;
pub mod mm_error;
pub mod vm;

#[cfg(test)]
extern crate alloc;
