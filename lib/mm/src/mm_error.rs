//! Errors reported by the memory subsystem.

use core::fmt::{self, Display};

/// Failure modes of the frame allocator and the page-table engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmError {
    /// The frame allocator has no free frame left.
    OutOfMemory,
    /// A mapping request hit a page that already has a valid leaf entry.
    AlreadyMapped,
}

impl Display for VmError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VmError::OutOfMemory => write!(f, "out of memory"),
            VmError::AlreadyMapped => write!(f, "virtual page is already mapped"),
        }
    }
}

pub type VmResult<T> = Result<T, VmError>;
