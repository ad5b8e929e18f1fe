//! # Host Error Types
//!
//! Errors raised by the host model itself.

use thiserror::Error;

/// Errors that can occur while manipulating host state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// Slot index outside the inventory.
    #[error("slot {slot} out of range for inventory of size {size}")]
    SlotOutOfRange {
        /// The slot that was addressed.
        slot: usize,
        /// The inventory size.
        size: usize,
    },
}

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;
