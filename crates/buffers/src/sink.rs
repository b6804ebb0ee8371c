//! The byte sink abstraction shared by all writers.

use thiserror::Error;

/// The destination buffer cannot hold the bytes being appended.
///
/// `capacity` is the total size of the destination; `shortfall` is how many
/// bytes the rejected append would have run past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("destination buffer full: capacity {capacity} bytes, {shortfall} more needed")]
pub struct CapacityError {
    pub capacity: usize,
    pub shortfall: usize,
}

/// Byte-append interface over an output buffer.
///
/// Appends either succeed completely or fail with [`CapacityError`] leaving
/// the cursor where it was; a failed append never writes partial data.
pub trait Sink {
    /// Appends a single byte.
    fn push(&mut self, byte: u8) -> Result<(), CapacityError>;

    /// Appends a byte slice.
    fn push_slice(&mut self, bytes: &[u8]) -> Result<(), CapacityError>;

    /// Number of bytes written so far.
    fn written(&self) -> usize;
}

impl<T: Sink + ?Sized> Sink for &mut T {
    fn push(&mut self, byte: u8) -> Result<(), CapacityError> {
        (**self).push(byte)
    }

    fn push_slice(&mut self, bytes: &[u8]) -> Result<(), CapacityError> {
        (**self).push_slice(bytes)
    }

    fn written(&self) -> usize {
        (**self).written()
    }
}
