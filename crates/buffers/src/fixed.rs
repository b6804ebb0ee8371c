//! Bounds-checked cursor over a caller-supplied buffer.

use crate::sink::{CapacityError, Sink};

/// A write cursor over a fixed-capacity byte slice.
///
/// Appends past the end of the slice fail with [`CapacityError`]; the
/// underlying buffer is never written out of bounds and a rejected append
/// leaves the cursor untouched.
///
/// # Example
///
/// ```
/// use telejson_buffers::{FixedWriter, Sink};
///
/// let mut buf = [0u8; 8];
/// let mut writer = FixedWriter::new(&mut buf);
/// writer.push_slice(b"hi").unwrap();
/// let len = writer.terminate().unwrap();
/// assert_eq!(len, 2);
/// assert_eq!(&buf[..3], b"hi\0");
/// ```
pub struct FixedWriter<'a> {
    buf: &'a mut [u8],
    /// Current cursor position.
    x: usize,
}

impl<'a> FixedWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, x: 0 }
    }

    /// Total capacity of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes still available before the buffer is full.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.x
    }

    /// Writes a NUL byte after the written content without advancing the
    /// cursor, and returns the content length (terminator excluded).
    pub fn terminate(&mut self) -> Result<usize, CapacityError> {
        if self.x >= self.buf.len() {
            return Err(CapacityError {
                capacity: self.buf.len(),
                shortfall: 1,
            });
        }
        self.buf[self.x] = 0;
        Ok(self.x)
    }
}

impl Sink for FixedWriter<'_> {
    fn push(&mut self, byte: u8) -> Result<(), CapacityError> {
        if self.x >= self.buf.len() {
            return Err(CapacityError {
                capacity: self.buf.len(),
                shortfall: 1,
            });
        }
        self.buf[self.x] = byte;
        self.x += 1;
        Ok(())
    }

    fn push_slice(&mut self, bytes: &[u8]) -> Result<(), CapacityError> {
        let length = bytes.len();
        if self.remaining() < length {
            return Err(CapacityError {
                capacity: self.buf.len(),
                shortfall: length - self.remaining(),
            });
        }
        self.buf[self.x..self.x + length].copy_from_slice(bytes);
        self.x += length;
        Ok(())
    }

    fn written(&self) -> usize {
        self.x
    }
}
