//! Text buffer writer with auto-growing capacity.

use crate::sink::{CapacityError, Sink};

/// A buffer writer that grows automatically as needed.
///
/// # Example
///
/// ```
/// use telejson_buffers::{Sink, Writer};
///
/// let mut writer = Writer::new();
/// writer.push(b'[').unwrap();
/// writer.ascii("42");
/// writer.push(b']').unwrap();
/// assert_eq!(writer.flush(), b"[42]");
/// ```
pub struct Writer {
    /// The underlying byte buffer.
    buf: Vec<u8>,
    /// Position where the last flush happened.
    x0: usize,
    /// Current cursor position.
    x: usize,
    /// Allocation size when the buffer needs to grow.
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with default allocation size (4KB).
    pub fn new() -> Self {
        Self::with_alloc_size(4 * 1024)
    }

    /// Creates a new writer with custom allocation size.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            buf: vec![0u8; alloc_size],
            x0: 0,
            x: 0,
            alloc_size,
        }
    }

    /// Ensures the buffer has at least `capacity` bytes available.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.buf.len() - self.x;
        if remaining < capacity {
            let total = self.buf.len() - self.x0;
            let required = capacity - remaining;
            let total_required = total + required;
            let new_size = if total_required <= self.alloc_size {
                self.alloc_size
            } else {
                total_required * 2
            };
            self.grow(new_size);
        }
    }

    fn grow(&mut self, new_size: usize) {
        let x0 = self.x0;
        let x = self.x;
        let mut new_buf = vec![0u8; new_size];
        new_buf[..x - x0].copy_from_slice(&self.buf[x0..x]);
        self.buf = new_buf;
        self.x = x - x0;
        self.x0 = 0;
    }

    /// Discards unflushed content, rewinding the cursor to the last flush.
    pub fn reset(&mut self) {
        self.x = self.x0;
    }

    /// Returns the written data and advances the flush position.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.buf[self.x0..self.x].to_vec();
        self.x0 = self.x;
        result
    }

    /// Borrows the data written since the last flush.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[self.x0..self.x]
    }

    /// Appends an ASCII string.
    pub fn ascii(&mut self, s: &str) {
        let bytes = s.as_bytes();
        let length = bytes.len();
        self.ensure_capacity(length);
        self.buf[self.x..self.x + length].copy_from_slice(bytes);
        self.x += length;
    }
}

impl Sink for Writer {
    /// Never fails; the buffer grows instead.
    fn push(&mut self, byte: u8) -> Result<(), CapacityError> {
        self.ensure_capacity(1);
        self.buf[self.x] = byte;
        self.x += 1;
        Ok(())
    }

    fn push_slice(&mut self, bytes: &[u8]) -> Result<(), CapacityError> {
        let length = bytes.len();
        self.ensure_capacity(length);
        self.buf[self.x..self.x + length].copy_from_slice(bytes);
        self.x += length;
        Ok(())
    }

    fn written(&self) -> usize {
        self.x - self.x0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push() {
        let mut writer = Writer::new();
        writer.push(0x01).unwrap();
        writer.push(0x02).unwrap();
        assert_eq!(writer.flush(), [0x01, 0x02]);
    }

    #[test]
    fn test_ascii() {
        let mut writer = Writer::new();
        writer.ascii("hello");
        assert_eq!(writer.flush(), b"hello");
    }

    #[test]
    fn test_flush_multiple() {
        let mut writer = Writer::new();
        writer.push(0x01).unwrap();
        assert_eq!(writer.flush(), [0x01]);
        writer.push(0x02).unwrap();
        assert_eq!(writer.flush(), [0x02]);
    }

    #[test]
    fn test_grow_past_alloc_size() {
        let mut writer = Writer::with_alloc_size(4);
        writer.push_slice(b"0123456789abcdef").unwrap();
        writer.push(b'!').unwrap();
        assert_eq!(writer.written(), 17);
        assert_eq!(writer.flush(), b"0123456789abcdef!");
    }

    #[test]
    fn test_reset_discards_unflushed() {
        let mut writer = Writer::new();
        writer.ascii("keep");
        let kept = writer.flush();
        writer.ascii("discard");
        writer.reset();
        assert_eq!(writer.written(), 0);
        writer.ascii("next");
        assert_eq!(writer.flush(), b"next");
        assert_eq!(kept, b"keep");
    }

    #[test]
    fn test_as_slice_view() {
        let mut writer = Writer::new();
        writer.ascii("abc");
        assert_eq!(writer.as_slice(), b"abc");
        writer.flush();
        assert_eq!(writer.as_slice(), b"");
    }
}
