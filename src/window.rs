use std::collections::VecDeque;

use crate::matcher::locate;

/// Bounded FIFO history buffer for the encoder's match search.
///
/// Bytes are appended at the back; once the buffer would exceed its
/// capacity the oldest byte is evicted from the front, one byte per push,
/// so the length never exceeds `max_size`.
pub struct SearchBuffer {
    buf: VecDeque<u8>,
    max_size: usize,
}

impl SearchBuffer {
    pub fn new(max_size: usize) -> Self {
        Self { buf: VecDeque::with_capacity(max_size.min(4096) + 1), max_size }
    }

    /// Add a single byte, evicting the oldest byte if the bound is exceeded
    pub fn push(&mut self, byte: u8) {
        self.buf.push_back(byte);
        if self.buf.len() > self.max_size {
            self.buf.pop_front();
        }
    }

    /// Add multiple bytes in order
    pub fn extend(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push(b);
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Find the first occurrence of `needle` in the buffered history
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        locate(needle, self.buf.iter())
    }
}
