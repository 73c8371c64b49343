//! # Command Buffer
//!
//! An append-only log of opcodes and text bytes. Nothing here talks to a
//! transport; [`crate::printer::ThermalPrinter`] drains the buffer when the
//! caller flushes.
//!
//! Text is appended as UTF-8. Printers set to a single-byte code page will
//! only render the ASCII subset faithfully.

use crate::protocol::commands::LF;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandBuffer {
    bytes: Vec<u8>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw bytes, then `feeds` line feeds.
    pub fn append_bytes(&mut self, data: &[u8], feeds: usize) {
        self.bytes.extend_from_slice(data);
        self.newline(feeds);
    }

    /// Append UTF-8 text, then `feeds` line feeds.
    pub fn append_text(&mut self, text: &str, feeds: usize) {
        self.append_bytes(text.as_bytes(), feeds);
    }

    /// Append `count` line feeds.
    pub fn newline(&mut self, count: usize) {
        self.bytes.resize(self.bytes.len() + count, LF);
    }

    /// Terminate the current line unless the buffer is empty or already
    /// ends with a line feed.
    ///
    /// Returns true if a line feed was appended.
    pub fn ensure_line_start(&mut self) -> bool {
        if self.bytes.is_empty() || self.ends_with_line_feed() {
            return false;
        }
        self.bytes.push(LF);
        true
    }

    #[inline]
    pub fn ends_with_line_feed(&self) -> bool {
        self.bytes.last() == Some(&LF)
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
