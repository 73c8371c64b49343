//! # In-Memory Transport
//!
//! Keeps every write call as a separate entry so the exact call pattern
//! (payload write, then feed write) can be inspected. It can also be primed
//! to fail, to exercise transport-error paths.

use super::Transport;
use crate::error::PrinterError;

/// Records writes instead of sending them anywhere.
///
/// ## Example
///
/// ```
/// use thermal_printer::transport::{MemoryTransport, Transport};
///
/// let mut transport = MemoryTransport::new();
/// transport.write(&[0x1B, 0x40])?;
/// transport.write(b"hi")?;
///
/// assert_eq!(transport.writes().len(), 2);
/// assert_eq!(transport.bytes(), vec![0x1B, 0x40, b'h', b'i']);
/// # Ok::<(), thermal_printer::PrinterError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryTransport {
    writes: Vec<Vec<u8>>,
    fail_next: usize,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` writes fail without recording anything.
    pub fn fail_next(&mut self, count: usize) {
        self.fail_next = count;
    }

    /// Every successful write, one entry per call.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// All successful writes concatenated.
    pub fn bytes(&self) -> Vec<u8> {
        self.writes.concat()
    }

    /// Forget recorded writes.
    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl Transport for MemoryTransport {
    fn write(&mut self, data: &[u8]) -> Result<(), PrinterError> {
        if self.fail_next > 0 {
            self.fail_next -= 1;
            return Err(PrinterError::Transport(
                "Write failed: simulated failure".to_string(),
            ));
        }
        self.writes.push(data.to_vec());
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
