//! # Printer Transport Layer
//!
//! This module provides communication backends for sending data to printers.
//!
//! The printer core needs exactly one capability from a transport: a
//! blocking, all-or-nothing `write`. No reads, flow control or status
//! queries are used.
//!
//! ## Available Transports
//!
//! - [`serial`]: TTY serial port in raw 8N1 mode (Linux/macOS)
//! - [`memory`]: Records every write in memory, for tests and dry runs

pub mod memory;
pub mod serial;

pub use memory::MemoryTransport;
pub use serial::SerialTransport;

use crate::error::PrinterError;

/// A byte sink connected to a printer.
///
/// Each call is one logical write: implementations must either accept all of
/// `data` or return an error.
pub trait Transport {
    fn write(&mut self, data: &[u8]) -> Result<(), PrinterError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write(&mut self, data: &[u8]) -> Result<(), PrinterError> {
        (**self).write(data)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, data: &[u8]) -> Result<(), PrinterError> {
        (**self).write(data)
    }
}
