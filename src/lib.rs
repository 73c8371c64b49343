//! # Thermal Printer - ESC/POS Command Encoder
//!
//! A small library for driving serial thermal receipt printers. It provides:
//!
//! - **Protocol implementation**: ESC/POS opcode builders and the print-mode bitmask
//! - **State tracking**: cumulative bold/underline/font/size state, sent as absolute values
//! - **Buffering**: formatting calls are batched and flushed in one transport write
//! - **Transport**: raw serial TTY output, plus an in-memory sink for tests
//!
//! ## Quick Start
//!
//! ```no_run
//! use thermal_printer::{
//!     protocol::text::Justification,
//!     transport::SerialTransport,
//!     ThermalPrinter,
//! };
//!
//! // Open the serial port and reset the printer
//! let transport = SerialTransport::open("/dev/ttyUSB0", 9600)?;
//! let mut printer = ThermalPrinter::new(transport)?;
//!
//! // Build a receipt in the buffer
//! printer.set_justification(Justification::Center);
//! printer.set_magnification(2, 2)?;
//! printer.add_text("CAFE", 1);
//! printer.reset_magnification();
//! printer.set_justification(Justification::Left);
//! printer.add_rule();
//! printer.set_bold(true);
//! printer.add_text("Espresso        2.50", 1);
//! printer.reset_print_mode();
//!
//! // Send it
//! printer.print()?;
//!
//! # Ok::<(), thermal_printer::error::PrinterError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`printer`] | Buffered printer, state tracking, configuration |
//! | [`transport`] | Communication backends |
//! | [`error`] | Error types |

pub mod error;
pub mod printer;
pub mod protocol;
pub mod transport;

// Re-exports for convenience
pub use error::PrinterError;
pub use printer::{PrinterConfig, ThermalPrinter};
pub use protocol::mode::{PrintMode, Toggle};
pub use transport::{MemoryTransport, SerialTransport, Transport};
