//! # ESC/POS Protocol Implementation
//!
//! Low-level command builders and payload types for the ESC/POS subset used
//! by serial thermal receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Control bytes, command prefixes and opcode builders
//! - [`mode`]: The `ESC !` print-mode bitmask and the three-way [`mode::Toggle`]
//! - [`text`]: Font, justification, rotation and magnification values
//!
//! ## Usage Example
//!
//! ```
//! use thermal_printer::protocol::{commands, mode::PrintMode, text::Justification};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(commands::justify(Justification::Center.code()));
//! data.extend(commands::print_mode((PrintMode::BOLD | PrintMode::DOUBLE_HEIGHT).bits()));
//! data.extend(b"RECEIPT");
//! data.extend(commands::line_feeds(1));
//! data.extend(commands::print_mode(PrintMode::empty().bits()));
//!
//! assert_eq!(&data[..5], &[0x1B, 0x40, 0x1B, 0x61, 0x01]);
//! ```
//!
//! Most callers should use [`crate::printer::ThermalPrinter`], which tracks
//! the cumulative print mode for you.

pub mod commands;
pub mod mode;
pub mod text;
