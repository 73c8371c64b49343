//! # Printer Configuration
//!
//! This module defines the link and paper characteristics of supported
//! serial thermal printers.
//!
//! ## Presets
//!
//! | Preset | Paper | Baud | Columns (font A) |
//! |--------|-------|------|------------------|
//! | `GENERIC_58MM` | 58mm | 9600 | 32 |
//! | `GENERIC_80MM` | 80mm | 19200 | 48 |
//!
//! ## Usage
//!
//! ```
//! use thermal_printer::printer::PrinterConfig;
//!
//! let config = PrinterConfig::GENERIC_58MM;
//! println!("{}: {} columns at {} baud",
//!          config.name,
//!          config.line_chars,
//!          config.baud_rate);
//! ```
//!
//! Configurations can also be loaded from JSON:
//!
//! ```json
//! { "name": "Kitchen", "baud_rate": 19200, "line_chars": 48 }
//! ```
//!
//! Missing fields fall back to the `GENERIC_58MM` values.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PrinterError;

/// # Printer Configuration
///
/// - **baud_rate**: serial line speed
/// - **line_chars**: characters per line in font A at 1× width
/// - **flush_feeds**: line feeds written after the buffer by `print()`
/// - **direct_feeds**: line feeds written after `direct_print()` payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Printer model or location name
    pub name: Cow<'static, str>,

    /// Serial line speed in baud
    pub baud_rate: u32,

    /// Columns per line (font A, 1× width)
    pub line_chars: usize,

    /// Feed lines after a buffered print
    pub flush_feeds: usize,

    /// Feed lines after a direct print
    pub direct_feeds: usize,
}

impl PrinterConfig {
    /// # Generic 58mm Module
    ///
    /// CSN-A2 / Adafruit-style panel printers and most pocket printers.
    /// 384 dots, 32 columns of 12×24 font A.
    pub const GENERIC_58MM: Self = Self {
        name: Cow::Borrowed("Generic 58mm"),
        baud_rate: 9600,
        line_chars: 32,
        flush_feeds: 3,
        direct_feeds: 3,
    };

    /// # Generic 80mm Receipt Printer
    ///
    /// Epson TM-T20/T88 class printers. 576 dots, 48 columns.
    pub const GENERIC_80MM: Self = Self {
        name: Cow::Borrowed("Generic 80mm"),
        baud_rate: 19200,
        line_chars: 48,
        flush_feeds: 3,
        direct_feeds: 3,
    };

    /// Parse a JSON configuration.
    ///
    /// ## Errors
    ///
    /// [`PrinterError::Config`] if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, PrinterError> {
        serde_json::from_str(json)
            .map_err(|e| PrinterError::Config(format!("Invalid printer config: {}", e)))
    }

    /// Read and parse a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PrinterError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            PrinterError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// Look up a preset by short name (`58mm` or `80mm`).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "58" | "58mm" => Some(Self::GENERIC_58MM),
            "80" | "80mm" => Some(Self::GENERIC_80MM),
            _ => None,
        }
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::GENERIC_58MM
    }
}
