//! # Printer Module
//!
//! The buffered printer and the pieces it is built from.
//!
//! ## Modules
//!
//! - [`config`]: Link and paper settings
//! - [`state`]: Cumulative print-mode tracking
//! - [`buffer`]: Append-only command log
//! - [`thermal`]: [`ThermalPrinter`], the formatting API

pub mod buffer;
pub mod config;
pub mod state;
pub mod thermal;

pub use buffer::CommandBuffer;
pub use config::PrinterConfig;
pub use state::PrinterState;
pub use thermal::ThermalPrinter;
