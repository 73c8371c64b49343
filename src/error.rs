//! # Error Types
//!
//! This module defines error types used throughout the thermal-printer library.

use thiserror::Error;

/// Main error type for printer operations
#[derive(Debug, Error)]
pub enum PrinterError {
    /// Transport-level errors (open, configure, write)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid command parameter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed printer configuration
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
