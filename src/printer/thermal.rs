//! # Buffered Thermal Printer
//!
//! [`ThermalPrinter`] combines the mode tracker ([`PrinterState`]) with the
//! byte log ([`CommandBuffer`]) and a [`Transport`].
//!
//! ## Buffered vs Direct
//!
//! Formatting calls and text only ever touch the in-memory buffer. Bytes
//! reach the transport in two ways:
//!
//! | Path | Transport calls |
//! |------|-----------------|
//! | `flush` / `print` | buffer, then feed bytes |
//! | `direct_write` / `direct_print` | payload, then feed bytes |
//!
//! The feed write is skipped when zero feeds are requested.
//!
//! ## Example
//!
//! ```
//! use thermal_printer::{ThermalPrinter, transport::MemoryTransport};
//! use thermal_printer::protocol::text::Justification;
//!
//! let mut printer = ThermalPrinter::new(MemoryTransport::new())?;
//! printer.set_justification(Justification::Center);
//! printer.set_bold(true);
//! printer.add_text("TOTAL  12.50", 1);
//! printer.reset_print_mode();
//! printer.print()?;
//!
//! // reset, buffer, feeds
//! assert_eq!(printer.transport().writes().len(), 3);
//! # Ok::<(), thermal_printer::PrinterError>(())
//! ```

use crate::error::PrinterError;
use crate::protocol::commands::{self, HT};
use crate::protocol::mode::{PrintMode, Toggle};
use crate::protocol::text::{Font, Justification, Magnification, Rotation};
use crate::transport::Transport;

use super::buffer::CommandBuffer;
use super::config::PrinterConfig;
use super::state::PrinterState;

/// Default line feeds after buffered text.
pub const TEXT_FEEDS: usize = 1;

/// Default line feeds after a horizontal rule.
pub const RULE_FEEDS: usize = 2;

/// Character used to draw horizontal rules.
const RULE_CHAR: u8 = b'_';

/// # ESC/POS Thermal Printer
///
/// Owns its transport, formatting state and command buffer. All methods take
/// `&mut self`; share an instance across threads only behind an external lock.
#[derive(Debug)]
pub struct ThermalPrinter<T: Transport> {
    transport: T,
    config: PrinterConfig,
    state: PrinterState,
    buffer: CommandBuffer,
}

impl<T: Transport> ThermalPrinter<T> {
    /// Connect with the default 58mm configuration.
    ///
    /// ## Errors
    ///
    /// Propagates a failed reset write.
    pub fn new(transport: T) -> Result<Self, PrinterError> {
        Self::with_config(transport, PrinterConfig::default())
    }

    /// Connect and immediately send `ESC @` straight to the transport, so the
    /// hardware starts in the same zeroed state the tracker assumes.
    pub fn with_config(transport: T, config: PrinterConfig) -> Result<Self, PrinterError> {
        let mut printer = Self {
            transport,
            config,
            state: PrinterState::new(),
            buffer: CommandBuffer::new(),
        };
        printer.direct_reset()?;
        Ok(printer)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    pub fn state(&self) -> &PrinterState {
        &self.state
    }

    /// Bytes waiting for the next flush.
    pub fn buffer(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give up the printer and return its transport. Unflushed bytes are lost.
    pub fn into_transport(self) -> T {
        self.transport
    }

    // ========================================================================
    // DIRECT (UNBUFFERED) OUTPUT
    // ========================================================================

    /// Send `ESC @` without touching the buffer.
    pub fn direct_reset(&mut self) -> Result<(), PrinterError> {
        log::debug!("direct reset");
        self.transport.write(&commands::init())
    }

    /// Write `data` to the transport, then `feeds` line feeds as a second
    /// write. The buffer is neither used nor changed.
    pub fn direct_write(&mut self, data: &[u8], feeds: usize) -> Result<(), PrinterError> {
        write_with_feeds(&mut self.transport, data, feeds)
    }

    /// [`direct_write`](Self::direct_write) with the configured feed count.
    pub fn direct_print(&mut self, data: &[u8]) -> Result<(), PrinterError> {
        let feeds = self.config.direct_feeds;
        self.direct_write(data, feeds)
    }

    // ========================================================================
    // BUFFER
    // ========================================================================

    /// Append raw bytes (opcodes, pre-encoded text) and `feeds` line feeds.
    pub fn add_bytes(&mut self, data: &[u8], feeds: usize) {
        self.buffer.append_bytes(data, feeds);
    }

    /// Append UTF-8 text and `feeds` line feeds (usually [`TEXT_FEEDS`]).
    pub fn add_text(&mut self, text: &str, feeds: usize) {
        self.buffer.append_text(text, feeds);
    }

    /// Append `count` line feeds.
    pub fn newline(&mut self, count: usize) {
        self.buffer.newline(count);
    }

    /// Append a horizontal tab.
    pub fn tab(&mut self) {
        self.buffer.append_bytes(&[HT], 0);
    }

    /// Append a rule of `width` underscores and `feeds` line feeds.
    pub fn add_horizontal_line(&mut self, width: usize, feeds: usize) {
        self.buffer.append_bytes(&vec![RULE_CHAR; width], feeds);
    }

    /// Full-width rule using the configured line width.
    pub fn add_rule(&mut self) {
        let width = self.config.line_chars;
        self.add_horizontal_line(width, RULE_FEEDS);
    }

    /// Drop everything buffered. Formatting state is kept.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Send the buffer as one write, then `feeds` line feeds as a second one,
    /// then empty the buffer if `clear_after` is set.
    ///
    /// ## Errors
    ///
    /// On a transport failure the buffer is left exactly as it was, so the
    /// same flush can be retried.
    pub fn flush(&mut self, feeds: usize, clear_after: bool) -> Result<(), PrinterError> {
        log::debug!(
            "flushing {} buffered bytes (+{} feeds, clear={})",
            self.buffer.len(),
            feeds,
            clear_after
        );
        write_with_feeds(&mut self.transport, self.buffer.as_bytes(), feeds)?;
        if clear_after {
            self.buffer.clear();
        }
        Ok(())
    }

    /// Flush with the configured feed count and clear the buffer.
    pub fn print(&mut self) -> Result<(), PrinterError> {
        let feeds = self.config.flush_feeds;
        self.flush(feeds, true)
    }

    // ========================================================================
    // PRINT MODE (ESC !)
    // ========================================================================

    fn push_mode(&mut self) {
        let mode = self.state.mode();
        log::debug!("print mode {:#04x}", mode.bits());
        self.buffer.append_bytes(&commands::print_mode(mode.bits()), 0);
    }

    /// Set, clear or flip `mask`, then append the full resulting mode.
    ///
    /// Always appends, even when the mode did not change.
    pub fn toggle_mode(&mut self, mask: PrintMode, toggle: impl Into<Toggle>) {
        self.state.toggle_mode(mask, toggle.into());
        self.push_mode();
    }

    pub fn set_bold(&mut self, toggle: impl Into<Toggle>) {
        self.toggle_mode(PrintMode::BOLD, toggle);
    }

    pub fn set_double_height(&mut self, toggle: impl Into<Toggle>) {
        self.toggle_mode(PrintMode::DOUBLE_HEIGHT, toggle);
    }

    pub fn set_double_width(&mut self, toggle: impl Into<Toggle>) {
        self.toggle_mode(PrintMode::DOUBLE_WIDTH, toggle);
    }

    pub fn set_underline(&mut self, toggle: impl Into<Toggle>) {
        self.toggle_mode(PrintMode::UNDERLINE, toggle);
    }

    pub fn set_font(&mut self, font: Font) {
        self.state.set_font(font);
        self.push_mode();
    }

    /// Select a font by name (`"A"` or `"B"`).
    ///
    /// An unknown name is logged and leaves the mode unchanged, but the
    /// unchanged mode is still appended. Existing integrations rely on the
    /// byte count staying the same.
    pub fn set_font_name(&mut self, name: &str) {
        match Font::from_name(name) {
            Some(font) => self.set_font(font),
            None => {
                log::warn!("font must be A or B, got {:?}; print mode unchanged", name);
                self.push_mode();
            }
        }
    }

    /// Clear every print-mode attribute and append `ESC ! 0`.
    ///
    /// Upside-down printing is a separate command and stays as it was.
    pub fn reset_print_mode(&mut self) {
        self.state.reset_mode();
        self.push_mode();
    }

    // ========================================================================
    // LAYOUT COMMANDS
    // ========================================================================

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.set_rotation_code(rotation.code());
    }

    /// Append `ESC V n` with `code` passed through uninterpreted.
    pub fn set_rotation_code(&mut self, code: u8) {
        log::debug!("rotation {}", code);
        self.buffer.append_bytes(&commands::rotate(code), 0);
    }

    /// Set, clear or flip upside-down printing and append `ESC { n`.
    pub fn set_upside_down(&mut self, toggle: impl Into<Toggle>) {
        let enabled = self.state.set_upside_down(toggle.into());
        log::debug!("upside down {}", enabled);
        self.buffer.append_bytes(&commands::upside_down(enabled), 0);
    }

    /// Append `GS !` for `height`×`width` magnification.
    ///
    /// ## Errors
    ///
    /// [`PrinterError::InvalidArgument`] if either value is outside 1..=16.
    /// Nothing is appended in that case.
    pub fn set_magnification(&mut self, height: u8, width: u8) -> Result<(), PrinterError> {
        let size = Magnification::new(height, width)?;
        self.set_size(size);
        Ok(())
    }

    pub fn set_size(&mut self, size: Magnification) {
        log::debug!("magnification {}x{}", size.height(), size.width());
        self.buffer
            .append_bytes(&commands::magnification(size.encode()), 0);
    }

    /// Back to 1×1.
    pub fn reset_magnification(&mut self) {
        self.set_size(Magnification::NORMAL);
    }

    /// Append `ESC a n`.
    ///
    /// Justification only applies at the start of a line, so a line feed is
    /// appended first when the buffer holds an unterminated line.
    pub fn set_justification(&mut self, justification: Justification) {
        if self.buffer.ensure_line_start() {
            log::debug!("terminated open line before justification");
        }
        log::debug!("justification {:?}", justification);
        self.buffer
            .append_bytes(&commands::justify(justification.code()), 0);
    }

    /// [`set_justification`](Self::set_justification) keyed on the first
    /// letter of `name` (`c`enter, `r`ight, anything else left).
    pub fn set_justification_name(&mut self, name: &str) {
        self.set_justification(Justification::from_name(name));
    }
}

/// Payload write followed by a separate feed write (skipped for zero feeds).
fn write_with_feeds<T: Transport>(
    transport: &mut T,
    data: &[u8],
    feeds: usize,
) -> Result<(), PrinterError> {
    transport.write(data)?;
    if feeds > 0 {
        transport.write(&commands::line_feeds(feeds))?;
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
