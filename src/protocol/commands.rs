//! # ESC/POS Protocol Commands
//!
//! Opcode builders for the small ESC/POS subset understood by common serial
//! thermal receipt printers (Epson TM series, Adafruit/CSN-A2 style modules).
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`, `HT`
//! - Two bytes: `ESC @`
//! - Prefix plus one payload byte: `ESC ! n`, `ESC V n`, `ESC a n`,
//!   `ESC { n`, `GS ! n`
//!
//! Every builder returns a freshly allocated `Vec<u8>` so callers can
//! `extend` a buffer with it directly.
//!
//! ## Reference
//!
//! Epson ESC/POS Command Reference, "ESC !", "ESC @", "ESC V", "ESC a",
//! "ESC {" and "GS !".

// ============================================================================
// CONTROL BYTES
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used here only for character magnification (`GS !`).
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

/// HT (Horizontal Tab) - Advance to next tab position
pub const HT: u8 = 0x09;

// ============================================================================
// COMMAND PREFIXES
// ============================================================================

/// `ESC !` - Select print mode (followed by the mode bitmask)
pub const PRINT_MODE: [u8; 2] = [ESC, b'!'];

/// `ESC @` - Initialize printer
pub const RESET: [u8; 2] = [ESC, b'@'];

/// `ESC V` - Turn 90° clockwise rotation on/off (followed by a code)
pub const ROTATE: [u8; 2] = [ESC, b'V'];

/// `ESC a` - Select justification (followed by 0, 1 or 2)
pub const JUSTIFY: [u8; 2] = [ESC, b'a'];

/// `ESC {` - Upside-down printing (followed by 0 or 1)
pub const UPSIDE_DOWN: [u8; 2] = [ESC, b'{'];

/// `GS !` - Select character size (followed by the packed size byte)
pub const MAGNIFICATION: [u8; 2] = [GS, b'!'];

/// Prefix followed by its single payload byte.
#[inline]
fn with_param(prefix: [u8; 2], n: u8) -> Vec<u8> {
    let mut cmd = prefix.to_vec();
    cmd.push(n);
    cmd
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state: print mode cleared,
/// no rotation, left justification, 1×1 magnification.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## Example
///
/// ```
/// use thermal_printer::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    RESET.to_vec()
}

// ============================================================================
// PRINT MODE
// ============================================================================

/// # Select Print Mode (ESC ! n)
///
/// Sends the absolute print-mode byte. The protocol has no delta form, so
/// every change must carry every attribute that should stay on.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC ! n |
/// | Hex     | 1B 21 n |
/// | Decimal | 27 33 n |
///
/// See [`crate::protocol::mode::PrintMode`] for the bit layout.
///
/// ## Example
///
/// ```
/// use thermal_printer::protocol::commands;
///
/// // Bold + underline
/// assert_eq!(commands::print_mode(0x88), vec![0x1B, 0x21, 0x88]);
/// ```
#[inline]
pub fn print_mode(n: u8) -> Vec<u8> {
    with_param(PRINT_MODE, n)
}

// ============================================================================
// LAYOUT
// ============================================================================

/// # 90° Rotation (ESC V n)
///
/// ## Parameters
///
/// - `n = 0`: rotation off
/// - `n = 1`: 90° clockwise
/// - `n = 2`: 90° clockwise, 1.5 dot character spacing
///
/// The code is sent verbatim; firmware decides what to do with anything else.
#[inline]
pub fn rotate(n: u8) -> Vec<u8> {
    with_param(ROTATE, n)
}

/// # Select Justification (ESC a n)
///
/// | n | Justification |
/// |---|---------------|
/// | 0 | Left |
/// | 1 | Center |
/// | 2 | Right |
///
/// Takes effect only at the beginning of a line.
#[inline]
pub fn justify(n: u8) -> Vec<u8> {
    with_param(JUSTIFY, n)
}

/// # Upside-Down Printing (ESC { n)
///
/// ## Example
///
/// ```
/// use thermal_printer::protocol::commands;
///
/// assert_eq!(commands::upside_down(true), vec![0x1B, 0x7B, 0x01]);
/// assert_eq!(commands::upside_down(false), vec![0x1B, 0x7B, 0x00]);
/// ```
#[inline]
pub fn upside_down(enabled: bool) -> Vec<u8> {
    with_param(UPSIDE_DOWN, u8::from(enabled))
}

/// # Select Character Size (GS ! n)
///
/// `n` packs the width multiplier minus one in the high nibble and the
/// height multiplier minus one in the low nibble. See
/// [`crate::protocol::text::Magnification::encode`].
#[inline]
pub fn magnification(n: u8) -> Vec<u8> {
    with_param(MAGNIFICATION, n)
}

// ============================================================================
// PAPER FEED
// ============================================================================

/// `count` line feeds.
///
/// ## Example
///
/// ```
/// use thermal_printer::protocol::commands;
///
/// assert_eq!(commands::line_feeds(3), vec![0x0A, 0x0A, 0x0A]);
/// assert!(commands::line_feeds(0).is_empty());
/// ```
#[inline]
pub fn line_feeds(count: usize) -> Vec<u8> {
    vec![LF; count]
}

// ============================================================================
// TESTS
// ============================================================================
