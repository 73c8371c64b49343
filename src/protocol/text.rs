//! # Text Styling Parameters
//!
//! Typed values for the payload bytes of the text-styling commands.
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```
//!
//! ## Font Selection
//!
//! | Font | Size | Columns (58mm) |
//! |------|------|----------------|
//! | Font A | 12×24 dots | 32 chars |
//! | Font B | 9×17 dots | 42 chars |

use crate::error::PrinterError;

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Available fonts, selected through bit 0 of the print-mode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// Font A: 12×24 dots
    #[default]
    A,
    /// Font B: 9×17 dots
    B,
}

impl Font {
    /// Parse the exact names `"A"` and `"B"`.
    ///
    /// ```
    /// use thermal_printer::protocol::text::Font;
    ///
    /// assert_eq!(Font::from_name("B"), Some(Font::B));
    /// assert_eq!(Font::from_name("b"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "A" => Some(Font::A),
            "B" => Some(Font::B),
            _ => None,
        }
    }
}

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Justification codes for `ESC a n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl Justification {
    /// Parse by first letter, case-insensitive.
    ///
    /// Anything that does not start with `c` or `r` (including the empty
    /// string) is left justification.
    ///
    /// ```
    /// use thermal_printer::protocol::text::Justification;
    ///
    /// assert_eq!(Justification::from_name("Center"), Justification::Center);
    /// assert_eq!(Justification::from_name("R"), Justification::Right);
    /// assert_eq!(Justification::from_name("middle"), Justification::Left);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('c') => Justification::Center,
            Some('r') => Justification::Right,
            _ => Justification::Left,
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

// ============================================================================
// ROTATION
// ============================================================================

/// Known codes for `ESC V n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// No rotation
    #[default]
    None = 0,
    /// 90° clockwise
    Clockwise = 1,
    /// 90° clockwise with 1.5 dot character spacing
    ClockwiseWide = 2,
}

impl Rotation {
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<Rotation> for u8 {
    fn from(rotation: Rotation) -> Self {
        rotation.code()
    }
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Largest multiplier a nibble can carry.
pub const MAX_MAGNIFICATION: u8 = 16;

/// # Character Magnification (GS ! n)
///
/// Height and width multipliers, each 1..=16.
///
/// ## Encoding
///
/// ```text
/// bit:  7 6 5 4 | 3 2 1 0
///       width-1 | height-1
/// ```
///
/// ## Example
///
/// ```
/// use thermal_printer::protocol::text::Magnification;
///
/// let size = Magnification::new(3, 1)?;
/// assert_eq!(size.encode(), 0x02);
///
/// assert!(Magnification::new(0, 1).is_err());
/// # Ok::<(), thermal_printer::PrinterError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnification {
    height: u8,
    width: u8,
}

impl Magnification {
    /// Normal 1×1 size.
    pub const NORMAL: Self = Self {
        height: 1,
        width: 1,
    };

    /// Validate both multipliers.
    ///
    /// ## Errors
    ///
    /// [`PrinterError::InvalidArgument`] if either value is outside 1..=16.
    pub fn new(height: u8, width: u8) -> Result<Self, PrinterError> {
        for (name, value) in [("height", height), ("width", width)] {
            if !(1..=MAX_MAGNIFICATION).contains(&value) {
                return Err(PrinterError::InvalidArgument(format!(
                    "magnification {name} must be 1..={MAX_MAGNIFICATION}, got {value}"
                )));
            }
        }
        Ok(Self { height, width })
    }

    #[inline]
    pub fn height(self) -> u8 {
        self.height
    }

    #[inline]
    pub fn width(self) -> u8 {
        self.width
    }

    /// Packed `GS !` payload byte.
    #[inline]
    pub fn encode(self) -> u8 {
        ((self.width - 1) << 4) | (self.height - 1)
    }
}

impl Default for Magnification {
    fn default() -> Self {
        Self::NORMAL
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_from_name() {
        assert_eq!(Font::from_name("A"), Some(Font::A));
        assert_eq!(Font::from_name("B"), Some(Font::B));
        assert_eq!(Font::from_name("C"), None);
        assert_eq!(Font::from_name(""), None);
    }

    #[test]
    fn test_justification_from_name() {
        assert_eq!(Justification::from_name("left"), Justification::Left);
        assert_eq!(Justification::from_name("L"), Justification::Left);
        assert_eq!(Justification::from_name("center"), Justification::Center);
        assert_eq!(Justification::from_name("CENTRE"), Justification::Center);
        assert_eq!(Justification::from_name("right"), Justification::Right);
        assert_eq!(Justification::from_name("Rechts"), Justification::Right);
        assert_eq!(Justification::from_name("justify"), Justification::Left);
        assert_eq!(Justification::from_name(""), Justification::Left);
    }

    #[test]
    fn test_justification_codes() {
        assert_eq!(Justification::Left.code(), 0);
        assert_eq!(Justification::Center.code(), 1);
        assert_eq!(Justification::Right.code(), 2);
    }

    #[test]
    fn test_rotation_codes() {
        assert_eq!(u8::from(Rotation::None), 0);
        assert_eq!(u8::from(Rotation::Clockwise), 1);
        assert_eq!(u8::from(Rotation::ClockwiseWide), 2);
    }

    #[test]
    fn test_magnification_encode() {
        assert_eq!(Magnification::NORMAL.encode(), 0x00);
        assert_eq!(Magnification::new(3, 1).unwrap().encode(), 0x02);
        assert_eq!(Magnification::new(1, 2).unwrap().encode(), 0x10);
        assert_eq!(Magnification::new(2, 2).unwrap().encode(), 0x11);
        assert_eq!(Magnification::new(16, 16).unwrap().encode(), 0xFF);
    }

    #[test]
    fn test_magnification_rejects_out_of_range() {
        assert!(Magnification::new(0, 1).is_err());
        assert!(Magnification::new(1, 0).is_err());
        assert!(Magnification::new(17, 1).is_err());
        assert!(Magnification::new(1, 17).is_err());
    }

    #[test]
    fn test_magnification_default_is_normal() {
        let size = Magnification::default();
        assert_eq!((size.height(), size.width()), (1, 1));
    }
}
