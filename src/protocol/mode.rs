//! # Print Mode Bitmask
//!
//! The `ESC ! n` payload byte. Each bit independently enables one attribute:
//!
//! | Bit | Mask | Attribute |
//! |-----|------|-----------|
//! | 0 | `0x01` | Font B (clear = font A) |
//! | 3 | `0x08` | Bold (emphasized) |
//! | 4 | `0x10` | Double height |
//! | 5 | `0x20` | Double width |
//! | 7 | `0x80` | Underline |
//!
//! Bits 1, 2 and 6 are never set by this crate.

use bitflags::bitflags;

/// Three-way request for a boolean printer attribute.
///
/// `On` and `Off` are absolute; `Flip` inverts whatever is currently set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Toggle {
    On,
    Off,
    #[default]
    Flip,
}

impl Toggle {
    /// Resolve against the current value.
    #[inline]
    pub fn apply(self, current: bool) -> bool {
        match self {
            Toggle::On => true,
            Toggle::Off => false,
            Toggle::Flip => !current,
        }
    }
}

impl From<bool> for Toggle {
    fn from(enabled: bool) -> Self {
        if enabled { Toggle::On } else { Toggle::Off }
    }
}

/// `None` flips.
impl From<Option<bool>> for Toggle {
    fn from(setting: Option<bool>) -> Self {
        setting.map_or(Toggle::Flip, Toggle::from)
    }
}

bitflags! {
    /// # Print Mode Byte
    ///
    /// The `ESC ! n` payload. Only the named flags are ever set, so the
    /// unused bits always stay zero.
    ///
    /// ## Example
    ///
    /// ```
    /// use thermal_printer::protocol::mode::{PrintMode, Toggle};
    ///
    /// let mut mode = PrintMode::default();
    /// mode.apply(PrintMode::BOLD, Toggle::On);
    /// mode.apply(PrintMode::UNDERLINE, Toggle::On);
    /// assert_eq!(mode.bits(), 0x88);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PrintMode: u8 {
        /// Select character font B (clear for font A)
        const FONT          = 1 << 0;
        /// Emphasized printing
        const BOLD          = 1 << 3;
        /// Double-height characters
        const DOUBLE_HEIGHT = 1 << 4;
        /// Double-width characters
        const DOUBLE_WIDTH  = 1 << 5;
        /// Underline
        const UNDERLINE     = 1 << 7;
    }
}

impl PrintMode {
    /// Set, clear or flip `mask` according to `toggle`.
    pub fn apply(&mut self, mask: Self, toggle: Toggle) {
        match toggle {
            Toggle::On => self.insert(mask),
            Toggle::Off => self.remove(mask),
            Toggle::Flip => self.toggle(mask),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_values() {
        assert_eq!(PrintMode::FONT.bits(), 0x01);
        assert_eq!(PrintMode::BOLD.bits(), 0x08);
        assert_eq!(PrintMode::DOUBLE_HEIGHT.bits(), 0x10);
        assert_eq!(PrintMode::DOUBLE_WIDTH.bits(), 0x20);
        assert_eq!(PrintMode::UNDERLINE.bits(), 0x80);
        assert_eq!(PrintMode::all().bits(), 0xB9);
    }

    #[test]
    fn test_toggle_from_bool_and_option() {
        assert_eq!(Toggle::from(true), Toggle::On);
        assert_eq!(Toggle::from(false), Toggle::Off);
        assert_eq!(Toggle::from(None::<bool>), Toggle::Flip);
        assert_eq!(Toggle::from(Some(true)), Toggle::On);
        assert_eq!(Toggle::from(Some(false)), Toggle::Off);
    }

    #[test]
    fn test_toggle_apply() {
        assert!(Toggle::On.apply(false));
        assert!(!Toggle::Off.apply(true));
        assert!(Toggle::Flip.apply(false));
        assert!(!Toggle::Flip.apply(true));
    }

    #[test]
    fn test_apply_on_off_flip() {
        let mut mode = PrintMode::default();
        assert!(mode.is_empty());
        mode.apply(PrintMode::BOLD, Toggle::On);
        assert_eq!(mode.bits(), 0x08);
        mode.apply(PrintMode::BOLD, Toggle::On);
        assert_eq!(mode.bits(), 0x08);
        mode.apply(PrintMode::DOUBLE_WIDTH, Toggle::Flip);
        assert_eq!(mode.bits(), 0x28);
        mode.apply(PrintMode::BOLD, Toggle::Off);
        assert_eq!(mode.bits(), 0x20);
        mode.apply(PrintMode::DOUBLE_WIDTH, Toggle::Flip);
        assert!(mode.is_empty());
    }

    #[test]
    fn test_from_bits_truncate_drops_unused_bits() {
        assert_eq!(PrintMode::from_bits_truncate(0xFF).bits(), 0xB9);
        assert_eq!(PrintMode::from_bits_truncate(0x46).bits(), 0x00);
    }
}
