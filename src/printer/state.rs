//! # Printer State Tracking
//!
//! `ESC !` always carries the complete print mode, so changing one attribute
//! means re-sending all the others. [`PrinterState`] remembers what has been
//! sent so far and computes the next absolute value for each request.
//!
//! The upside-down flag belongs to a different command (`ESC {`) and is
//! tracked separately. Resetting the print mode does not touch it.

use crate::protocol::mode::{PrintMode, Toggle};
use crate::protocol::text::Font;

/// Cumulative formatting state mirrored from the commands already emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrinterState {
    mode: PrintMode,
    upside_down: bool,
}

impl PrinterState {
    /// Power-on state: empty print mode, upright.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    #[inline]
    pub fn upside_down(&self) -> bool {
        self.upside_down
    }

    /// Font currently selected by bit 0.
    pub fn font(&self) -> Font {
        if self.mode.contains(PrintMode::FONT) {
            Font::B
        } else {
            Font::A
        }
    }

    /// Update one attribute and return the resulting mode.
    pub fn toggle_mode(&mut self, mask: PrintMode, toggle: Toggle) -> PrintMode {
        self.mode.apply(mask, toggle);
        self.mode
    }

    /// Select a font and return the resulting mode.
    pub fn set_font(&mut self, font: Font) -> PrintMode {
        let toggle = match font {
            Font::A => Toggle::Off,
            Font::B => Toggle::On,
        };
        self.toggle_mode(PrintMode::FONT, toggle)
    }

    /// Clear every print-mode attribute. The upside-down flag is kept.
    pub fn reset_mode(&mut self) -> PrintMode {
        self.mode = PrintMode::empty();
        self.mode
    }

    /// Update the upside-down flag and return its new value.
    pub fn set_upside_down(&mut self, toggle: Toggle) -> bool {
        self.upside_down = toggle.apply(self.upside_down);
        self.upside_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let state = PrinterState::new();
        assert!(state.mode().is_empty());
        assert!(!state.upside_down());
        assert_eq!(state.font(), Font::A);
    }

    #[test]
    fn test_toggle_mode_accumulates() {
        let mut state = PrinterState::new();
        assert_eq!(state.toggle_mode(PrintMode::BOLD, Toggle::On).bits(), 0x08);
        assert_eq!(
            state.toggle_mode(PrintMode::UNDERLINE, Toggle::On).bits(),
            0x88
        );
        assert_eq!(
            state.toggle_mode(PrintMode::BOLD, Toggle::Flip).bits(),
            0x80
        );
    }

    #[test]
    fn test_set_font() {
        let mut state = PrinterState::new();
        state.toggle_mode(PrintMode::BOLD, Toggle::On);

        assert_eq!(state.set_font(Font::B).bits(), 0x09);
        assert_eq!(state.font(), Font::B);
        assert_eq!(state.set_font(Font::A).bits(), 0x08);
        assert_eq!(state.font(), Font::A);
    }

    #[test]
    fn test_reset_mode_keeps_upside_down() {
        let mut state = PrinterState::new();
        state.toggle_mode(PrintMode::DOUBLE_WIDTH, Toggle::On);
        state.set_upside_down(Toggle::On);

        assert!(state.reset_mode().is_empty());
        assert!(state.upside_down());
    }

    #[test]
    fn test_upside_down_flip() {
        let mut state = PrinterState::new();
        assert!(state.set_upside_down(Toggle::Flip));
        assert!(!state.set_upside_down(Toggle::Flip));
        assert!(!state.set_upside_down(Toggle::Off));
        assert!(state.set_upside_down(Toggle::On));
        assert!(state.set_upside_down(Toggle::On));
    }
}
