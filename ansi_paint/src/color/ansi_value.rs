// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI 256-color palette representation.
//!
//! Each index (0-255) maps to a specific color in [`ANSI_COLOR_PALETTE`].
//!
//! [`ANSI_COLOR_PALETTE`]: super::ansi_constants::ANSI_COLOR_PALETTE

use super::{RgbValue,
            ansi_constants::{ANSI_COLOR_PALETTE, SYSTEM_COLOR_COUNT},
            convert::convert_rgb_into_ansi16};
use crate::TransformColor;

/// Represents a color in the ANSI 256-color palette format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl From<AnsiValue> for RgbValue {
    fn from(ansi: AnsiValue) -> Self { ansi.as_rgb() }
}

impl TransformColor for AnsiValue {
    fn as_rgb(&self) -> RgbValue {
        let index = self.index as usize;
        ANSI_COLOR_PALETTE[index].into()
    }

    fn as_ansi(&self) -> AnsiValue { *self }

    fn as_ansi16(&self) -> AnsiValue {
        if self.is_system() {
            *self
        } else {
            convert_rgb_into_ansi16(self.as_rgb())
        }
    }
}

impl AnsiValue {
    /// Create a new ANSI color value.
    #[must_use]
    pub const fn new(color: u8) -> Self { Self { index: color } }

    /// Check if this is one of the 16 system colors (indices 0-15).
    #[must_use]
    pub const fn is_system(&self) -> bool { (self.index as usize) < SYSTEM_COLOR_COUNT }

    /// Check if this is a bright system color (indices 8-15).
    #[must_use]
    pub const fn is_bright(&self) -> bool { self.index >= 8 && self.is_system() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    /// <https://www.ditig.com/256-colors-cheat-sheet>
    /// ANSI: 57 `BlueViolet`
    /// RGB: #5f00ff rgb(95,0,255)
    #[test]
    fn test_ansi_to_rgb() {
        let ansi = AnsiValue::new(57);
        let rgb = RgbValue::from(ansi);
        assert_eq!(rgb, RgbValue::from_u8(95, 0, 255));
    }

    #[test_case(AnsiValue{index: 42}, RgbValue{red: 0, green: 215, blue: 135})]
    #[test_case(AnsiValue{index: 238}, RgbValue{red: 68, green: 68, blue: 68})]
    fn test_ansi256_color_as_rgb(ansi_color: AnsiValue, rgb_color: RgbValue) {
        assert_eq!(ansi_color.as_rgb(), rgb_color);
    }

    #[test]
    fn test_system_colors_keep_their_index_in_ansi16() {
        for index in 0..16 {
            assert_eq!(AnsiValue::new(index).as_ansi16(), AnsiValue::new(index));
        }
    }

    #[test]
    fn test_cube_color_degrades_to_system_color() {
        // 196 is (255, 0, 0), which is exactly system color 9 (bright red).
        assert_eq!(AnsiValue::new(196).as_ansi16(), AnsiValue::new(9));
    }

    #[test]
    fn test_is_system_and_is_bright() {
        assert!(AnsiValue::new(3).is_system());
        assert!(!AnsiValue::new(3).is_bright());
        assert!(AnsiValue::new(11).is_bright());
        assert!(!AnsiValue::new(16).is_system());
        assert!(!AnsiValue::new(16).is_bright());
    }
}
