// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.
//!
//! Every color token that is not a base ANSI color (hex strings, RGB triples, color
//! names) resolves to one of these before it is rendered for the active
//! [`ColorMode`].
//!
//! [`ColorMode`]: crate::ColorMode

use super::{AnsiValue,
            convert::{convert_rgb_into_ansi16, convert_rgb_into_ansi256},
            hex_color_parser::parse_hex_color};
use crate::{PaintError, PaintResult, TransformColor};

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<u32> for RgbValue {
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Build a color from three integers, each of which must be in `0..=255`.
    ///
    /// # Errors
    ///
    /// Returns [`PaintError::RgbOutOfRange`] if any component is outside `0..=255`.
    pub fn try_from_components(red: i64, green: i64, blue: i64) -> PaintResult<Self> {
        match (u8::try_from(red), u8::try_from(green), u8::try_from(blue)) {
            (Ok(red), Ok(green), Ok(blue)) => Ok(Self { red, green, blue }),
            _ => Err(PaintError::RgbOutOfRange { red, green, blue }),
        }
    }

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` (case-insensitive). The input is only
    /// borrowed, so the caller's string is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`PaintError::InvalidHexColor`] if the input has the wrong length or
    /// contains non hex digits.
    pub fn try_from_hex_color(input: &str) -> PaintResult<RgbValue> {
        match parse_hex_color(input) {
            Ok((_, color)) => Ok(color),
            Err(_) => Err(PaintError::InvalidHexColor {
                input: input.to_string(),
            }),
        }
    }

    /// Squared euclidean distance, used for nearest color searches.
    #[must_use]
    pub fn distance_squared(&self, other: RgbValue) -> u32 {
        let delta = |lhs: u8, rhs: u8| u32::from(lhs.abs_diff(rhs)).pow(2);
        delta(self.red, other.red)
            + delta(self.green, other.green)
            + delta(self.blue, other.blue)
    }
}

impl TransformColor for RgbValue {
    fn as_rgb(&self) -> RgbValue { *self }

    fn as_ansi(&self) -> AnsiValue { convert_rgb_into_ansi256(*self) }

    fn as_ansi16(&self) -> AnsiValue { convert_rgb_into_ansi16(*self) }
}
