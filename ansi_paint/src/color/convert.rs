// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB to palette index conversions.
//!
//! The 256-color conversion first checks whether the three channels sit in the same
//! 42.5 wide band. If so the color is treated as a gray and mapped onto the grayscale
//! ramp (`232..=255`) by the channel sum. Otherwise each channel is mapped to one of
//! the six cube slots with `floor(6 * channel / 256)`. Integer math only, so the same
//! input always produces the same index.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://www.ditig.com/256-colors-cheat-sheet>

use super::{AnsiValue, RgbValue,
            ansi_constants::{ANSI_COLOR_PALETTE, CUBE_START, GRAYSCALE_START,
                             SYSTEM_COLOR_COUNT}};

/// Convert an RGB color into the closest-by-formula 256-color palette index.
#[must_use]
pub fn convert_rgb_into_ansi256(rgb: RgbValue) -> AnsiValue {
    if is_gray(rgb) {
        let sum = u16::from(rgb.red) + u16::from(rgb.green) + u16::from(rgb.blue);
        // round(sum / 33), halves rounded up.
        let step = (sum * 2 + 33) / 66;
        AnsiValue::new(GRAYSCALE_START + lossy_u8(step))
    } else {
        let index = u16::from(CUBE_START)
            + 36 * cube_slot(rgb.red)
            + 6 * cube_slot(rgb.green)
            + cube_slot(rgb.blue);
        AnsiValue::new(lossy_u8(index))
    }
}

/// Convert an RGB color into the nearest of the 16 system colors.
#[must_use]
pub fn convert_rgb_into_ansi16(rgb: RgbValue) -> AnsiValue {
    let nearest = ANSI_COLOR_PALETTE[..SYSTEM_COLOR_COUNT]
        .iter()
        .enumerate()
        .min_by_key(|(_, it)| rgb.distance_squared(RgbValue::from(**it)))
        .map_or(0, |(index, _)| index);
    AnsiValue::new(lossy_u8(nearest))
}

fn is_gray(rgb: RgbValue) -> bool {
    let bands = [gray_band(rgb.red), gray_band(rgb.green), gray_band(rgb.blue)];
    bands.iter().min() == bands.iter().max()
}

/// `floor(channel / 42.5)`.
fn gray_band(channel: u8) -> u16 { u16::from(channel) * 2 / 85 }

/// `floor(6 * channel / 256)`, always in `0..=5`.
fn cube_slot(channel: u8) -> u16 { u16::from(channel) * 6 / 256 }

#[allow(clippy::cast_possible_truncation)]
fn lossy_u8(value: impl Into<usize>) -> u8 {
    let value: usize = value.into();
    debug_assert!(value <= 255, "palette index out of range: {value}");
    value as u8
}
