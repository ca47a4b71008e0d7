// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turn one [`ColorSpec`] token into a canonical value, independent of the color mode.
//! Nothing here looks at the mode; that is the job of [`quantize`].
//!
//! [`quantize`]: crate::quantize

use rand::Rng;

use super::{AnsiColor, BASE_COLORS, ColorSpec, Effect};
use crate::{Ground, PaintError, PaintResult, RgbValue, lookup_color_name};

/// A color that is ready to be rendered for a color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedColor {
    Ansi(AnsiColor),
    Rgb(RgbValue),
}

/// The canonical form of one [`ColorSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolved {
    /// Fills the next free color slot (foreground, then background).
    Color(ResolvedColor),
    /// Fills the next free color slot with nothing.
    Skip,
    /// Rendered into a fixed ground without taking a slot.
    Grounded { color: ResolvedColor, ground: Ground },
    Effect(Effect),
    Raw(u16),
}

/// Resolve one token. The token is only borrowed, so caller owned strings are left
/// exactly as they were. [`ColorSpec::Random`] draws a new base color on every call.
///
/// # Errors
///
/// - [`PaintError::InvalidHexColor`] for a malformed hex string.
/// - [`PaintError::RgbOutOfRange`] for an RGB triple with a component outside
///   `0..=255`.
/// - [`PaintError::UnknownColorName`] for a name that is not in the color name table.
pub fn normalize(token: &ColorSpec) -> PaintResult<Resolved> {
    let it = match token {
        ColorSpec::Ansi(color) => Resolved::Color(ResolvedColor::Ansi(*color)),
        ColorSpec::Effect(effect) => Resolved::Effect(*effect),
        ColorSpec::Raw(code) => Resolved::Raw(*code),
        ColorSpec::Nil => Resolved::Skip,
        ColorSpec::Random { background } => Resolved::Grounded {
            color: ResolvedColor::Ansi(random_base_color()),
            ground: if *background {
                Ground::Background
            } else {
                Ground::Foreground
            },
        },
        ColorSpec::Rgb(red, green, blue) => Resolved::Color(ResolvedColor::Rgb(
            RgbValue::try_from_components(*red, *green, *blue)?,
        )),
        ColorSpec::Hex(input) => {
            Resolved::Color(ResolvedColor::Rgb(RgbValue::try_from_hex_color(input)?))
        }
        ColorSpec::Name(name) => match lookup_color_name(name) {
            Some(rgb) => Resolved::Color(ResolvedColor::Rgb(rgb)),
            None => {
                return Err(PaintError::UnknownColorName { name: name.clone() });
            }
        },
    };
    Ok(it)
}

/// Draw one of the eight base colors from the thread local generator.
#[must_use]
pub fn random_base_color() -> AnsiColor {
    let mut rng = rand::rng();
    BASE_COLORS[rng.random_range(0..BASE_COLORS.len())]
}
