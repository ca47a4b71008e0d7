// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{AnsiValue, RgbValue};

pub trait TransformColor {
    /// Returns a [`RgbValue`] representation of the `self` color.
    fn as_rgb(&self) -> RgbValue;

    /// Returns the index of a color in 256-color ANSI palette approximating the `self`
    /// color.
    fn as_ansi(&self) -> AnsiValue;

    /// Returns the index (`0..=15`) of the system color closest to the `self` color.
    fn as_ansi16(&self) -> AnsiValue;
}
