// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          str::FromStr};

use crate::{PaintError, PaintResult};

/// The color depth that output is rendered for.
///
/// | Mode          | Base colors | RGB colors                 | Legacy numeric setting |
/// | :------------ | :---------- | :------------------------- | :--------------------- |
/// | [`Off`]       | dropped     | dropped                    | `0`                    |
/// | [`Ansi16`]    | `30..=37`   | nearest of 16, `3x`/`9x`   | `8`, `16`              |
/// | [`Ansi256`]   | `30..=37`   | `38;5;<index>`             | `256`                  |
/// | [`Truecolor`] | `30..=37`   | `38;2;<r>;<g>;<b>`         | `0xFFFFFF`             |
///
/// Effects (bold, underline, ...) and raw integer codes are never dropped, not even in
/// [`Off`].
///
/// [`Off`]: Self::Off
/// [`Ansi16`]: Self::Ansi16
/// [`Ansi256`]: Self::Ansi256
/// [`Truecolor`]: Self::Truecolor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    Off,
    Ansi16,
    #[default]
    Ansi256,
    Truecolor,
}

/// Numeric value the true color mode is usually configured with.
pub const TRUECOLOR_MODE_VALUE: u32 = 0xFF_FF_FF;

impl ColorMode {
    /// Map a boolean "colors enabled" flag onto a mode. Legacy terminals only get the
    /// 16 color palette.
    #[must_use]
    pub const fn from_flag(enabled: bool, legacy_terminal: bool) -> Self {
        match (enabled, legacy_terminal) {
            (false, _) => ColorMode::Off,
            (true, true) => ColorMode::Ansi16,
            (true, false) => ColorMode::Truecolor,
        }
    }

    /// `true` for every mode except [`ColorMode::Off`].
    #[must_use]
    pub const fn renders_colors(&self) -> bool { !matches!(self, ColorMode::Off) }
}

impl TryFrom<u32> for ColorMode {
    type Error = PaintError;

    fn try_from(value: u32) -> PaintResult<Self> {
        match value {
            0 => Ok(ColorMode::Off),
            8 | 16 => Ok(ColorMode::Ansi16),
            256 => Ok(ColorMode::Ansi256),
            TRUECOLOR_MODE_VALUE | 0x1_00_00_00 => Ok(ColorMode::Truecolor),
            _ => Err(PaintError::InvalidColorMode {
                input: value.to_string(),
            }),
        }
    }
}

impl From<ColorMode> for u32 {
    fn from(value: ColorMode) -> Self {
        match value {
            ColorMode::Off => 0,
            ColorMode::Ansi16 => 16,
            ColorMode::Ansi256 => 256,
            ColorMode::Truecolor => TRUECOLOR_MODE_VALUE,
        }
    }
}

impl FromStr for ColorMode {
    type Err = PaintError;

    fn from_str(input: &str) -> PaintResult<Self> {
        let normalized = input.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "0" | "off" | "false" | "none" => Ok(ColorMode::Off),
            "8" | "16" | "ansi16" => Ok(ColorMode::Ansi16),
            "256" | "ansi256" => Ok(ColorMode::Ansi256),
            "true" | "truecolor" | "true color" | "24bit" => Ok(ColorMode::Truecolor),
            _ => match normalized.parse::<u32>() {
                Ok(number) => ColorMode::try_from(number),
                Err(_) => Err(PaintError::InvalidColorMode {
                    input: input.to_string(),
                }),
            },
        }
    }
}

impl Display for ColorMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ColorMode::Off => write!(f, "off"),
            ColorMode::Ansi16 => write!(f, "16"),
            ColorMode::Ansi256 => write!(f, "256"),
            ColorMode::Truecolor => write!(f, "true color"),
        }
    }
}

/// These trait implementations allow us to use `ColorMode` and `i8` interchangeably,
/// which is how the global override is stored.
mod convert_between_color_mode_and_i8 {
    impl TryFrom<i8> for super::ColorMode {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(super::ColorMode::Off),
                2 => Ok(super::ColorMode::Ansi16),
                3 => Ok(super::ColorMode::Ansi256),
                4 => Ok(super::ColorMode::Truecolor),
                _ => Err(()),
            }
        }
    }

    impl From<super::ColorMode> for i8 {
        #[rustfmt::skip]
        fn from(value: super::ColorMode) -> Self {
            match value {
                super::ColorMode::Off       => 1,
                super::ColorMode::Ansi16    => 2,
                super::ColorMode::Ansi256   => 3,
                super::ColorMode::Truecolor => 4,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(0, ColorMode::Off)]
    #[test_case(8, ColorMode::Ansi16)]
    #[test_case(16, ColorMode::Ansi16)]
    #[test_case(256, ColorMode::Ansi256)]
    #[test_case(0xFF_FF_FF, ColorMode::Truecolor)]
    fn from_legacy_number(value: u32, expected: ColorMode) {
        assert_eq!(ColorMode::try_from(value), Ok(expected));
    }

    #[test]
    fn from_unsupported_number() {
        assert_eq!(
            ColorMode::try_from(88_u32),
            Err(PaintError::InvalidColorMode { input: "88".into() })
        );
    }

    #[test_case("0", ColorMode::Off)]
    #[test_case("false", ColorMode::Off)]
    #[test_case("16", ColorMode::Ansi16)]
    #[test_case("256", ColorMode::Ansi256)]
    #[test_case("true", ColorMode::Truecolor)]
    #[test_case("True Color", ColorMode::Truecolor)]
    #[test_case("16777215", ColorMode::Truecolor)]
    fn from_text(input: &str, expected: ColorMode) {
        assert_eq!(input.parse::<ColorMode>(), Ok(expected));
    }

    #[test]
    fn from_bad_text() {
        assert!("sepia".parse::<ColorMode>().is_err());
    }

    #[test_case(false, false, ColorMode::Off)]
    #[test_case(false, true, ColorMode::Off)]
    #[test_case(true, true, ColorMode::Ansi16)]
    #[test_case(true, false, ColorMode::Truecolor)]
    fn from_flag(enabled: bool, legacy_terminal: bool, expected: ColorMode) {
        assert_eq!(ColorMode::from_flag(enabled, legacy_terminal), expected);
    }

    #[test]
    fn round_trip_through_i8() {
        for mode in [
            ColorMode::Off,
            ColorMode::Ansi16,
            ColorMode::Ansi256,
            ColorMode::Truecolor,
        ] {
            assert_eq!(ColorMode::try_from(i8::from(mode)), Ok(mode));
        }
        assert_eq!(ColorMode::try_from(-1_i8), Err(()));
    }
}
