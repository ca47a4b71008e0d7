// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use smallstr::SmallString;

use super::{AnsiColor, Effect};
use crate::RgbValue;

/// One caller supplied color argument. A render call takes an ordered list of these,
/// freely mixing the variants.
///
/// Text converts with [`From<&str>`], trying in order: a base color name
/// ([`AnsiColor`]), an effect name ([`Effect`]), `"random"`, a hex string (leading `#`
/// or only hex digits), and finally a human color name (eg: `"medium purple"`). Base
/// color and effect names may use spaces or hyphens in place of `_`, so `"bright red"`
/// and `"Bright-Red"` are both [`AnsiColor::BrightRed`].
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_paint::{AnsiColor, ColorSpec, Effect};
///
/// assert_eq!(ColorSpec::from("yellow"), ColorSpec::Ansi(AnsiColor::Yellow));
/// assert_eq!(ColorSpec::from("bright"), ColorSpec::Effect(Effect::Bright));
/// assert_eq!(ColorSpec::from("#fff"), ColorSpec::Hex("#fff".into()));
/// assert_eq!(ColorSpec::from((255, 200, 0)), ColorSpec::Rgb(255, 200, 0));
/// assert_eq!(ColorSpec::from(42_u16), ColorSpec::Raw(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    /// A base terminal color.
    Ansi(AnsiColor),
    /// A text effect, does not take a color slot.
    Effect(Effect),
    /// An RGB triple. Components outside `0..=255` fail to resolve.
    Rgb(i64, i64, i64),
    /// `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`.
    Hex(String),
    /// A human color name from the color name table.
    Name(String),
    /// A base color drawn afresh every time it is resolved. Like a raw code it is
    /// pinned to one ground and does not take a color slot, but Off mode drops it.
    Random { background: bool },
    /// An SGR code passed through verbatim, does not take a color slot.
    Raw(u16),
    /// Takes a color slot but emits nothing, eg: `[Nil, Rgb(..)]` only sets the
    /// background.
    Nil,
}

/// The token text that becomes [`ColorSpec::Random`].
pub const RANDOM_TOKEN: &str = "random";

impl ColorSpec {
    /// `true` for the variants that take the foreground or background slot.
    #[must_use]
    pub const fn takes_color_slot(&self) -> bool {
        !matches!(
            self,
            ColorSpec::Effect(_) | ColorSpec::Raw(_) | ColorSpec::Random { .. }
        )
    }
}

impl From<&str> for ColorSpec {
    fn from(token: &str) -> Self {
        let snake_case = to_snake_case(token);
        if let Ok(color) = AnsiColor::from_str(&snake_case) {
            return ColorSpec::Ansi(color);
        }
        if let Ok(effect) = Effect::from_str(&snake_case) {
            return ColorSpec::Effect(effect);
        }
        if token.eq_ignore_ascii_case(RANDOM_TOKEN) {
            return ColorSpec::Random { background: false };
        }
        if looks_like_hex(token) {
            return ColorSpec::Hex(token.to_string());
        }
        ColorSpec::Name(token.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(token: String) -> Self { ColorSpec::from(token.as_str()) }
}

impl From<&String> for ColorSpec {
    fn from(token: &String) -> Self { ColorSpec::from(token.as_str()) }
}

impl From<AnsiColor> for ColorSpec {
    fn from(color: AnsiColor) -> Self { ColorSpec::Ansi(color) }
}

impl From<Effect> for ColorSpec {
    fn from(effect: Effect) -> Self { ColorSpec::Effect(effect) }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        ColorSpec::Rgb(i64::from(red), i64::from(green), i64::from(blue))
    }
}

impl From<[u8; 3]> for ColorSpec {
    fn from([red, green, blue]: [u8; 3]) -> Self { ColorSpec::from((red, green, blue)) }
}

impl From<RgbValue> for ColorSpec {
    fn from(rgb: RgbValue) -> Self { ColorSpec::from((rgb.red, rgb.green, rgb.blue)) }
}

impl From<u16> for ColorSpec {
    fn from(code: u16) -> Self { ColorSpec::Raw(code) }
}

impl<T: Into<ColorSpec>> From<Option<T>> for ColorSpec {
    fn from(value: Option<T>) -> Self { value.map_or(ColorSpec::Nil, Into::into) }
}

/// Names in the enums are `snake_case`, eg: `crossed_out`.
fn to_snake_case(token: &str) -> SmallString<[u8; 32]> {
    token
        .trim()
        .chars()
        .map(|it| if matches!(it, ' ' | '-') { '_' } else { it })
        .collect()
}

fn looks_like_hex(token: &str) -> bool {
    token.starts_with('#')
        || (!token.is_empty() && token.chars().all(|it| it.is_ascii_hexdigit()))
}

/// Build a `Vec<ColorSpec>` from a list of anything that converts into a
/// [`ColorSpec`].
///
/// ```rust
/// use r3bl_ansi_paint::{ColorSpec, color_specs};
///
/// let args = color_specs!["yellow", (42, 142, 242), "underline", 42_u16];
/// assert_eq!(args.len(), 4);
/// assert_eq!(args[3], ColorSpec::Raw(42));
/// ```
#[macro_export]
macro_rules! color_specs {
    () => {
        ::std::vec::Vec::<$crate::ColorSpec>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::ColorSpec::from($arg)),+]
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("red", ColorSpec::Ansi(AnsiColor::Red))]
    #[test_case("gray", ColorSpec::Ansi(AnsiColor::Gray))]
    #[test_case("underline", ColorSpec::Effect(Effect::Underline))]
    #[test_case("random", ColorSpec::Random { background: false })]
    #[test_case("bright red", ColorSpec::Ansi(AnsiColor::BrightRed))]
    #[test_case("Bright-Red", ColorSpec::Ansi(AnsiColor::BrightRed))]
    #[test_case("crossed out", ColorSpec::Effect(Effect::CrossedOut))]
    #[test_case("#123456", ColorSpec::Hex("#123456".into()))]
    #[test_case("123456", ColorSpec::Hex("123456".into()))]
    #[test_case("fff", ColorSpec::Hex("fff".into()))]
    #[test_case("#zz", ColorSpec::Hex("#zz".into()))]
    #[test_case("medium purple", ColorSpec::Name("medium purple".into()))]
    fn classify_text_token(token: &str, expected: ColorSpec) {
        assert_eq!(ColorSpec::from(token), expected);
    }

    #[test]
    fn from_option() {
        assert_eq!(ColorSpec::from(None::<&str>), ColorSpec::Nil);
        assert_eq!(ColorSpec::from(Some("red")), ColorSpec::Ansi(AnsiColor::Red));
    }

    #[test]
    fn from_numbers() {
        assert_eq!(ColorSpec::from([1, 2, 3]), ColorSpec::Rgb(1, 2, 3));
        assert_eq!(ColorSpec::from(31_u16), ColorSpec::Raw(31));
    }

    #[test]
    fn takes_color_slot() {
        assert!(ColorSpec::Nil.takes_color_slot());
        assert!(!ColorSpec::Random { background: true }.takes_color_slot());
        assert!(!ColorSpec::Raw(1).takes_color_slot());
        assert!(!ColorSpec::Effect(Effect::Bright).takes_color_slot());
    }

    #[test]
    fn color_specs_macro() {
        let args = color_specs![AnsiColor::Yellow, None::<&str>, "bright", 42_u16];
        assert_eq!(
            args,
            vec![
                ColorSpec::Ansi(AnsiColor::Yellow),
                ColorSpec::Nil,
                ColorSpec::Effect(Effect::Bright),
                ColorSpec::Raw(42),
            ]
        );
        assert!(color_specs![].is_empty());
    }
}
