// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorMode, ColorSpec, PaintResult, Substitutions, assemble_sgr_sequence,
            expand_template, global_color_mode, render};

/// Renders text for one fixed [`ColorMode`]. The mode is picked when the painter is
/// made and never changes afterwards, so every escape sequence of one call is built
/// for the same mode even if [`global_color_mode`] is changed concurrently.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_paint::{ColorMode, Painter, Substitutions, color_specs};
///
/// let painter = Painter::new(ColorMode::Ansi256);
///
/// let it = painter.paint("Ruby", &color_specs!["red", "bright"]).unwrap();
/// assert_eq!(it, "\x1b[31;1mRuby\x1b[0m");
///
/// let it = painter.paint("Ruby", &color_specs![(255, 200, 0)]).unwrap();
/// assert_eq!(it, "\x1b[38;5;220mRuby\x1b[0m");
///
/// let subs = Substitutions::default().plain("eye", "-").plain("nose", "_");
/// let it = painter
///     .paint_template("J%{eye}%{nose}%{eye}L", &color_specs!["yellow"], &subs)
///     .unwrap();
/// assert_eq!(it, "\x1b[33mJ-_-L\x1b[0m");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Painter {
    pub mode: ColorMode,
}

impl Painter {
    #[must_use]
    pub const fn new(mode: ColorMode) -> Self { Self { mode } }

    /// Read the process wide mode once, see [`global_color_mode::detect()`].
    #[must_use]
    pub fn from_global() -> Self { Self::new(global_color_mode::detect()) }

    #[must_use]
    pub const fn mode(&self) -> ColorMode { self.mode }

    /// Only the opening escape sequence for `args`, or an empty string when there is
    /// nothing to emit.
    ///
    /// # Errors
    ///
    /// Any resolution error from `args`.
    pub fn color_sequence(&self, args: &[ColorSpec]) -> PaintResult<String> {
        Ok(assemble_sgr_sequence(args, self.mode)?.to_string())
    }

    /// `text` wrapped in the sequence for `args` and a reset. Comes back unchanged
    /// when there is nothing to emit.
    ///
    /// # Errors
    ///
    /// Any resolution error from `args`.
    pub fn paint(&self, text: &str, args: &[ColorSpec]) -> PaintResult<String> {
        render(text, args, self.mode)
    }

    /// Like [`Painter::paint`], with `%{key}` placeholders in `template` replaced from
    /// `substitutions`.
    ///
    /// # Errors
    ///
    /// - [`crate::PaintError::UnresolvedPlaceholder`] for a key with no value.
    /// - Any resolution error from `args` or from a styled substitution.
    pub fn paint_template(
        &self,
        template: &str,
        args: &[ColorSpec],
        substitutions: &Substitutions,
    ) -> PaintResult<String> {
        expand_template(template, args, substitutions, self.mode)
    }
}

/// [`Painter::paint`] with the process wide mode.
///
/// # Errors
///
/// Any resolution error from `args`.
pub fn paint(text: &str, args: &[ColorSpec]) -> PaintResult<String> {
    Painter::from_global().paint(text, args)
}

/// [`Painter::paint_template`] with the process wide mode.
///
/// # Errors
///
/// See [`Painter::paint_template`].
pub fn paint_template(
    template: &str,
    args: &[ColorSpec],
    substitutions: &Substitutions,
) -> PaintResult<String> {
    Painter::from_global().paint_template(template, args, substitutions)
}

/// [`Painter::color_sequence`] with the process wide mode.
///
/// # Errors
///
/// Any resolution error from `args`.
pub fn color_sequence(args: &[ColorSpec]) -> PaintResult<String> {
    Painter::from_global().color_sequence(args)
}

/// A paint argument for a base color that is drawn afresh on every render, `30..=37`,
/// or `40..=47` for the background. It does not take a color slot, and
/// [`ColorMode::Off`] drops it like any other color.
#[must_use]
pub fn random(background: bool) -> ColorSpec { ColorSpec::Random { background } }

/// Remove every ANSI escape sequence from `text`.
#[must_use]
pub fn unpaint(text: &str) -> String { strip_ansi_escapes::strip_str(text) }

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use test_case::test_case;

    use super::*;
    use crate::color_specs;

    #[test_case(ColorMode::Off, "x")]
    #[test_case(ColorMode::Ansi16, "\x1b[93mx\x1b[0m")]
    #[test_case(ColorMode::Ansi256, "\x1b[38;5;220mx\x1b[0m")]
    #[test_case(ColorMode::Truecolor, "\x1b[38;2;255;200;0mx\x1b[0m")]
    fn rgb_per_mode(mode: ColorMode, expected: &str) {
        let painter = Painter::new(mode);
        assert_eq!(painter.paint("x", &color_specs![(255, 200, 0)]), Ok(expected.into()));
    }

    #[test]
    fn color_sequence_only_opens() {
        let painter = Painter::new(ColorMode::Ansi256);
        assert_eq!(
            painter.color_sequence(&color_specs!["yellow", "underline"]),
            Ok("\x1b[33;4m".into())
        );
        assert_eq!(painter.color_sequence(&[]), Ok(String::new()));
    }

    #[test]
    #[serial]
    fn free_functions_use_global_mode() {
        global_color_mode::set_override(ColorMode::Truecolor);
        assert_eq!(Painter::from_global().mode(), ColorMode::Truecolor);
        assert_eq!(
            paint("x", &color_specs![(255, 200, 0)]),
            Ok("\x1b[38;2;255;200;0mx\x1b[0m".into())
        );
        assert_eq!(
            color_sequence(&color_specs!["#fff"]),
            Ok("\x1b[38;2;255;255;255m".into())
        );

        global_color_mode::set_override(ColorMode::Off);
        assert_eq!(paint("x", &color_specs!["yellow"]), Ok("x".into()));
        assert_eq!(
            paint_template(
                "%{a}",
                &color_specs!["yellow"],
                &Substitutions::default().plain("a", "b")
            ),
            Ok("b".into())
        );

        global_color_mode::clear_override();
    }

    #[test_case(false, 30..=37)]
    #[test_case(true, 40..=47)]
    fn random_draws_base_colors(background: bool, range: std::ops::RangeInclusive<u16>) {
        let painter = Painter::new(ColorMode::Ansi256);
        let drawn: HashSet<String> = (0..100)
            .map(|_| painter.color_sequence(&[random(background)]).unwrap())
            .collect();
        assert!(drawn.len() > 1);
        for it in drawn {
            let code: u16 = it
                .strip_prefix("\x1b[")
                .and_then(|it| it.strip_suffix('m'))
                .and_then(|it| it.parse().ok())
                .unwrap();
            assert!(range.contains(&code), "{it:?}");
        }
    }

    #[test]
    fn off_mode_drops_random_colors() {
        let painter = Painter::new(ColorMode::Off);
        assert_eq!(painter.paint("x", &[random(false)]), Ok("x".into()));
        assert_eq!(painter.paint("x", &[random(true)]), Ok("x".into()));
    }

    #[test]
    fn unpaint_strips_escapes() {
        let painter = Painter::new(ColorMode::Truecolor);
        let painted = painter
            .paint("J-_-L", &color_specs!["yellow", (1, 2, 3), "bright"])
            .unwrap();
        assert_eq!(unpaint(&painted), "J-_-L");
        assert_eq!(unpaint("plain"), "plain");
    }
}
