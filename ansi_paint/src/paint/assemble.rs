// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorMode, ColorSpec, Ground, PaintResult, Resolved, SgrParam, SgrSequence,
            normalize, quantize};

/// Build the SGR sequence for an ordered list of color arguments.
///
/// - The first color argument fills the foreground slot, the second fills the
///   background slot. [`ColorSpec::Nil`] takes a slot without emitting anything.
/// - A third or later color argument is ignored (and logged as a warning).
/// - Effects and raw codes don't take a slot. They are emitted in argument order,
///   interleaved with the colors, eg: `[bright, yellow]` is `1;33`.
/// - [`ColorSpec::Random`] is pinned to its own ground and does not take a slot
///   either.
/// - In [`ColorMode::Off`] colors (random ones included) are dropped, effects and raw
///   codes are kept.
///
/// Every argument is resolved, even ignored ones, so a malformed token always fails.
///
/// # Errors
///
/// The first resolution error among `args`, see [`normalize`].
pub fn assemble_sgr_sequence(args: &[ColorSpec], mode: ColorMode) -> PaintResult<SgrSequence> {
    let mut acc = SgrSequence::default();
    let mut slots = [Ground::Foreground, Ground::Background].into_iter();

    for (index, token) in args.iter().enumerate() {
        let resolved = normalize(token).inspect_err(|error| {
            tracing::debug!(
                message = "Failed to resolve color argument",
                index = index,
                token = ?token,
                error = %error,
            );
        })?;

        match resolved {
            Resolved::Effect(effect) => acc.push(SgrParam::Code(effect.code())),
            Resolved::Raw(code) => acc.push(SgrParam::Code(code)),
            Resolved::Grounded { color, ground } => {
                if let Some(param) = quantize(color, ground, mode) {
                    acc.push(param);
                }
            }
            Resolved::Skip | Resolved::Color(_) => {
                let Some(ground) = slots.next() else {
                    tracing::warn!(
                        message = "Ignoring color argument, both color slots are taken",
                        index = index,
                        token = ?token,
                    );
                    continue;
                };
                if let Resolved::Color(color) = resolved
                    && let Some(param) = quantize(color, ground, mode)
                {
                    acc.push(param);
                }
            }
        }
    }

    Ok(acc)
}

/// Wrap `text` in the sequence for `args` and a trailing reset. When no codes are
/// produced the text comes back unchanged, without any escapes.
///
/// # Errors
///
/// See [`assemble_sgr_sequence`].
pub fn render(text: &str, args: &[ColorSpec], mode: ColorMode) -> PaintResult<String> {
    Ok(assemble_sgr_sequence(args, mode)?.wrap(text))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{AnsiColor, Effect, PaintError, color_specs};

    fn sgr(args: &[ColorSpec], mode: ColorMode) -> String {
        assemble_sgr_sequence(args, mode).unwrap().to_string()
    }

    #[test_case(color_specs!["yellow"], "\x1b[33m")]
    #[test_case(color_specs!["yellow", "red"], "\x1b[33;41m")]
    #[test_case(color_specs!["yellow", "bright"], "\x1b[33;1m")]
    #[test_case(color_specs!["bright", "yellow"], "\x1b[1;33m")]
    #[test_case(color_specs!["yellow", "red", "bright", "underline", "inverse"], "\x1b[33;41;1;4;7m")]
    #[test_case(color_specs![31_u16, 1_u16, 42_u16], "\x1b[31;1;42m")]
    #[test_case(color_specs!["red", "bright", 42_u16, "underline"], "\x1b[31;1;42;4m")]
    #[test_case(color_specs![None::<&str>, (42, 142, 242)], "\x1b[48;5;39m")]
    #[test_case(color_specs!["#424242", (42, 142, 242)], "\x1b[38;5;238;48;5;39m")]
    #[test_case(color_specs![(255, 200, 0)], "\x1b[38;5;220m")]
    #[test_case(color_specs!["medium purple"], "\x1b[38;5;141m")]
    #[test_case(color_specs![], "")]
    fn ansi256(args: Vec<ColorSpec>, expected: &str) {
        assert_eq!(sgr(&args, ColorMode::Ansi256), expected);
    }

    #[test]
    fn third_color_is_ignored() {
        let args = color_specs!["yellow", "red", "blue", "underline"];
        assert_eq!(sgr(&args, ColorMode::Ansi256), "\x1b[33;41;4m");
    }

    #[test]
    fn ignored_color_is_still_validated() {
        let args = color_specs!["yellow", "red", "#12"];
        assert_eq!(
            assemble_sgr_sequence(&args, ColorMode::Ansi256),
            Err(PaintError::InvalidHexColor {
                input: "#12".into()
            })
        );
    }

    #[test]
    fn off_mode_keeps_effects_and_raw_codes() {
        let args = color_specs!["yellow", (1, 2, 3), "bright", 42_u16];
        assert_eq!(sgr(&args, ColorMode::Off), "\x1b[1;42m");
        assert_eq!(sgr(&color_specs!["yellow"], ColorMode::Off), "");
    }

    #[test]
    fn random_keeps_its_ground_without_taking_a_slot() {
        let args = [
            ColorSpec::Random { background: true },
            ColorSpec::from("yellow"),
            ColorSpec::from("red"),
        ];
        let it = sgr(&args, ColorMode::Ansi256);
        let background = it
            .strip_prefix("\x1b[4")
            .and_then(|it| it.strip_suffix(";33;41m"))
            .unwrap();
        assert!(matches!(background, "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7"), "{it:?}");
    }

    #[test]
    fn off_mode_drops_random_colors() {
        let args = [
            ColorSpec::Random { background: false },
            ColorSpec::Random { background: true },
            ColorSpec::from("bright"),
        ];
        assert_eq!(sgr(&args, ColorMode::Off), "\x1b[1m");
    }

    #[test]
    fn truecolor() {
        let args = color_specs![(255, 200, 0), "#123456"];
        assert_eq!(
            sgr(&args, ColorMode::Truecolor),
            "\x1b[38;2;255;200;0;48;2;18;52;86m"
        );
    }

    #[test]
    fn ansi16() {
        let args = color_specs![(255, 0, 0), AnsiColor::Blue, Effect::Underline];
        assert_eq!(sgr(&args, ColorMode::Ansi16), "\x1b[91;44;4m");
    }

    #[test]
    fn render_text() {
        assert_eq!(
            render("J-_-L", &color_specs!["yellow"], ColorMode::Ansi256),
            Ok("\x1b[33mJ-_-L\x1b[0m".to_string())
        );
        assert_eq!(
            render("J-_-L", &[], ColorMode::Ansi256),
            Ok("J-_-L".to_string())
        );
        assert_eq!(
            render("J-_-L", &color_specs!["yellow"], ColorMode::Off),
            Ok("J-_-L".to_string())
        );
    }
}
