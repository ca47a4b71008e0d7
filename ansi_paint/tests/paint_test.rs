// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use r3bl_ansi_paint::{ColorMode, ColorSpec, PaintError, Painter, Substitutions,
                      color_specs, global_color_mode, paint, random};
use serial_test::serial;
use test_case::test_case;

const TEXT: &str = "J-_-L";

fn paint_256(args: &[ColorSpec]) -> String {
    Painter::new(ColorMode::Ansi256).paint(TEXT, args).unwrap()
}

#[test]
fn no_options_does_not_colorize() {
    assert_eq!(paint_256(&[]), TEXT);
}

#[test_case(color_specs!["yellow"], "\x1b[33mJ-_-L\x1b[0m"; "symbol")]
#[test_case(color_specs![(255, 200, 0)], "\x1b[38;5;220mJ-_-L\x1b[0m"; "rgb array")]
#[test_case(color_specs!["#123456"], "\x1b[38;5;24mJ-_-L\x1b[0m"; "hex with hash")]
#[test_case(color_specs!["123456"], "\x1b[38;5;24mJ-_-L\x1b[0m"; "hex without hash")]
#[test_case(color_specs!["#fff"], "\x1b[38;5;255mJ-_-L\x1b[0m"; "short hex with hash")]
#[test_case(color_specs!["fff"], "\x1b[38;5;255mJ-_-L\x1b[0m"; "short hex without hash")]
#[test_case(color_specs!["#4183C4"], "\x1b[38;5;74mJ-_-L\x1b[0m"; "uppercase hex")]
#[test_case(color_specs!["medium purple"], "\x1b[38;5;141mJ-_-L\x1b[0m"; "color name")]
fn one_color(args: Vec<ColorSpec>, expected: &str) {
    assert_eq!(paint_256(&args), expected);
}

#[test]
fn does_not_alter_the_color_string() {
    let source = String::from("#FFFFFF");
    paint_256(&color_specs![&source]);
    assert_eq!(source, "#FFFFFF");
}

#[test]
fn random_foreground() {
    let it = paint_256(&[random(false)]);
    let code = it
        .strip_prefix("\x1b[3")
        .and_then(|it| it.strip_suffix("mJ-_-L\x1b[0m"))
        .unwrap();
    assert!(matches!(code, "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7"), "{it:?}");
}

#[test_case(false; "foreground")]
#[test_case(true; "background")]
fn does_not_cache_randomness(background: bool) {
    let painted: HashSet<String> = (0..100).map(|_| paint_256(&[random(background)])).collect();
    assert!(painted.len() > 1);
}

#[test]
fn random_is_dropped_when_color_is_off() {
    let painter = Painter::new(ColorMode::Off);
    assert_eq!(painter.paint("x", &[random(false)]), Ok("x".into()));
    assert_eq!(painter.paint("x", &[random(true), random(false)]), Ok("x".into()));
}

#[test]
fn random_does_not_take_a_color_slot() {
    let it = paint_256(&[random(true), "yellow".into(), "red".into()]);
    assert!(it.starts_with("\x1b[4"), "{it:?}");
    assert!(it.ends_with(";33;41mJ-_-L\x1b[0m"), "{it:?}");
}

#[test]
fn does_not_cache_the_random_marker() {
    let painted: HashSet<String> = (0..100).map(|_| paint_256(&color_specs!["random"])).collect();
    assert!(painted.len() > 1);
}

#[test_case(color_specs!["yellow", "red"], "\x1b[33;41mJ-_-L\x1b[0m"; "symbols")]
#[test_case(color_specs!["#424242", (42, 142, 242)], "\x1b[38;5;238;48;5;39mJ-_-L\x1b[0m"; "rgb")]
#[test_case(color_specs![None::<&str>, (42, 142, 242)], "\x1b[48;5;39mJ-_-L\x1b[0m"; "nil foreground")]
fn two_colors(args: Vec<ColorSpec>, expected: &str) {
    assert_eq!(paint_256(&args), expected);
}

#[test_case(color_specs!["bright"], "\x1b[1mJ-_-L\x1b[0m"; "effect")]
#[test_case(color_specs!["yellow", "bright"], "\x1b[33;1mJ-_-L\x1b[0m"; "mixed")]
#[test_case(color_specs!["bright", "yellow"], "\x1b[1;33mJ-_-L\x1b[0m"; "mixed order kept")]
#[test_case(color_specs!["yellow", "red", "bright", "underline", "inverse"], "\x1b[33;41;1;4;7mJ-_-L\x1b[0m"; "multiple")]
fn effects(args: Vec<ColorSpec>, expected: &str) {
    assert_eq!(paint_256(&args), expected);
}

#[test_case(color_specs![31_u16, 1_u16, 42_u16], "\x1b[31;1;42mJ-_-L\x1b[0m"; "integers")]
#[test_case(color_specs!["red", "bright", 42_u16, "underline"], "\x1b[31;1;42;4mJ-_-L\x1b[0m"; "mixed")]
fn plain_integers(args: Vec<ColorSpec>, expected: &str) {
    assert_eq!(paint_256(&args), expected);
}

#[test]
fn true_color() {
    assert_eq!(
        Painter::new(ColorMode::Truecolor).paint(TEXT, &color_specs![(255, 200, 0)]),
        Ok("\x1b[38;2;255;200;0mJ-_-L\x1b[0m".into())
    );
}

#[test]
fn invalid_arguments_fail() {
    let painter = Painter::new(ColorMode::Ansi256);
    assert_eq!(
        painter.paint(TEXT, &color_specs!["#12345g"]),
        Err(PaintError::InvalidHexColor {
            input: "#12345g".into()
        })
    );
    assert_eq!(
        painter.paint(TEXT, &[ColorSpec::Rgb(-1, 0, 0)]),
        Err(PaintError::RgbOutOfRange {
            red: -1,
            green: 0,
            blue: 0
        })
    );
    assert!(matches!(
        painter.paint(TEXT, &color_specs!["blurple"]),
        Err(PaintError::UnknownColorName { .. })
    ));
}

#[test]
#[serial]
fn process_wide_mode() {
    global_color_mode::set_override(ColorMode::Off);
    assert_eq!(paint(TEXT, &color_specs!["yellow"]), Ok(TEXT.into()));

    global_color_mode::set_override("256".parse().unwrap());
    assert_eq!(paint(TEXT, &color_specs!["yellow"]), Ok("\x1b[33mJ-_-L\x1b[0m".into()));

    global_color_mode::set_override(ColorMode::from_flag(true, false));
    assert_eq!(
        paint(TEXT, &color_specs![(255, 200, 0)]),
        Ok("\x1b[38;2;255;200;0mJ-_-L\x1b[0m".into())
    );

    global_color_mode::clear_override();
}

mod nesting_and_substitution {
    use pretty_assertions::assert_eq;

    use super::*;

    fn paint_template(template: &str, args: &[ColorSpec], subs: &Substitutions) -> String {
        Painter::new(ColorMode::Ansi256)
            .paint_template(template, args, subs)
            .unwrap()
    }

    #[test]
    fn replaces_template_variables() {
        let subs = Substitutions::default().plain("eye", "-").plain("nose", "_");
        assert_eq!(
            paint_template("J%{eye}%{nose}%{eye}L", &color_specs!["yellow"], &subs),
            "\x1b[33mJ-_-L\x1b[0m"
        );
    }

    #[test]
    fn arbitrary_nesting_stacks_escape_sequences() {
        let subs = Substitutions::default().nested(
            "second",
            "second level - %{third} - second level",
            color_specs!["red"],
            Substitutions::default().styled("third", "third level", color_specs!["green"]),
        );
        assert_eq!(
            paint_template(
                "first level - %{second} - first level",
                &color_specs!["yellow"],
                &subs
            ),
            "\x1b[33mfirst level - \x1b[31msecond level - \x1b[32mthird \
             level\x1b[0m\x1b[33m\x1b[31m - second level\x1b[0m\x1b[33m - first \
             level\x1b[0m"
        );
    }

    #[test]
    fn resets_colors_and_effects() {
        let subs = Substitutions::default().styled(
            "blue_text",
            "blue text",
            color_specs!["blue", "underline"],
        );
        assert_eq!(
            paint_template(
                "Yellow string with a %{blue_text} in it",
                &color_specs!["yellow"],
                &subs
            ),
            "\x1b[33mYellow string with a \x1b[34;4mblue text\x1b[0m\x1b[33m in it\x1b[0m"
        );
    }

    #[test]
    fn plain_and_styled_siblings() {
        let subs = Substitutions::default()
            .plain("f", "f")
            .styled("x", "x", color_specs!["gray"]);
        assert_eq!(
            paint_template("%{f}(%{x})", &color_specs!["blue"], &subs),
            "\x1b[34mf(\x1b[37mx\x1b[0m\x1b[34m)\x1b[0m"
        );
    }

    #[test]
    fn unresolved_placeholder_fails() {
        let result = Painter::new(ColorMode::Ansi256).paint_template(
            "J%{eye}L",
            &color_specs!["yellow"],
            &Substitutions::default(),
        );
        assert_eq!(
            result,
            Err(PaintError::UnresolvedPlaceholder { key: "eye".into() })
        );
    }
}
