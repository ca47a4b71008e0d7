// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_ansi_paint::{ColorMode, Painter, ShortcutRegistry, Substitutions, color_specs,
                      global_color_mode, paint, random, unpaint};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    // Base colors, effects and raw codes.
    {
        let painter = Painter::new(ColorMode::Ansi256);
        println!("{}", painter.paint("Yellow on red, bright", &color_specs!["yellow", "red", "bright"])?);
        println!("{}", painter.paint("Raw codes 31;1;42", &color_specs![31_u16, 1_u16, 42_u16])?);
        println!("{}", painter.paint("Background only", &color_specs![None::<&str>, (42, 142, 242)])?);
    }

    // The same RGB color in every mode.
    for mode in [
        ColorMode::Off,
        ColorMode::Ansi16,
        ColorMode::Ansi256,
        ColorMode::Truecolor,
    ] {
        let painter = Painter::new(mode);
        let msg = format!("> medium purple, underlined, in mode {mode}");
        let painted = painter.paint(&msg, &color_specs!["medium purple", "underline"])?;
        println!("{painted} {:?}", painted.replace('\x1b', "ESC"));
    }

    // Nested templates restore the enclosing colors.
    {
        let painter = Painter::new(ColorMode::Truecolor);
        let third = Substitutions::default().styled(
            "third_level",
            "third level",
            color_specs!["#4183C4"],
        );
        let second = Substitutions::default().nested(
            "second_level",
            "second level - %{third_level} - second level",
            color_specs!["red"],
            third,
        );
        let painted = painter.paint_template(
            "first level - %{second_level} - first level",
            &color_specs!["yellow"],
            &second,
        )?;
        println!("{painted}");
        println!("{}", unpaint(&painted));
    }

    // Shortcut palettes.
    {
        let mut registry = ShortcutRegistry::default();
        registry.define("example", "red", color_specs!["red", "bright"])?;
        registry.define("example", "title", color_specs!["underline"])?;
        let example_name = registry.palette_fn("example", Painter::new(ColorMode::Ansi256));
        println!("{}", example_name(&"Shortcut title", "title")?);
        println!("{}", example_name(&123, "red")?);
    }

    // Random colors, and the process wide mode.
    {
        global_color_mode::set_override(ColorMode::Ansi16);
        println!("{}", paint("Random on random", &[random(false), random(true)])?);
        global_color_mode::clear_override();
        let msg = format!("> Runtime detection of color mode ({})", global_color_mode::detect());
        println!("{}", paint(&msg, &color_specs!["random", "bright"])?);
    }

    Ok(())
}
