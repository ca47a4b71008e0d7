// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors for every fallible operation in this crate. They are plain values (no
//! boxed sources) so tests can compare them with `assert_eq!`, and they implement
//! [`miette::Diagnostic`] so callers can bubble them up into a [`miette::Report`] with
//! `?` and get a code and some help text.
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias used by all fallible operations in this crate.
pub type PaintResult<T> = Result<T, PaintError>;

/// A failure in a single render call. None of these leave the process wide color
/// mode in a different state than before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum PaintError {
    /// Wrong length or non hex digits in a hex color string.
    #[error("Invalid hex color: '{input}'")]
    #[diagnostic(
        code(r3bl_ansi_paint::invalid_hex_color),
        help("Use #RRGGBB, RRGGBB, #RGB or RGB, eg: \"#4183C4\" or \"fff\"")
    )]
    InvalidHexColor { input: String },

    /// An RGB triple with a component outside `0..=255`.
    #[error("RGB color ({red}, {green}, {blue}) is out of range")]
    #[diagnostic(
        code(r3bl_ansi_paint::rgb_out_of_range),
        help("Each component must be in the range 0..=255")
    )]
    RgbOutOfRange { red: i64, green: i64, blue: i64 },

    /// A name that is not a base color, an effect, `random`, or in the color name
    /// table.
    #[error("Unknown color or effect: '{name}'")]
    #[diagnostic(
        code(r3bl_ansi_paint::unknown_color_name),
        help("Use a base color (eg: yellow), an effect (eg: underline), or a color name (eg: medium purple)")
    )]
    UnknownColorName { name: String },

    /// A `%{key}` in a template with no matching substitution.
    #[error("No substitution for placeholder '%{{{key}}}'")]
    #[diagnostic(
        code(r3bl_ansi_paint::unresolved_placeholder),
        help("Add a value for '{key}' to the substitutions")
    )]
    UnresolvedPlaceholder { key: String },

    /// A color mode setting that is not one of the supported values.
    #[error("Invalid color mode: '{input}'")]
    #[diagnostic(
        code(r3bl_ansi_paint::invalid_color_mode),
        help("Use one of: 0 (off), 16, 256, 0xFFFFFF or \"true color\"")
    )]
    InvalidColorMode { input: String },

    /// No shortcut with this key in this palette.
    #[error("Unknown shortcut '{key}' in palette '{palette}'")]
    #[diagnostic(
        code(r3bl_ansi_paint::unknown_shortcut),
        help("Define it first with ShortcutRegistry::define()")
    )]
    UnknownShortcut { palette: String, key: String },
}
