// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Named palettes of reusable color arguments.
//!
//! A palette is a set of `key -> args` entries registered under a palette id. Look up
//! an entry to get a [`Shortcut`], then render with it. The args are stored, not the
//! rendered sequence, so a shortcut always renders for the mode of the [`Painter`] it
//! is used with. With [`ColorMode::Off`] a shortcut renders plain text, effects and
//! raw codes included.
//!
//! # Example usage:
//!
//! ```rust
//! use r3bl_ansi_paint::{ColorMode, Painter, ShortcutRegistry, color_specs};
//!
//! let mut registry = ShortcutRegistry::default();
//! registry.define("example", "red", color_specs!["red", "bright"]).unwrap();
//! registry.define("example", "title", color_specs!["underline"]).unwrap();
//!
//! let painter = Painter::new(ColorMode::Ansi256);
//! let red = registry.shortcut("example", "red").unwrap();
//! assert_eq!(red.sequence(&painter).unwrap(), "\x1b[31;1m");
//! assert_eq!(red.paint(&painter, "J-_-L").unwrap(), "\x1b[31;1mJ-_-L\x1b[0m");
//! assert_eq!(red.paint(&painter, 123).unwrap(), "\x1b[31;1m123\x1b[0m");
//!
//! let off = Painter::new(ColorMode::Off);
//! assert_eq!(red.paint(&off, "J-_-L").unwrap(), "J-_-L");
//! assert_eq!(red.sequence(&off).unwrap(), "");
//! ```
//!
//! [`ColorMode::Off`]: crate::ColorMode::Off

use std::{collections::HashMap, fmt::Display};

use crate::{ColorSpec, PaintError, PaintResult, Painter, normalize};

pub type Palette = HashMap<String, Vec<ColorSpec>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutRegistry {
    pub palettes: HashMap<String, Palette>,
}

impl ShortcutRegistry {
    /// Register `args` as `key` in `palette`, replacing any previous entry. The args
    /// are resolved once here, so a bad token is reported at definition time.
    ///
    /// # Errors
    ///
    /// Any resolution error from `args`.
    pub fn define(
        &mut self,
        palette: impl Into<String>,
        key: impl Into<String>,
        args: Vec<ColorSpec>,
    ) -> PaintResult<()> {
        for token in &args {
            normalize(token)?;
        }
        let palette = palette.into();
        let key = key.into();
        tracing::debug!(
            message = "Shortcut defined",
            palette = %palette,
            key = %key,
            args = ?args,
        );
        self.palettes.entry(palette).or_default().insert(key, args);
        Ok(())
    }

    /// # Errors
    ///
    /// [`PaintError::UnknownShortcut`] when the palette or the key doesn't exist.
    pub fn shortcut<'a>(&'a self, palette: &str, key: &str) -> PaintResult<Shortcut<'a>> {
        self.palettes
            .get(palette)
            .and_then(|it| it.get(key))
            .map(|args| Shortcut { args })
            .ok_or_else(|| PaintError::UnknownShortcut {
                palette: palette.to_string(),
                key: key.to_string(),
            })
    }

    /// One helper for a whole palette, taking the key at call time, eg:
    /// `example_name("Ruby", "red")`.
    pub fn palette_fn<'a>(
        &'a self,
        palette: &'a str,
        painter: Painter,
    ) -> impl Fn(&dyn Display, &str) -> PaintResult<String> + 'a {
        move |text, key| self.shortcut(palette, key)?.paint(&painter, text)
    }
}

/// One entry of a palette, see [`ShortcutRegistry::shortcut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut<'a> {
    pub args: &'a [ColorSpec],
}

impl<'a> Shortcut<'a> {
    /// Only the opening sequence. Empty when the painter's mode doesn't render colors.
    ///
    /// # Errors
    ///
    /// Any resolution error from the stored args.
    pub fn sequence(&self, painter: &Painter) -> PaintResult<String> {
        let it = painter.color_sequence(self.args)?;
        if painter.mode().renders_colors() {
            Ok(it)
        } else {
            Ok(String::new())
        }
    }

    /// Paint the [`Display`] output of `text`. The text comes back unchanged when the
    /// painter's mode doesn't render colors.
    ///
    /// # Errors
    ///
    /// Any resolution error from the stored args.
    pub fn paint(&self, painter: &Painter, text: impl Display) -> PaintResult<String> {
        let text = text.to_string();
        let it = painter.paint(&text, self.args)?;
        if painter.mode().renders_colors() {
            Ok(it)
        } else {
            Ok(text)
        }
    }

    pub fn into_fn(self, painter: Painter) -> impl Fn(&dyn Display) -> PaintResult<String> + 'a {
        move |text| self.paint(&painter, text)
    }
}
