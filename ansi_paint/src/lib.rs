// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_ansi_paint
//!
//! Paint terminal text with ANSI escape sequences. Colors can be given as base terminal
//! color names, RGB triples, hex strings or human color names, and are rendered for
//! the color depth of the terminal: off, 16 colors, 256 colors or 24 bit true color.
//!
//! ```rust
//! use r3bl_ansi_paint::{ColorMode, Painter, color_specs};
//!
//! let painter = Painter::new(ColorMode::Ansi256);
//! assert_eq!(
//!     painter.paint("Ruby", &color_specs!["red", "bright"]).unwrap(),
//!     "\x1b[31;1mRuby\x1b[0m"
//! );
//! assert_eq!(
//!     painter.paint("Ruby", &color_specs![None::<&str>, (42, 142, 242)]).unwrap(),
//!     "\x1b[48;5;39mRuby\x1b[0m"
//! );
//! ```
//!
//! ## Arguments
//!
//! Each argument is a [`ColorSpec`]. The first color fills the foreground, the second
//! fills the background, and effects (eg: `"bright"`, `"underline"`) or raw SGR
//! integers can be mixed in anywhere. Use [`color_specs!`] to build the list from
//! anything that converts into a [`ColorSpec`].
//!
//! ## Color mode
//!
//! A [`Painter`] renders for one fixed [`ColorMode`]. The free functions [`paint()`],
//! [`paint_template()`] and [`color_sequence()`] use [`global_color_mode::detect()`],
//! which honors an override set with [`global_color_mode::set_override()`] and
//! otherwise looks at `NO_COLOR`, `COLORTERM` and `TERM`.
//!
//! ## Templates
//!
//! `%{key}` placeholders are replaced from [`Substitutions`]. A value can be plain
//! text, or text with its own colors and its own placeholders; the colors around it
//! are restored when it ends. See [`expand_template()`].
//!
//! ## Shortcuts
//!
//! Reusable named argument lists are kept in a [`ShortcutRegistry`].

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
mod color;
mod color_mode;
mod color_spec;
mod common;
mod paint;
mod sgr;
mod shortcuts;
mod template;

// Re-export.
pub use color::*;
pub use color_mode::*;
pub use color_spec::*;
pub use common::*;
pub use paint::*;
pub use sgr::*;
pub use shortcuts::*;
pub use template::*;
