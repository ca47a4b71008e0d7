// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core color types and conversions.
//!
//! This module provides:
//! - **Primitive types**: [`RgbValue`] (24-bit truecolor) and [`AnsiValue`] (256-color
//!   palette index)
//! - **Abstraction**: [`TransformColor`] trait for color representation conversion
//! - **Conversion logic**: RGB to ANSI 256 and ANSI 16 quantization
//! - **Lookup data**: the palette table and the human color name table
//! - **Parsing**: hex color strings
//!
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

// Attach.
pub mod ansi_constants;
mod ansi_value;
mod color_names;
mod convert;
mod hex_color_parser;
mod rgb_value;
mod transform_color;

// Re-export.
pub use ansi_value::*;
pub use color_names::*;
pub use convert::*;
pub use hex_color_parser::*;
pub use rgb_value::*;
pub use transform_color::*;
