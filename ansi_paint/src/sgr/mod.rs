// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR escape sequence building blocks, and the quantizer that turns a resolved color
//! into a param for a given [`crate::ColorMode`].

// Attach.
mod quantize;
mod sgr_code;

// Re-export.
pub use quantize::*;
pub use sgr_code::*;
