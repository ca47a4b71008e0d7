// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Caller facing color tokens ([`ColorSpec`]) and their normalization into canonical
//! values ([`Resolved`]).

// Attach.
mod ansi_color_and_effect;
mod token;
mod normalize;

// Re-export.
pub use ansi_color_and_effect::*;
pub use token::*;
pub use normalize::*;
