// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `%{key}` templates with nested colored substitutions.

// Attach.
mod expand;
mod substitution;
mod template_parser;

// Re-export.
pub use expand::*;
pub use substitution::*;
pub use template_parser::*;
