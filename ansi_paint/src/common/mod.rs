// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod paint_error;

// Re-export.
pub use paint_error::*;
