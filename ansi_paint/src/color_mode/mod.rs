// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod mode;
mod detect_color_mode;

// Re-export.
pub use mode::*;
pub use detect_color_mode::*;
