// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod assemble;
mod painter;

// Re-export.
pub use assemble::*;
pub use painter::*;
