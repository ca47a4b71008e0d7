// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Expand `%{key}` placeholders, where a substitution can carry its own colors and its
//! own nested placeholders.
//!
//! Each colored level opens its sequence and pushes it as a frame on a stack. When a
//! nested colored level closes, the terminal state is reset and every enclosing frame
//! is re-opened, outermost first. So for a yellow template with a red value inside:
//!
//! ```text
//! ESC[33m Yellow ESC[31m red ESC[0m ESC[33m yellow again ESC[0m
//! ```
//!
//! A level whose sequence is empty (no args, or [`ColorMode::Off`]) opens nothing and
//! closes nothing, its text simply inherits the colors around it.

use std::fmt::Write as _;

use smallstr::SmallString;
use smallvec::SmallVec;

use super::{Substitution, Substitutions, TemplateSegment, parse_template};
use crate::{ColorMode, ColorSpec, PaintError, PaintResult, RESET, assemble_sgr_sequence};

mod sizing {
    use super::{SmallString, SmallVec};

    pub const DEFAULT_SGR_STRING_SIZE: usize = 32;
    pub type InlineSgrString = SmallString<[u8; DEFAULT_SGR_STRING_SIZE]>;

    pub const DEFAULT_TEMPLATE_DEPTH: usize = 4;
    pub type InlineVecFrames = SmallVec<[InlineSgrString; DEFAULT_TEMPLATE_DEPTH]>;
}
use sizing::{InlineSgrString, InlineVecFrames};

/// The opening sequences of every level that is currently open, outermost first.
#[derive(Debug, Default)]
struct TemplateStack {
    frames: InlineVecFrames,
}

impl TemplateStack {
    fn push(&mut self, frame: InlineSgrString) { self.frames.push(frame); }

    fn pop(&mut self) -> Option<InlineSgrString> { self.frames.pop() }

    fn is_empty(&self) -> bool { self.frames.is_empty() }

    /// Reset the terminal, then re-open every frame still on the stack.
    fn write_restoration(&self, acc: &mut String) {
        acc.push_str(RESET);
        for frame in &self.frames {
            acc.push_str(frame);
        }
    }
}

/// Expand `template` colored with `args`, resolving placeholders against
/// `substitutions`.
///
/// # Errors
///
/// - [`PaintError::UnresolvedPlaceholder`] when a placeholder has no substitution at
///   its level.
/// - Any resolution error from the args of the template or of a styled substitution.
pub fn expand_template(
    template: &str,
    args: &[ColorSpec],
    substitutions: &Substitutions,
    mode: ColorMode,
) -> PaintResult<String> {
    let mut acc = String::with_capacity(template.len());
    let mut stack = TemplateStack::default();
    expand_level(&mut acc, &mut stack, template, args, substitutions, mode)?;
    debug_assert!(stack.is_empty());
    Ok(acc)
}

fn expand_level(
    acc: &mut String,
    stack: &mut TemplateStack,
    text: &str,
    args: &[ColorSpec],
    substitutions: &Substitutions,
    mode: ColorMode,
) -> PaintResult<()> {
    let sequence = assemble_sgr_sequence(args, mode)?;
    let mut frame = InlineSgrString::new();
    // Writing to a string can't fail.
    _ = write!(frame, "{sequence}");
    acc.push_str(&frame);
    stack.push(frame);

    for segment in parse_template(text) {
        match segment {
            TemplateSegment::Literal(literal) => acc.push_str(literal),
            TemplateSegment::Placeholder(key) => {
                let value = substitutions.get(key).ok_or_else(|| {
                    PaintError::UnresolvedPlaceholder {
                        key: key.to_string(),
                    }
                })?;
                tracing::trace!(
                    message = "Substituting placeholder",
                    key = key,
                    depth = stack.frames.len(),
                    styled = matches!(value, Substitution::Styled(_)),
                );
                match value {
                    Substitution::Plain(plain) => acc.push_str(plain),
                    Substitution::Styled(styled) => expand_level(
                        acc,
                        stack,
                        &styled.text,
                        &styled.args,
                        &styled.substitutions,
                        mode,
                    )?,
                }
            }
        }
    }

    if let Some(frame) = stack.pop()
        && !frame.is_empty()
    {
        stack.write_restoration(acc);
    }

    Ok(())
}
