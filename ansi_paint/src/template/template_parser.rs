// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Split a template into literal runs and `%{key}` placeholders. A key is one or more
//! ASCII alphanumerics or `_`. Anything that looks like a placeholder but isn't one
//! (eg: `%{}` or `%{a b}`) is kept as literal text.

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, take_until, take_while1},
          character::complete::anychar,
          combinator::{map, recognize, rest},
          multi::many0,
          sequence::{delimited, pair}};

pub const PLACEHOLDER_OPEN: &str = "%{";
pub const PLACEHOLDER_CLOSE: &str = "}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSegment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Parse the whole template. This never fails, input that has no placeholders comes
/// back as a single [`TemplateSegment::Literal`].
#[must_use]
pub fn parse_template(input: &str) -> Vec<TemplateSegment<'_>> {
    match many0(alt((parse_placeholder, parse_literal))).parse(input) {
        Ok(("", segments)) => segments,
        // Unreachable in practice, a literal accepts any char.
        Ok(_) | Err(_) => vec![TemplateSegment::Literal(input)],
    }
}

fn parse_placeholder(input: &str) -> IResult<&str, TemplateSegment<'_>> {
    map(
        delimited(
            tag(PLACEHOLDER_OPEN),
            take_while1(is_key_char),
            tag(PLACEHOLDER_CLOSE),
        ),
        TemplateSegment::Placeholder,
    )
    .parse(input)
}

/// At least one char, then everything up to the next `%{` (or the end).
fn parse_literal(input: &str) -> IResult<&str, TemplateSegment<'_>> {
    map(
        recognize(pair(anychar, alt((take_until(PLACEHOLDER_OPEN), rest)))),
        TemplateSegment::Literal,
    )
    .parse(input)
}

fn is_key_char(c: char) -> bool { c.is_ascii_alphanumeric() || c == '_' }
