// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The leading `#` is optional and both the long (`#RRGGBB`) and short
//! (`#RGB`) forms are accepted. In the short form each digit is doubled, so `#fa0` is
//! the same as `#ffaa00`. The whole input must be consumed.

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map, map_res, opt}};

use super::RgbValue;

/// Parse function that generates an [`RgbValue`] struct from a valid hex color string.
///
/// # Errors
///
/// Returns a nom error if the input is not exactly 3 or 6 hex digits, optionally
/// prefixed with `#`.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let (input, _) = opt(tag("#")).parse(input)?;
    all_consuming(alt((parse_long_form, parse_short_form))).parse(input)
}

fn parse_long_form(input: &str) -> IResult<&str, RgbValue> {
    map(
        (helper_fns::parse_hex_seg, helper_fns::parse_hex_seg, helper_fns::parse_hex_seg),
        |(red, green, blue)| RgbValue { red, green, blue },
    )
    .parse(input)
}

fn parse_short_form(input: &str) -> IResult<&str, RgbValue> {
    map(
        (
            helper_fns::parse_hex_nibble,
            helper_fns::parse_hex_nibble,
            helper_fns::parse_hex_nibble,
        ),
        |(red, green, blue)| RgbValue {
            red: red * 0x11,
            green: green * 0x11,
            blue: blue * 0x11,
        },
    )
    .parse(input)
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// This function is used by [`map_res`] and it returns a [`Result`], not
    /// [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns `true`
    /// items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), parse_str_to_hex_num)
            .parse(input)
    }

    pub fn parse_hex_nibble(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(1, 1, match_is_hex_digit), parse_str_to_hex_num)
            .parse(input)
    }
}
