// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use smallvec::SmallVec;

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";
pub const SGR_SEPARATOR: &str = ";";

/// The bare reset sequence, `ESC[0m`.
pub const RESET: &str = "\x1b[0m";

/// Which of the two color slots a color is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ground {
    Foreground,
    Background,
}

/// One parameter group of a Select Graphic Rendition sequence. A color in 256 or
/// true color mode is a single group with several `;` separated numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SgrParam {
    /// Base colors, effects and raw integers.
    Code(u16),
    Ansi256 { ground: Ground, index: u8 },
    Rgb { ground: Ground, red: u8, green: u8, blue: u8 },
}

impl Display for SgrParam {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            SgrParam::Code(code)                                           => write!(f, "{code}"),
            SgrParam::Ansi256 { ground: Ground::Foreground, index }        => write!(f, "38;5;{index}"),
            SgrParam::Ansi256 { ground: Ground::Background, index }        => write!(f, "48;5;{index}"),
            SgrParam::Rgb { ground: Ground::Foreground, red, green, blue } => write!(f, "38;2;{red};{green};{blue}"),
            SgrParam::Rgb { ground: Ground::Background, red, green, blue } => write!(f, "48;2;{red};{green};{blue}"),
        }
    }
}

pub mod sizing {
    use super::{SgrParam, SmallVec};

    /// Foreground, background and a handful of effects fit without spilling to the
    /// heap.
    pub const MAX_SGR_PARAMS_SIZE: usize = 8;
    pub type InlineVecSgrParams = SmallVec<[SgrParam; MAX_SGR_PARAMS_SIZE]>;
}

/// An ordered list of [`SgrParam`]s destined for one `ESC[ ... m` escape. Insertion
/// order is kept, nothing is sorted or deduplicated.
///
/// [`Display`] renders nothing at all when the list is empty, otherwise `CSI`, the
/// params joined with `;`, then `m`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SgrSequence {
    pub params: sizing::InlineVecSgrParams,
}

impl SgrSequence {
    pub fn push(&mut self, param: SgrParam) { self.params.push(param); }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.params.is_empty() }

    #[must_use]
    pub fn len(&self) -> usize { self.params.len() }

    /// Wrap `text` in this sequence and a trailing [`RESET`]. With no params the text
    /// is returned as is, without any escapes.
    #[must_use]
    pub fn wrap(&self, text: &str) -> String {
        if self.is_empty() {
            text.to_string()
        } else {
            format!("{self}{text}{RESET}")
        }
    }
}

impl FromIterator<SgrParam> for SgrSequence {
    fn from_iter<I: IntoIterator<Item = SgrParam>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

impl Display for SgrSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{CSI}")?;
        for (index, param) in self.params.iter().enumerate() {
            if index > 0 {
                write!(f, "{SGR_SEPARATOR}")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, "{SGR}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reset() {
        let sgr = SgrSequence::from_iter([SgrParam::Code(0)]);
        assert_eq!(sgr.to_string(), RESET);
    }

    #[test]
    fn bold() {
        let sgr = SgrSequence::from_iter([SgrParam::Code(1)]);
        assert_eq!(sgr.to_string(), "\x1b[1m");
    }

    #[test]
    fn fg_color_ansi256() {
        let sgr_code = SgrParam::Ansi256 {
            ground: Ground::Foreground,
            index: 150,
        };
        assert_eq!(sgr_code.to_string(), "38;5;150");
    }

    #[test]
    fn bg_color_ansi256() {
        let sgr_code = SgrParam::Ansi256 {
            ground: Ground::Background,
            index: 150,
        };
        assert_eq!(sgr_code.to_string(), "48;5;150");
    }

    #[test]
    fn fg_color_rgb() {
        let sgr_code = SgrParam::Rgb {
            ground: Ground::Foreground,
            red: 175,
            green: 215,
            blue: 135,
        };
        assert_eq!(sgr_code.to_string(), "38;2;175;215;135");
    }

    #[test]
    fn bg_color_rgb() {
        let sgr_code = SgrParam::Rgb {
            ground: Ground::Background,
            red: 175,
            green: 215,
            blue: 135,
        };
        assert_eq!(sgr_code.to_string(), "48;2;175;215;135");
    }

    #[test]
    fn params_joined_in_insertion_order() {
        let sgr = SgrSequence::from_iter([
            SgrParam::Code(33),
            SgrParam::Ansi256 {
                ground: Ground::Background,
                index: 39,
            },
            SgrParam::Code(1),
        ]);
        assert_eq!(sgr.to_string(), "\x1b[33;48;5;39;1m");
    }

    #[test]
    fn empty_sequence() {
        let sgr = SgrSequence::default();
        assert_eq!(sgr.to_string(), "");
        assert_eq!(sgr.wrap("J-_-L"), "J-_-L");
    }

    #[test]
    fn wrap() {
        let sgr = SgrSequence::from_iter([SgrParam::Code(33)]);
        assert_eq!(sgr.wrap("J-_-L"), "\x1b[33mJ-_-L\x1b[0m");
    }
}
