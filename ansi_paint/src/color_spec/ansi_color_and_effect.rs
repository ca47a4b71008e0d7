// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The named tokens a caller can pass: base terminal colors and text effects. Both
//! parse from text with [`std::str::FromStr`] (case-insensitive) via `strum`.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use strum_macros::{EnumCount, EnumIter, EnumString, IntoStaticStr};

/// The terminal's own named colors. These are emitted as `30..=37` / `90..=97`
/// (foreground) or `40..=47` / `100..=107` (background) in every color mode except
/// [`ColorMode::Off`], so they always look like the user's terminal theme.
///
/// [`ColorMode::Off`]: crate::ColorMode::Off
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, EnumCount, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Same code as [`AnsiColor::White`].
    #[strum(serialize = "gray", serialize = "grey")]
    Gray,
    /// The terminal's default color.
    Default,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// The eight base colors, in palette order.
pub const BASE_COLORS: [AnsiColor; 8] = [
    AnsiColor::Black,
    AnsiColor::Red,
    AnsiColor::Green,
    AnsiColor::Yellow,
    AnsiColor::Blue,
    AnsiColor::Magenta,
    AnsiColor::Cyan,
    AnsiColor::White,
];

/// Added to a foreground code to get the matching background code.
pub const BACKGROUND_OFFSET: u16 = 10;

impl AnsiColor {
    /// SGR code for this color used as foreground.
    #[must_use]
    #[rustfmt::skip]
    pub const fn foreground_code(self) -> u16 {
        match self {
            AnsiColor::Black         => 30,
            AnsiColor::Red           => 31,
            AnsiColor::Green         => 32,
            AnsiColor::Yellow        => 33,
            AnsiColor::Blue          => 34,
            AnsiColor::Magenta       => 35,
            AnsiColor::Cyan          => 36,
            AnsiColor::White
            | AnsiColor::Gray        => 37,
            AnsiColor::Default       => 39,
            AnsiColor::BrightBlack   => 90,
            AnsiColor::BrightRed     => 91,
            AnsiColor::BrightGreen   => 92,
            AnsiColor::BrightYellow  => 93,
            AnsiColor::BrightBlue    => 94,
            AnsiColor::BrightMagenta => 95,
            AnsiColor::BrightCyan    => 96,
            AnsiColor::BrightWhite   => 97,
        }
    }

    /// SGR code for this color used as background.
    #[must_use]
    pub const fn background_code(self) -> u16 { self.foreground_code() + BACKGROUND_OFFSET }
}

/// Text effects. Each maps to a single fixed SGR code and is independent of the color
/// mode. Several names are accepted for the common ones, eg: `bright` and `bold`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, EnumCount, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Effect {
    #[strum(serialize = "reset", serialize = "nothing")]
    Reset,
    #[strum(serialize = "bright", serialize = "bold")]
    Bright,
    #[strum(serialize = "faint", serialize = "dim")]
    Faint,
    Italic,
    Underline,
    #[strum(serialize = "blink", serialize = "slow_blink")]
    Blink,
    RapidBlink,
    #[strum(serialize = "inverse", serialize = "swap", serialize = "invert")]
    Inverse,
    #[strum(serialize = "conceal", serialize = "hide")]
    Conceal,
    #[strum(serialize = "crossed_out", serialize = "strikethrough")]
    CrossedOut,
    Fraktur,
    DoubleUnderline,
    #[strum(serialize = "normal_intensity", serialize = "bright_off")]
    NormalIntensity,
    ItalicOff,
    UnderlineOff,
    BlinkOff,
    InverseOff,
    ConcealOff,
    CrossedOutOff,
    Frame,
    Encircle,
    Overline,
    FrameOff,
    OverlineOff,
}

impl Effect {
    #[must_use]
    #[rustfmt::skip]
    pub const fn code(self) -> u16 {
        match self {
            Effect::Reset           => 0,
            Effect::Bright          => 1,
            Effect::Faint           => 2,
            Effect::Italic          => 3,
            Effect::Underline       => 4,
            Effect::Blink           => 5,
            Effect::RapidBlink      => 6,
            Effect::Inverse         => 7,
            Effect::Conceal         => 8,
            Effect::CrossedOut      => 9,
            Effect::Fraktur         => 20,
            Effect::DoubleUnderline => 21,
            Effect::NormalIntensity => 22,
            Effect::ItalicOff       => 23,
            Effect::UnderlineOff    => 24,
            Effect::BlinkOff        => 25,
            Effect::InverseOff      => 27,
            Effect::ConcealOff      => 28,
            Effect::CrossedOutOff   => 29,
            Effect::Frame           => 51,
            Effect::Encircle        => 52,
            Effect::Overline        => 53,
            Effect::FrameOff        => 54,
            Effect::OverlineOff     => 55,
        }
    }
}
