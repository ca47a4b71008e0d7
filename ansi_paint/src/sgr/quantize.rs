// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Ground, SgrParam};
use crate::{AnsiColor, ColorMode, ResolvedColor, RgbValue, TransformColor};

/// Render one resolved color into its SGR param for the given slot and mode. Returns
/// `None` in [`ColorMode::Off`].
///
/// | Mode        | [`ResolvedColor::Ansi`] | [`ResolvedColor::Rgb`]               |
/// | :---------- | :---------------------- | :----------------------------------- |
/// | `Off`       | nothing                 | nothing                              |
/// | `Ansi16`    | `3x`/`9x`, `4x`/`10x`   | nearest system color, `3x`/`9x` ...  |
/// | `Ansi256`   | `3x`/`9x`, `4x`/`10x`   | `38;5;<index>` / `48;5;<index>`      |
/// | `Truecolor` | `3x`/`9x`, `4x`/`10x`   | `38;2;<r>;<g>;<b>` / `48;2;...`      |
#[must_use]
pub fn quantize(color: ResolvedColor, ground: Ground, mode: ColorMode) -> Option<SgrParam> {
    match (mode, color) {
        (ColorMode::Off, _) => None,
        (_, ResolvedColor::Ansi(ansi_color)) => Some(ansi_color_param(ansi_color, ground)),
        (ColorMode::Ansi16, ResolvedColor::Rgb(rgb)) => Some(ansi16_param(rgb, ground)),
        (ColorMode::Ansi256, ResolvedColor::Rgb(rgb)) => Some(SgrParam::Ansi256 {
            ground,
            index: rgb.as_ansi().index,
        }),
        (ColorMode::Truecolor, ResolvedColor::Rgb(RgbValue { red, green, blue })) => {
            Some(SgrParam::Rgb {
                ground,
                red,
                green,
                blue,
            })
        }
    }
}

fn ansi_color_param(color: AnsiColor, ground: Ground) -> SgrParam {
    SgrParam::Code(match ground {
        Ground::Foreground => color.foreground_code(),
        Ground::Background => color.background_code(),
    })
}

/// System colors `0..=7` are `30 + n`, the bright ones `8..=15` are `90 + (n - 8)`.
fn ansi16_param(rgb: RgbValue, ground: Ground) -> SgrParam {
    let ansi = rgb.as_ansi16();
    let base = match (ansi.is_bright(), ground) {
        (false, Ground::Foreground) => 30,
        (false, Ground::Background) => 40,
        (true, Ground::Foreground) => 90 - 8,
        (true, Ground::Background) => 100 - 8,
    };
    SgrParam::Code(base + u16::from(ansi.index))
}
