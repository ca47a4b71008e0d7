// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

use super::ColorMode;

/// Process wide color mode setting.
///
/// - An explicit override set with [`set_override()`] always wins.
/// - Otherwise the mode is determined once from the environment with
///   [`examine_env_vars_to_determine_color_mode()`] and cached.
///
/// Rendering code should not call [`detect()`] for every escape sequence. Read it once
/// per top level call, eg: with [`Painter::from_global()`], and keep using that value
/// for the rest of the call. Changing the override while another thread is rendering
/// is a race (the other thread may or may not see the new value); treat mode changes
/// as configuration events and serialize them against rendering.
///
/// [`Painter::from_global()`]: crate::Painter::from_global
pub mod global_color_mode {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// Explicit override, takes precedence over the cached detection.
    static COLOR_MODE_OVERRIDE: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    /// Memoized result of [`examine_env_vars_to_determine_color_mode()`].
    static COLOR_MODE_CACHED: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    const NOT_SET_VALUE: i8 = -1;

    /// Returns the color mode currently in force.
    ///
    /// 1. **Override Check**: If [`set_override`] was called, return that value.
    /// 2. **Cache Check**: If detection was previously run, return cached result.
    /// 3. **Detection**: Examine the environment and cache the result.
    #[must_use]
    pub fn detect() -> ColorMode {
        if let Ok(it) = try_get_override() {
            return it;
        }

        if let Ok(it) = ColorMode::try_from(COLOR_MODE_CACHED.load(Ordering::Acquire)) {
            return it;
        }

        let it = examine_env_vars_to_determine_color_mode();
        COLOR_MODE_CACHED.store(i8::from(it), Ordering::Release);
        it
    }

    /// Override the color mode. Regardless of the value of the environment variables
    /// the value you set here will be used when you call [`detect()`].
    ///
    /// # Testing support
    ///
    /// The [serial_test](https://crates.io/crates/serial_test) crate is used to test
    /// this function. In any test in which this function is called, please use the
    /// `#[serial]` attribute to annotate that test. Otherwise there will be flakiness in
    /// the test results (tests are run in parallel using many threads).
    pub fn set_override(value: ColorMode) {
        tracing::debug!(message = "Color mode override set", mode = %value);
        COLOR_MODE_OVERRIDE.store(i8::from(value), Ordering::Release);
    }

    pub fn clear_override() {
        tracing::debug!(message = "Color mode override cleared");
        COLOR_MODE_OVERRIDE.store(NOT_SET_VALUE, Ordering::Release);
    }

    /// Get the color mode override value.
    /// - If the value has been set using [`set_override`], then that value will be
    ///   returned.
    /// - Otherwise, an error will be returned.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<ColorMode, ()> {
        ColorMode::try_from(COLOR_MODE_OVERRIDE.load(Ordering::Acquire))
    }

    /// Forget the cached detection, so the next [`detect()`] looks at the environment
    /// again.
    pub fn clear_cache() { COLOR_MODE_CACHED.store(NOT_SET_VALUE, Ordering::Release); }
}

/// Snapshot of the environment variables that color mode detection looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvValues<'a> {
    pub no_color: Option<&'a str>,
    pub colorterm: Option<&'a str>,
    pub term: Option<&'a str>,
    pub is_ci: bool,
}

/// Determine the color mode from the process environment. This only looks at
/// environment variables; it never queries the terminal.
#[must_use]
pub fn examine_env_vars_to_determine_color_mode() -> ColorMode {
    let no_color = env::var("NO_COLOR").ok();
    let colorterm = env::var("COLORTERM").ok();
    let term = env::var("TERM").ok();

    let it = determine_color_mode(EnvValues {
        no_color: no_color.as_deref(),
        colorterm: colorterm.as_deref(),
        term: term.as_deref(),
        is_ci: is_ci::cached(),
    });

    tracing::debug!(
        message = "Color mode detected from environment",
        mode = %it,
        term = ?term,
        colorterm = ?colorterm,
    );

    it
}

/// Pure part of [`examine_env_vars_to_determine_color_mode()`].
#[must_use]
pub fn determine_color_mode(env_values: EnvValues<'_>) -> ColorMode {
    if env_values.no_color.is_some_and(|it| !it.is_empty()) {
        return ColorMode::Off;
    }

    if env_values.term == Some("dumb") {
        return ColorMode::Off;
    }

    if env_values
        .colorterm
        .is_some_and(|it| it.contains("truecolor") || it.contains("24bit"))
    {
        return ColorMode::Truecolor;
    }

    match env_values.term {
        Some(term) if check_256_color(term) => ColorMode::Ansi256,
        Some(term) if check_ansi16_color(term) => ColorMode::Ansi16,
        None if env_values.is_ci => ColorMode::Ansi16,
        _ => ColorMode::Ansi256,
    }
}

mod helpers {
    pub fn check_256_color(term: &str) -> bool {
        term.ends_with("256") || term.ends_with("256color")
    }

    pub fn check_ansi16_color(term: &str) -> bool {
        term.ends_with("-color")
            || term.starts_with("rxvt")
            || term.starts_with("linux")
            || term.starts_with("vt")
    }
}
use helpers::{check_256_color, check_ansi16_color};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use test_case::test_case;

    use super::*;

    #[test]
    #[serial]
    fn cycle_1() {
        global_color_mode::set_override(ColorMode::Ansi256);
        assert_eq!(global_color_mode::try_get_override(), Ok(ColorMode::Ansi256));
        assert_eq!(global_color_mode::detect(), ColorMode::Ansi256);
        global_color_mode::clear_override();
    }

    #[test]
    #[serial]
    fn cycle_2() {
        global_color_mode::set_override(ColorMode::Truecolor);
        assert_eq!(
            global_color_mode::try_get_override(),
            Ok(ColorMode::Truecolor)
        );
        global_color_mode::clear_override();
    }

    #[test]
    #[serial]
    fn cycle_3() {
        global_color_mode::set_override(ColorMode::Off);
        assert_eq!(global_color_mode::detect(), ColorMode::Off);
        global_color_mode::clear_override();
    }

    #[test]
    #[serial]
    fn cycle_4() {
        global_color_mode::clear_override();
        assert_eq!(global_color_mode::try_get_override(), Err(()));
        // Falls back to (cached) detection.
        global_color_mode::clear_cache();
        let detected = global_color_mode::detect();
        assert_eq!(global_color_mode::detect(), detected);
    }

    #[test_case(EnvValues { no_color: Some("1"), term: Some("xterm-256color"), ..Default::default() }, ColorMode::Off; "no color")]
    #[test_case(EnvValues { no_color: Some(""), term: Some("xterm-256color"), ..Default::default() }, ColorMode::Ansi256; "empty no color is ignored")]
    #[test_case(EnvValues { term: Some("dumb"), ..Default::default() }, ColorMode::Off; "dumb")]
    #[test_case(EnvValues { colorterm: Some("truecolor"), term: Some("xterm"), ..Default::default() }, ColorMode::Truecolor; "colorterm truecolor")]
    #[test_case(EnvValues { colorterm: Some("24bit"), ..Default::default() }, ColorMode::Truecolor; "colorterm 24bit")]
    #[test_case(EnvValues { term: Some("screen-256color"), ..Default::default() }, ColorMode::Ansi256; "screen 256")]
    #[test_case(EnvValues { term: Some("xterm-color"), ..Default::default() }, ColorMode::Ansi16; "xterm color")]
    #[test_case(EnvValues { term: Some("rxvt"), ..Default::default() }, ColorMode::Ansi16; "rxvt")]
    #[test_case(EnvValues { term: Some("linux"), ..Default::default() }, ColorMode::Ansi16; "linux console")]
    #[test_case(EnvValues { is_ci: true, ..Default::default() }, ColorMode::Ansi16; "ci without term")]
    #[test_case(EnvValues { term: Some("xterm"), ..Default::default() }, ColorMode::Ansi256; "plain xterm")]
    #[test_case(EnvValues::default(), ColorMode::Ansi256; "nothing set")]
    fn test_determine_color_mode(env_values: EnvValues<'_>, expected: ColorMode) {
        assert_eq!(determine_color_mode(env_values), expected);
    }
}
