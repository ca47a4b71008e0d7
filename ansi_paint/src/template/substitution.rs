// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::HashMap;

use crate::ColorSpec;

/// The value that replaces one `%{key}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitution {
    /// Inserted verbatim, it keeps whatever colors are open around it.
    Plain(String),
    /// Colored with its own arguments. Its text may hold placeholders of its own,
    /// resolved against its own substitutions.
    Styled(StyledSubstitution),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledSubstitution {
    pub text: String,
    pub args: Vec<ColorSpec>,
    pub substitutions: Substitutions,
}

impl From<&str> for Substitution {
    fn from(text: &str) -> Self { Substitution::Plain(text.to_string()) }
}

impl From<String> for Substitution {
    fn from(text: String) -> Self { Substitution::Plain(text) }
}

impl From<StyledSubstitution> for Substitution {
    fn from(styled: StyledSubstitution) -> Self { Substitution::Styled(styled) }
}

impl StyledSubstitution {
    #[must_use]
    pub fn new(text: impl Into<String>, args: Vec<ColorSpec>) -> Self {
        Self {
            text: text.into(),
            args,
            substitutions: Substitutions::default(),
        }
    }

    #[must_use]
    pub fn with_substitutions(mut self, substitutions: Substitutions) -> Self {
        self.substitutions = substitutions;
        self
    }
}

/// Named values for the placeholders of one template level.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_paint::{Substitutions, color_specs};
///
/// let subs = Substitutions::default()
///     .plain("eye", "-")
///     .styled("nose", "_", color_specs!["red"]);
/// assert!(subs.get("eye").is_some());
/// assert!(subs.get("mouth").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    pub map: HashMap<String, Substitution>,
}

impl Substitutions {
    #[must_use]
    pub fn plain(self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.with(key, Substitution::Plain(text.into()))
    }

    #[must_use]
    pub fn styled(
        self,
        key: impl Into<String>,
        text: impl Into<String>,
        args: Vec<ColorSpec>,
    ) -> Self {
        self.with(key, StyledSubstitution::new(text, args))
    }

    /// Like [`Substitutions::styled`] for a value whose text has placeholders of its
    /// own.
    #[must_use]
    pub fn nested(
        self,
        key: impl Into<String>,
        text: impl Into<String>,
        args: Vec<ColorSpec>,
        substitutions: Substitutions,
    ) -> Self {
        self.with(
            key,
            StyledSubstitution::new(text, args).with_substitutions(substitutions),
        )
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Substitution>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Substitution>) {
        self.map.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Substitution> { self.map.get(key) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.map.is_empty() }
}

impl<K: Into<String>, V: Into<Substitution>> FromIterator<(K, V)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
