// SPDX-License-Identifier: PMPL-1.0-or-later

//! Supported UI locales.
//!
//! A locale is identified on disk by its column index in the translation
//! table and in `config.txt`, so the discriminants are part of the file
//! format.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English = 0,
    Romanian = 1,
}

impl Locale {
    /// All supported locales, in column order.
    pub fn all() -> &'static [Locale] {
        &[Locale::English, Locale::Romanian]
    }

    /// Column of this locale in the translation table.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// ISO 639-1 two-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Romanian => "ro",
        }
    }

    /// Translation key naming this locale in the language menu.
    pub fn key(self) -> String {
        self.index().to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
