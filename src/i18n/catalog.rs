// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation store for notedeck.
//!
//! Holds the active locale's value for every key of the translation table.
//! Lookup is a hash map get; the table is a few dozen keys and is consulted on
//! every render.
//!
//! ## Adding a new key
//!
//! 1. Add the row to the bundled table in `defaults.rs`
//! 2. Add the same row to any shipped `translations.txt`
//!    (`notedeck --write-translations` regenerates it)

use super::Locale;
use crate::error::TranslationLoadError;
use crate::storage::TranslationSource;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Returned for keys the translation table does not define.
pub const MISSING_TRANSLATION: &str = "NOT FOUND, PLEASE ADD IT TO TRANSLATIONS FILE";

/// Placeholder replaced by [`substitute_template`].
pub const PLACEHOLDER: &str = "#value";

pub struct TranslationStore {
    locale: Locale,
    entries: HashMap<String, String>,
    source: Box<dyn TranslationSource>,
}

impl TranslationStore {
    /// Load the full table for `locale`. The keys seen here are the only
    /// keys this store will ever hold.
    pub fn load(
        source: Box<dyn TranslationSource>,
        locale: Locale,
    ) -> Result<Self, TranslationLoadError> {
        let rows = source.load_translations(locale)?;
        if rows.is_empty() {
            return Err(TranslationLoadError::Empty(source.location()));
        }
        let entries: HashMap<String, String> = rows.into_iter().collect();
        info!(keys = entries.len(), %locale, "translations loaded");
        Ok(Self {
            locale,
            entries,
            source,
        })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Raw lookup without the missing-key marker.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up `key` in the active locale.
    ///
    /// Absent keys yield [`MISSING_TRANSLATION`]. With
    /// `trailing_newline`, a `\n` is appended unless the text already ends
    /// with one.
    pub fn resolve(&self, key: &str, trailing_newline: bool) -> String {
        let mut text = match self.get(key) {
            Some(value) => value.to_string(),
            None => {
                warn!(key, locale = %self.locale, "missing translation");
                MISSING_TRANSLATION.to_string()
            }
        };
        if trailing_newline && !text.ends_with('\n') {
            text.push('\n');
        }
        text
    }

    /// Resolve `key` and fill its `#value` placeholder.
    pub fn resolve_with(&self, key: &str, value: &str, trailing_newline: bool) -> String {
        let mut text = substitute_template(&self.resolve(key, false), value);
        if trailing_newline && !text.ends_with('\n') {
            text.push('\n');
        }
        text
    }

    /// Switch to `locale`, refreshing the value of every existing key.
    ///
    /// Keys the new load does not mention keep their previous value; keys
    /// that only exist in the new load are ignored. On error, including a
    /// load with no rows, the store is left unchanged.
    pub fn set_locale(&mut self, locale: Locale) -> Result<(), TranslationLoadError> {
        let rows = self.source.load_translations(locale)?;
        if rows.is_empty() {
            return Err(TranslationLoadError::Empty(self.source.location()));
        }
        let mut refreshed = 0usize;
        for (key, value) in rows {
            if let Some(slot) = self.entries.get_mut(&key) {
                *slot = value;
                refreshed += 1;
            } else {
                debug!(key = %key, "ignoring key absent from initial load");
            }
        }
        info!(from = %self.locale, to = %locale, refreshed, "locale switched");
        self.locale = locale;
        Ok(())
    }
}

/// Replace the first `#value` in `template` with `value`.
///
/// A template without the placeholder comes back unchanged and `value` is
/// dropped.
pub fn substitute_template(template: &str, value: &str) -> String {
    template.replacen(PLACEHOLDER, value, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store_with(rows: &[(&str, &str, &str)]) -> MemoryStore {
        let store = MemoryStore::new();
        store.set_translations(
            rows.iter()
                .map(|(k, en, ro)| (k.to_string(), vec![en.to_string(), ro.to_string()]))
                .collect(),
        );
        store
    }

    #[test]
    fn substitutes_placeholder() {
        assert_eq!(
            substitute_template("Title: #value", "Groceries"),
            "Title: Groceries"
        );
    }

    #[test]
    fn template_without_placeholder_is_unchanged() {
        assert_eq!(
            substitute_template("No placeholder", "X"),
            "No placeholder"
        );
    }

    #[test]
    fn only_first_placeholder_is_replaced() {
        assert_eq!(substitute_template("#value/#value", "a"), "a/#value");
    }

    #[test]
    fn resolve_appends_newline_once() {
        let store = store_with(&[("hello", "Hello", "Salut"), ("nl", "Line\n", "Rând\n")]);
        let table = TranslationStore::load(Box::new(store), Locale::English).expect("load");
        assert_eq!(table.resolve("hello", false), "Hello");
        assert_eq!(table.resolve("hello", true), "Hello\n");
        assert_eq!(table.resolve("nl", true), "Line\n");
    }

    #[test]
    fn missing_key_yields_marker() {
        let store = store_with(&[("hello", "Hello", "Salut")]);
        let table = TranslationStore::load(Box::new(store), Locale::English).expect("load");
        assert_eq!(table.resolve("nope", false), MISSING_TRANSLATION);
        assert!(table.get("nope").is_none());
    }

    #[test]
    fn empty_table_fails_to_load() {
        let store = MemoryStore::new();
        store.set_translations(Vec::new());
        let err = TranslationStore::load(Box::new(store), Locale::English)
            .err()
            .expect("empty table must fail");
        assert!(matches!(err, TranslationLoadError::Empty(_)));
    }

    #[test]
    fn set_locale_with_empty_source_keeps_current_table() {
        let store = store_with(&[("hello", "Hello", "Salut")]);
        let mut table =
            TranslationStore::load(Box::new(store.clone()), Locale::English).expect("load");

        store.set_translations(Vec::new());
        let err = table.set_locale(Locale::Romanian).expect_err("empty reload");

        assert!(matches!(err, TranslationLoadError::Empty(_)));
        assert_eq!(table.locale(), Locale::English);
        assert_eq!(table.resolve("hello", false), "Hello");
    }

    #[test]
    fn set_locale_refreshes_existing_keys_only() {
        let store = store_with(&[("hello", "Hello", "Salut")]);
        let mut table =
            TranslationStore::load(Box::new(store.clone()), Locale::English).expect("load");

        store.set_translations(vec![
            (
                "hello".to_string(),
                vec!["Hello".to_string(), "Salut".to_string()],
            ),
            (
                "added".to_string(),
                vec!["Added".to_string(), "Adăugat".to_string()],
            ),
        ]);
        table.set_locale(Locale::Romanian).expect("switch");

        assert_eq!(table.locale(), Locale::Romanian);
        assert_eq!(table.resolve("hello", false), "Salut");
        assert!(!table.contains("added"));
        assert_eq!(table.len(), 1);
    }
}
