// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for notedeck.
//!
//! Every user-visible string is looked up by key in a [`TranslationStore`]
//! loaded from the persisted translation table (`key|en|ro` per line).
//!
//! ## Supported locales
//!
//! | Index | Locale   | Code |
//! |-------|----------|------|
//! | 0     | English  | en   |
//! | 1     | Romanian | ro   |
//!
//! ## Design
//!
//! The key set is fixed by the first load. Switching locale refreshes the
//! values of those keys and never adds new ones. A key that is absent
//! resolves to [`MISSING_TRANSLATION`], an authoring error made visible on
//! screen rather than a crash.
//!
//! Templates carry a single `#value` placeholder filled by
//! [`substitute_template`].

mod catalog;
mod defaults;
mod locale;

pub use catalog::{substitute_template, TranslationStore, MISSING_TRANSLATION, PLACEHOLDER};
pub use defaults::default_table;
pub use locale::Locale;
