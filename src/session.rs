// SPDX-License-Identifier: PMPL-1.0-or-later

//! Session context threaded through every menu action.
//!
//! Holds the note repository, the translation store, the active settings
//! and the clock, so no component reaches for process-wide state.

use crate::error::{StartupError, StorageError};
use crate::i18n::TranslationStore;
use crate::notes::{IdSource, NoteRepository};
use crate::storage::{self, ConfigStore, NoteStore, TranslationSource};
use crate::types::Config;
use chrono::NaiveDateTime;
use tracing::{info, warn};

/// Source of "now" for date validation and system-dated notes.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub struct Session {
    pub notes: NoteRepository,
    pub translations: TranslationStore,
    config: Config,
    config_store: Box<dyn ConfigStore>,
    clock: Box<dyn Clock>,
}

impl Session {
    pub fn new(
        notes: NoteRepository,
        translations: TranslationStore,
        config: Config,
        config_store: Box<dyn ConfigStore>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            notes,
            translations,
            config,
            config_store,
            clock,
        }
    }

    /// Load settings, translations and notes from one store.
    ///
    /// Settings come first because they pick the locale column.
    pub fn open<S>(
        store: S,
        ids: Box<dyn IdSource>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, StartupError>
    where
        S: NoteStore + ConfigStore + TranslationSource + Clone + 'static,
    {
        let config = storage::load_or_init_config(&store).map_err(StartupError::Config)?;
        let translations = TranslationStore::load(Box::new(store.clone()), config.language)?;
        let notes =
            NoteRepository::load(Box::new(store.clone()), ids).map_err(StartupError::Notes)?;
        info!(
            notes = notes.len(),
            locale = %config.language,
            color = config.color.code(),
            "session opened"
        );
        Ok(Self::new(
            notes,
            translations,
            config,
            Box::new(store),
            clock,
        ))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Apply `change` and persist the whole config.
    ///
    /// The new values stay in effect when the write fails.
    pub fn update_config(&mut self, change: impl FnOnce(&mut Config)) -> Result<(), StorageError> {
        change(&mut self.config);
        let result = self.config_store.save_config(&self.config);
        if let Err(err) = &result {
            warn!(error = %err, "config not saved");
        }
        result
    }

    /// Resolve `key` without a trailing newline.
    pub fn text(&self, key: &str) -> String {
        self.translations.resolve(key, false)
    }
}
