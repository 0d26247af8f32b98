// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-memory store implementing every storage trait.
//!
//! Clones share state, so a caller can hand one clone to the session and
//! keep another to inspect what was persisted.

use super::{codec, ConfigStore, NoteStore, TranslationSource};
use crate::error::{StorageError, TranslationLoadError};
use crate::i18n::{default_table, Locale};
use crate::types::{Config, Note};
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

const LOCATION: &str = "<memory>";

#[derive(Debug, Default)]
struct State {
    notes: Vec<Note>,
    config: Option<Config>,
    translations: Option<Vec<(String, Vec<String>)>>,
    fail_writes: bool,
    note_writes: usize,
    config_writes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Rc<RefCell<State>>,
}

impl MemoryStore {
    /// An empty store with no translation table.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store carrying the bundled translation table.
    pub fn with_default_translations() -> Self {
        let store = Self::new();
        store.set_translations(default_table());
        store
    }

    pub fn set_translations(&self, rows: Vec<(String, Vec<String>)>) {
        self.state.borrow_mut().translations = Some(rows);
    }

    pub fn set_notes(&self, notes: Vec<Note>) {
        self.state.borrow_mut().notes = notes;
    }

    pub fn set_config(&self, config: Config) {
        self.state.borrow_mut().config = Some(config);
    }

    /// Make every subsequent write fail with an I/O error.
    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }

    pub fn notes(&self) -> Vec<Note> {
        self.state.borrow().notes.clone()
    }

    pub fn config(&self) -> Option<Config> {
        self.state.borrow().config.clone()
    }

    /// Number of successful note writes.
    pub fn note_writes(&self) -> usize {
        self.state.borrow().note_writes
    }

    /// Number of successful config writes.
    pub fn config_writes(&self) -> usize {
        self.state.borrow().config_writes
    }

    fn check_write(&self) -> Result<(), StorageError> {
        if self.state.borrow().fail_writes {
            return Err(StorageError::Write {
                path: PathBuf::from(LOCATION),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "writes disabled"),
            });
        }
        Ok(())
    }
}

impl NoteStore for MemoryStore {
    fn load_notes(&self) -> Result<Vec<Note>, StorageError> {
        Ok(self.notes())
    }

    fn save_notes(&self, notes: &[Note]) -> Result<(), StorageError> {
        self.check_write()?;
        let mut state = self.state.borrow_mut();
        state.notes = notes.to_vec();
        state.note_writes += 1;
        Ok(())
    }
}

impl ConfigStore for MemoryStore {
    fn load_config(&self) -> Result<Option<Config>, StorageError> {
        Ok(self.config())
    }

    fn save_config(&self, config: &Config) -> Result<(), StorageError> {
        self.check_write()?;
        let mut state = self.state.borrow_mut();
        state.config = Some(config.clone());
        state.config_writes += 1;
        Ok(())
    }
}

impl TranslationSource for MemoryStore {
    fn location(&self) -> PathBuf {
        PathBuf::from(LOCATION)
    }

    fn load_translations(
        &self,
        locale: Locale,
    ) -> Result<Vec<(String, String)>, TranslationLoadError> {
        let state = self.state.borrow();
        let rows = state
            .translations
            .as_ref()
            .ok_or_else(|| TranslationLoadError::Missing(self.location()))?;
        Ok(rows
            .iter()
            .filter_map(|(key, values)| {
                codec::select_locale(key, values, locale).map(|value| (key.clone(), value))
            })
            .collect())
    }
}
