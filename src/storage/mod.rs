// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistent storage for notes, settings and translation tables

pub mod codec;
mod memory;

pub use memory::MemoryStore;

use crate::error::{StorageError, TranslationLoadError};
use crate::i18n::{default_table, Locale};
use crate::types::{Config, Note};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const NOTES_FILE: &str = "notes.txt";
pub const CONFIG_FILE: &str = "config.txt";
pub const TRANSLATIONS_FILE: &str = "translations.txt";

pub trait NoteStore {
    /// Load every persisted note in insertion order. A missing store is an
    /// empty one.
    fn load_notes(&self) -> Result<Vec<Note>, StorageError>;

    /// Replace the persisted notes with `notes`.
    fn save_notes(&self, notes: &[Note]) -> Result<(), StorageError>;
}

pub trait ConfigStore {
    /// `None` when nothing has been persisted yet.
    fn load_config(&self) -> Result<Option<Config>, StorageError>;

    fn save_config(&self, config: &Config) -> Result<(), StorageError>;
}

pub trait TranslationSource {
    /// Where the table lives, for diagnostics.
    fn location(&self) -> PathBuf;

    /// `(key, value)` rows for `locale`, in table order.
    fn load_translations(&self, locale: Locale)
        -> Result<Vec<(String, String)>, TranslationLoadError>;
}

/// Load the persisted config, or persist and return the defaults when there
/// is none yet.
pub fn load_or_init_config(store: &dyn ConfigStore) -> Result<Config, StorageError> {
    match store.load_config()? {
        Some(config) => Ok(config),
        None => {
            let config = Config::default();
            info!("no saved config, writing defaults");
            store.save_config(&config)?;
            Ok(config)
        }
    }
}

/// Plain-text files inside one data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn notes_path(&self) -> PathBuf {
        self.dir.join(NOTES_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub fn translations_path(&self) -> PathBuf {
        self.dir.join(TRANSLATIONS_FILE)
    }

    /// Write the bundled translation table, replacing any existing one.
    pub fn write_default_translations(&self) -> Result<PathBuf, StorageError> {
        let path = self.translations_path();
        let mut text = String::new();
        for (key, values) in default_table() {
            text.push_str(&codec::encode_translation_row(&key, &values));
            text.push('\n');
        }
        write_file(&path, &text)?;
        Ok(path)
    }
}

impl NoteStore for FileStore {
    fn load_notes(&self) -> Result<Vec<Note>, StorageError> {
        let path = self.notes_path();
        let Some(text) = read_optional(&path)? else {
            debug!(path = %path.display(), "no notes file");
            return Ok(Vec::new());
        };

        let mut notes = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match codec::decode_note(line) {
                Ok(note) => notes.push(note),
                Err(reason) => {
                    let err = StorageError::Malformed {
                        path: path.clone(),
                        line: index + 1,
                        reason,
                    };
                    warn!(error = %err, "skipping note record");
                }
            }
        }
        info!(count = notes.len(), path = %path.display(), "notes loaded");
        Ok(notes)
    }

    fn save_notes(&self, notes: &[Note]) -> Result<(), StorageError> {
        let path = self.notes_path();
        write_file(&path, &codec::encode_notes(notes))?;
        debug!(count = notes.len(), path = %path.display(), "notes saved");
        Ok(())
    }
}

impl ConfigStore for FileStore {
    fn load_config(&self) -> Result<Option<Config>, StorageError> {
        let path = self.config_path();
        match read_optional(&path)? {
            Some(text) if !text.trim().is_empty() => Ok(Some(codec::decode_config(&text))),
            _ => Ok(None),
        }
    }

    fn save_config(&self, config: &Config) -> Result<(), StorageError> {
        let path = self.config_path();
        write_file(&path, &codec::encode_config(config))?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }
}

impl TranslationSource for FileStore {
    fn location(&self) -> PathBuf {
        self.translations_path()
    }

    fn load_translations(
        &self,
        locale: Locale,
    ) -> Result<Vec<(String, String)>, TranslationLoadError> {
        let path = self.translations_path();
        let text = read_optional(&path)?.ok_or_else(|| TranslationLoadError::Missing(path.clone()))?;
        if text.trim().is_empty() {
            return Err(TranslationLoadError::Empty(path));
        }

        let mut rows = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let Some((key, values)) = codec::decode_translation_row(line) else {
                warn!(path = %path.display(), line = index + 1, "skipping translation row");
                continue;
            };
            if let Some(value) = codec::select_locale(&key, &values, locale) {
                rows.push((key, value));
            }
        }
        Ok(rows)
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StorageError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), StorageError> {
    fs::write(path, contents).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}
