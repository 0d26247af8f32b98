// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for notedeck.
//!
//! Validation failures are not errors: they are
//! [`crate::validate::ValidationResult`] values handled by the re-prompt
//! loop. Everything here is either recoverable (storage, not found) or
//! fatal at startup (translations).

use crate::types::NoteId;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: malformed record: {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("note {0} not found")]
    NotFound(NoteId),

    #[error("could not generate a note id: {0}")]
    IdSource(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum TranslationLoadError {
    #[error("translation table {} not found", .0.display())]
    Missing(PathBuf),

    #[error("translation table {} is empty", .0.display())]
    Empty(PathBuf),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Conditions that stop the program before the first screen is shown.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot load settings: {0}")]
    Config(#[source] StorageError),

    #[error("cannot load notes: {0}")]
    Notes(#[source] StorageError),

    #[error("cannot load translations: {0}")]
    Translations(#[from] TranslationLoadError),
}
