// SPDX-License-Identifier: PMPL-1.0-or-later

//! Note repository.
//!
//! Owns every [`Note`] in insertion order and writes the whole collection
//! through its [`NoteStore`] after each successful mutation. Input
//! validation happens before a note reaches this module.

mod id;

pub use id::{IdSource, OsIdSource, SequenceIdSource};

use crate::error::{NoteError, StorageError};
use crate::storage::NoteStore;
use crate::types::{Note, NoteId, Timestamp};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Outcome of a mutation: the in-memory result plus whether it reached
/// storage. A failed write does not undo the change.
#[must_use = "a failed write should be reported to the user"]
#[derive(Debug)]
pub struct Saved<T> {
    pub value: T,
    pub write: Result<(), StorageError>,
}

impl<T> Saved<T> {
    pub fn is_persisted(&self) -> bool {
        self.write.is_ok()
    }
}

/// Fields to replace on an existing note. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub timestamp: Option<Timestamp>,
}

impl NoteChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.timestamp.is_none()
    }
}

pub struct NoteRepository {
    notes: Vec<Note>,
    store: Box<dyn NoteStore>,
    ids: Box<dyn IdSource>,
}

impl NoteRepository {
    /// An empty repository. Nothing is read from `store`.
    pub fn new(store: Box<dyn NoteStore>, ids: Box<dyn IdSource>) -> Self {
        Self {
            notes: Vec::new(),
            store,
            ids,
        }
    }

    /// A repository holding whatever `store` has persisted.
    ///
    /// Records repeating an id already seen are dropped so ids stay unique.
    pub fn load(store: Box<dyn NoteStore>, ids: Box<dyn IdSource>) -> Result<Self, StorageError> {
        let mut seen = HashSet::new();
        let mut notes = Vec::new();
        for note in store.load_notes()? {
            if seen.insert(note.id.clone()) {
                notes.push(note);
            } else {
                warn!(id = %note.id, "dropping note with duplicate id");
            }
        }
        Ok(Self { notes, store, ids })
    }

    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Append a new note under a freshly generated id.
    pub fn add(
        &mut self,
        title: String,
        content: String,
        timestamp: Timestamp,
    ) -> Result<Saved<NoteId>, NoteError> {
        let id = self.fresh_id()?;
        self.notes.push(Note {
            id: id.clone(),
            title,
            content,
            timestamp,
        });
        info!(id = %id, count = self.notes.len(), "note added");
        Ok(Saved {
            value: id,
            write: self.persist(),
        })
    }

    /// Replace the fields present in `changes`.
    ///
    /// Empty changes leave the repository untouched and skip the write.
    pub fn edit(&mut self, id: &NoteId, changes: NoteChanges) -> Result<Saved<()>, NoteError> {
        let note = self
            .notes
            .iter_mut()
            .find(|note| &note.id == id)
            .ok_or_else(|| NoteError::NotFound(id.clone()))?;

        if changes.is_empty() {
            debug!(id = %id, "edit without changes");
            return Ok(Saved {
                value: (),
                write: Ok(()),
            });
        }

        if let Some(title) = changes.title {
            note.title = title;
        }
        if let Some(content) = changes.content {
            note.content = content;
        }
        if let Some(timestamp) = changes.timestamp {
            note.timestamp = timestamp;
        }
        info!(id = %id, "note edited");
        Ok(Saved {
            value: (),
            write: self.persist(),
        })
    }

    /// Remove the note with `id`, keeping the others in order.
    pub fn remove(&mut self, id: &NoteId) -> Result<Saved<Note>, NoteError> {
        let index = self
            .notes
            .iter()
            .position(|note| &note.id == id)
            .ok_or_else(|| NoteError::NotFound(id.clone()))?;
        let removed = self.notes.remove(index);
        info!(id = %id, count = self.notes.len(), "note removed");
        Ok(Saved {
            value: removed,
            write: self.persist(),
        })
    }

    fn fresh_id(&mut self) -> Result<NoteId, NoteError> {
        loop {
            let candidate = self.ids.next_id().map_err(NoteError::IdSource)?;
            if self.get(&candidate).is_none() {
                return Ok(candidate);
            }
            debug!(id = %candidate, "id collision, retrying");
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        let result = self.store.save_notes(&self.notes);
        if let Err(err) = &result {
            warn!(error = %err, "notes not saved");
        }
        result
    }
}
