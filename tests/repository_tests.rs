// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the note repository over both store backends

use notedeck::error::NoteError;
use notedeck::notes::{NoteChanges, NoteRepository, OsIdSource, SequenceIdSource};
use notedeck::storage::{FileStore, MemoryStore, NoteStore};
use notedeck::types::{NoteId, Timestamp};
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

fn stamp(day: u32) -> Timestamp {
    Timestamp {
        day,
        month: 5,
        year: 2023,
        hour: 12,
        minute: 0,
    }
}

#[test]
fn test_add_then_list_keeps_insertion_order() {
    let store = MemoryStore::new();
    let mut repo = NoteRepository::new(
        Box::new(store.clone()),
        Box::new(SequenceIdSource::new(["ID00000001", "ID00000002"])),
    );

    let first = repo
        .add("Groceries".into(), "Buy milk".into(), stamp(1))
        .unwrap();
    let second = repo
        .add("Dentist".into(), "Tuesday".into(), stamp(2))
        .unwrap();

    assert!(first.is_persisted());
    assert!(second.is_persisted());
    let titles: Vec<&str> = repo.list().iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["Groceries", "Dentist"]);
    assert_eq!(store.notes().len(), 2);
    assert_eq!(store.note_writes(), 2);
}

#[test]
fn test_generated_ids_are_unique_and_alphanumeric() {
    let mut repo = NoteRepository::new(Box::new(MemoryStore::new()), Box::new(OsIdSource));
    let mut seen = HashSet::new();

    for i in 0..1000 {
        let saved = repo
            .add(format!("Note {}", i), "Some content".into(), stamp(3))
            .unwrap();
        let id = saved.value;
        assert_eq!(id.as_str().len(), NoteId::LEN);
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(seen.insert(id));
    }
    assert_eq!(repo.len(), 1000);
}

#[test]
fn test_colliding_id_is_regenerated() {
    let mut repo = NoteRepository::new(
        Box::new(MemoryStore::new()),
        Box::new(SequenceIdSource::new(["SAMEIDXXXX", "SAMEIDXXXX", "OTHERIDXXX"])),
    );

    let _ = repo.add("First".into(), "content".into(), stamp(1)).unwrap();
    let second = repo.add("Second".into(), "content".into(), stamp(1)).unwrap();

    assert_eq!(second.value, NoteId::new("OTHERIDXXX"));
}

#[test]
fn test_edit_replaces_selected_fields() {
    let store = MemoryStore::new();
    let mut repo = NoteRepository::new(
        Box::new(store.clone()),
        Box::new(SequenceIdSource::new(["ID00000001"])),
    );
    let id = repo
        .add("Groceries".into(), "Buy milk".into(), stamp(1))
        .unwrap()
        .value;

    let saved = repo
        .edit(
            &id,
            NoteChanges {
                content: Some("Buy bread".into()),
                timestamp: Some(stamp(9)),
                ..NoteChanges::default()
            },
        )
        .unwrap();

    assert!(saved.is_persisted());
    let note = repo.get(&id).unwrap();
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.content, "Buy bread");
    assert_eq!(note.timestamp.day, 9);
    assert_eq!(store.notes()[0].content, "Buy bread");
}

#[test]
fn test_empty_edit_is_a_no_op() {
    let store = MemoryStore::new();
    let mut repo = NoteRepository::new(
        Box::new(store.clone()),
        Box::new(SequenceIdSource::new(["ID00000001"])),
    );
    let id = repo.add("Title".into(), "Body".into(), stamp(1)).unwrap().value;
    let writes = store.note_writes();

    let saved = repo.edit(&id, NoteChanges::default()).unwrap();

    assert!(saved.is_persisted());
    assert_eq!(store.note_writes(), writes);
}

#[test]
fn test_unknown_id_is_not_found() {
    let mut repo = NoteRepository::new(Box::new(MemoryStore::new()), Box::new(OsIdSource));
    let ghost = NoteId::new("NOSUCHNOTE");

    assert!(matches!(
        repo.edit(
            &ghost,
            NoteChanges {
                title: Some("x".into()),
                ..NoteChanges::default()
            }
        ),
        Err(NoteError::NotFound(_))
    ));
    assert!(matches!(repo.remove(&ghost), Err(NoteError::NotFound(_))));
}

#[test]
fn test_remove_twice_reports_not_found() {
    let mut repo = NoteRepository::new(
        Box::new(MemoryStore::new()),
        Box::new(SequenceIdSource::new(["ID00000001", "ID00000002", "ID00000003"])),
    );
    let a = repo.add("Alpha".into(), "aaa".into(), stamp(1)).unwrap().value;
    let b = repo.add("Beta".into(), "bbb".into(), stamp(2)).unwrap().value;
    let c = repo.add("Gamma".into(), "ccc".into(), stamp(3)).unwrap().value;

    let removed = repo.remove(&b).unwrap();
    assert_eq!(removed.value.title, "Beta");
    assert!(matches!(repo.remove(&b), Err(NoteError::NotFound(_))));

    let ids: Vec<&NoteId> = repo.list().iter().map(|n| &n.id).collect();
    assert_eq!(ids, [&a, &c]);
}

#[test]
fn test_failed_write_keeps_change_in_memory() {
    let store = MemoryStore::new();
    store.fail_writes(true);
    let mut repo = NoteRepository::new(
        Box::new(store.clone()),
        Box::new(SequenceIdSource::new(["ID00000001"])),
    );

    let saved = repo.add("Title".into(), "Body".into(), stamp(1)).unwrap();

    assert!(!saved.is_persisted());
    assert_eq!(repo.len(), 1);
    assert!(store.notes().is_empty());
}

#[test]
fn test_repository_survives_reload_from_disk() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    let mut repo = NoteRepository::new(
        Box::new(store.clone()),
        Box::new(SequenceIdSource::new(["ID00000001", "ID00000002"])),
    );
    let _ = repo.add("Groceries".into(), "Buy milk".into(), stamp(1)).unwrap();
    let _ = repo.add("Dentist".into(), "Tuesday".into(), stamp(2)).unwrap();

    let reloaded = NoteRepository::load(Box::new(store.clone()), Box::new(OsIdSource)).unwrap();

    assert_eq!(reloaded.list(), repo.list());
    let text = fs::read_to_string(store.notes_path()).unwrap();
    assert_eq!(
        text,
        "ID00000001|Groceries|Buy milk|1|5|2023|12|0\nID00000002|Dentist|Tuesday|2|5|2023|12|0\n"
    );
}

#[test]
fn test_load_drops_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    fs::write(
        store.notes_path(),
        "DUPLICATE1|First|aaa|1|1|2020|1|1\nDUPLICATE1|Second|bbb|2|2|2020|2|2\n",
    )
    .unwrap();

    let repo = NoteRepository::load(Box::new(store.clone()), Box::new(OsIdSource)).unwrap();

    assert_eq!(repo.len(), 1);
    assert_eq!(repo.list()[0].title, "First");
    assert_eq!(store.load_notes().unwrap().len(), 2);
}
