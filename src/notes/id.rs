// SPDX-License-Identifier: PMPL-1.0-or-later

//! Note id generation

use crate::types::NoteId;
use std::collections::VecDeque;
use std::io;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Produces candidate ids. Uniqueness is checked by the repository.
pub trait IdSource {
    fn next_id(&mut self) -> io::Result<NoteId>;
}

/// Random alphanumeric ids drawn from the operating system RNG.
#[derive(Debug, Default)]
pub struct OsIdSource;

impl IdSource for OsIdSource {
    fn next_id(&mut self) -> io::Result<NoteId> {
        let mut bytes = [0u8; NoteId::LEN];
        getrandom::getrandom(&mut bytes).map_err(|err| io::Error::other(err.to_string()))?;
        Ok(NoteId::new(encode(&bytes)))
    }
}

/// Replays a fixed list of ids, then falls back to the OS source.
#[derive(Debug, Default)]
pub struct SequenceIdSource {
    queued: VecDeque<NoteId>,
    fallback: OsIdSource,
}

impl SequenceIdSource {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queued: ids.into_iter().map(NoteId::new).collect(),
            fallback: OsIdSource,
        }
    }
}

impl IdSource for SequenceIdSource {
    fn next_id(&mut self) -> io::Result<NoteId> {
        match self.queued.pop_front() {
            Some(id) => Ok(id),
            None => self.fallback.next_id(),
        }
    }
}

fn encode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| ALPHABET[*b as usize % ALPHABET.len()] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_ids_are_fixed_length_alphanumeric() {
        let mut source = OsIdSource;
        for _ in 0..50 {
            let id = source.next_id().expect("rng available");
            assert_eq!(id.as_str().len(), NoteId::LEN);
            assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn sequence_replays_then_falls_back() {
        let mut source = SequenceIdSource::new(["first", "second"]);
        assert_eq!(source.next_id().unwrap().as_str(), "first");
        assert_eq!(source.next_id().unwrap().as_str(), "second");
        assert_eq!(source.next_id().unwrap().as_str().len(), NoteId::LEN);
    }

    #[test]
    fn encode_maps_into_alphabet() {
        assert_eq!(encode(&[0, 10, 36, 62]), "0Aa0");
    }
}
