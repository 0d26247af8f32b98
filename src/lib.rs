// SPDX-License-Identifier: PMPL-1.0-or-later

//! notedeck: keyboard-driven console notes.
//!
//! Notes, settings and translations live in pipe-delimited text files in a
//! data directory. The menu engine drives everything through a
//! [`session::Session`] and a [`terminal::Terminal`], so whole sessions can
//! be replayed in tests with [`storage::MemoryStore`] and
//! [`terminal::ScriptedTerminal`].

pub mod error;
pub mod i18n;
pub mod logging;
pub mod menu;
pub mod notes;
pub mod session;
pub mod storage;
pub mod terminal;
pub mod types;
pub mod validate;
