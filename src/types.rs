// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for notedeck
//!
//! Notes, their timestamps, and the process-wide settings every screen
//! reads from.

use crate::i18n::Locale;
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt;

/// Opaque note identifier, unique across the repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(String);

impl NoteId {
    /// Number of characters in a generated id.
    pub const LEN: usize = 10;

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar date and wall-clock minute of a note.
///
/// Range invariants (day 1-31, month 1-12, hour 0-23, minute 0-59,
/// 1900 <= year <= current year) are enforced by
/// [`crate::validate::validate_date`] before a value is built from user
/// input; values loaded from disk are taken as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub hour: u32,
    pub minute: u32,
}

impl Timestamp {
    pub fn from_datetime(datetime: &NaiveDateTime) -> Self {
        Self {
            day: datetime.day(),
            month: datetime.month(),
            year: datetime.year(),
            hour: datetime.hour(),
            minute: datetime.minute(),
        }
    }

    /// Parse the `dd.mm.yyyy hh:mm` input form.
    ///
    /// Only the shape is checked here; range checks belong to the validator.
    pub fn parse(text: &str) -> Option<Self> {
        let (date, time) = text.trim().split_once(' ')?;
        let mut date_parts = date.split('.');
        let day = date_parts.next()?.parse().ok()?;
        let month = date_parts.next()?.parse().ok()?;
        let year = date_parts.next()?.parse().ok()?;
        if date_parts.next().is_some() {
            return None;
        }
        let (hour, minute) = time.split_once(':')?;
        Some(Self {
            day,
            month,
            year,
            hour: hour.parse().ok()?,
            minute: minute.parse().ok()?,
        })
    }

    /// `dd.mm.yyyy`
    pub fn format_date(&self) -> String {
        format!("{:02}.{:02}.{:04}", self.day, self.month, self.year)
    }

    /// `hh:mm`
    pub fn format_time(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.format_date(), self.format_time())
    }
}

/// A user note. Owned exclusively by [`crate::notes::NoteRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub timestamp: Timestamp,
}

impl Note {
    /// Label used wherever notes are listed for selection.
    pub fn caption(&self) -> String {
        format!("{} - {}", self.title, self.timestamp.format_date())
    }
}

/// Foreground colors offered by the settings screen.
///
/// Discriminants are the console attribute codes written to `config.txt`
/// and used as translation keys for the color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Red = 12,
    Green = 10,
    Blue = 9,
    Yellow = 14,
    #[default]
    White = 15,
}

impl Color {
    /// All colors, in menu order.
    pub fn all() -> &'static [Color] {
        &[
            Color::Red,
            Color::Green,
            Color::Blue,
            Color::Yellow,
            Color::White,
        ]
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::all().iter().copied().find(|color| color.code() == code)
    }

    /// Translation key naming this color.
    pub fn key(self) -> String {
        self.code().to_string()
    }
}

/// Length of the `dd.mm.yyyy hh:mm` date input.
pub const DATE_INPUT_LENGTH: usize = 16;

/// Process-wide settings, persisted to `config.txt` after every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_title_length: usize,
    pub max_content_length: usize,
    pub max_date_length: usize,
    pub max_message_length: usize,
    pub max_notes_count: usize,
    pub color: Color,
    pub language: Locale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_title_length: 100,
            max_content_length: 1000,
            max_date_length: DATE_INPUT_LENGTH,
            max_message_length: 100,
            max_notes_count: 100,
            color: Color::default(),
            language: Locale::default(),
        }
    }
}
