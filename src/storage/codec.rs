// SPDX-License-Identifier: PMPL-1.0-or-later

//! Line codecs for the pipe-delimited files.
//!
//! * notes: `id|title|content|day|month|year|hour|minute`
//! * config: `key|value`
//! * translations: `key|value0|value1|...` in locale index order
//!
//! Nothing is escaped. Titles and contents containing `|` or line breaks
//! are refused by the validators before they can reach this layer.

use crate::i18n::Locale;
use crate::types::{Color, Config, Note, NoteId, Timestamp, DATE_INPUT_LENGTH};
use tracing::warn;

pub const DELIMITER: char = '|';

const NOTE_FIELDS: usize = 8;

pub fn encode_note(note: &Note) -> String {
    let ts = &note.timestamp;
    format!(
        "{}|{}|{}|{}|{}|{}|{}|{}",
        note.id, note.title, note.content, ts.day, ts.month, ts.year, ts.hour, ts.minute
    )
}

pub fn decode_note(line: &str) -> Result<Note, String> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != NOTE_FIELDS {
        return Err(format!(
            "expected {} fields, found {}",
            NOTE_FIELDS,
            fields.len()
        ));
    }
    if fields[0].is_empty() {
        return Err("empty note id".to_string());
    }

    let number = |index: usize, name: &str| -> Result<u32, String> {
        fields[index]
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("{} is not a number: '{}'", name, fields[index]))
    };
    let year = fields[5]
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("year is not a number: '{}'", fields[5]))?;

    Ok(Note {
        id: NoteId::new(fields[0]),
        title: fields[1].to_string(),
        content: fields[2].to_string(),
        timestamp: Timestamp {
            day: number(3, "day")?,
            month: number(4, "month")?,
            year,
            hour: number(6, "hour")?,
            minute: number(7, "minute")?,
        },
    })
}

pub fn encode_notes(notes: &[Note]) -> String {
    let mut text = String::new();
    for note in notes {
        text.push_str(&encode_note(note));
        text.push('\n');
    }
    text
}

pub fn encode_config(config: &Config) -> String {
    format!(
        "maxTitleLength|{}\nmaxContentLength|{}\nmaxDateLength|{}\nmaxMessageLength|{}\nmaxNotesCount|{}\ncolor|{}\nlanguage|{}\n",
        config.max_title_length,
        config.max_content_length,
        config.max_date_length,
        config.max_message_length,
        config.max_notes_count,
        config.color.code(),
        config.language.index(),
    )
}

/// Decode `config.txt`. Keys not present keep their defaults.
pub fn decode_config(text: &str) -> Config {
    let mut config = Config::default();
    for (number, line) in text.lines().enumerate() {
        let Some((key, value)) = line.split_once(DELIMITER) else {
            if !line.trim().is_empty() {
                warn!(line = number + 1, "config line without delimiter");
            }
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "maxTitleLength" => set_limit(&mut config.max_title_length, key, value),
            "maxContentLength" => set_limit(&mut config.max_content_length, key, value),
            "maxDateLength" => match value.parse::<usize>() {
                Ok(DATE_INPUT_LENGTH) => config.max_date_length = DATE_INPUT_LENGTH,
                _ => warn!(
                    value,
                    expected = DATE_INPUT_LENGTH,
                    "maxDateLength must match the date input, keeping default"
                ),
            },
            "maxMessageLength" => set_limit(&mut config.max_message_length, key, value),
            "maxNotesCount" => set_limit(&mut config.max_notes_count, key, value),
            "color" => {
                config.color = value
                    .parse::<u8>()
                    .ok()
                    .and_then(Color::from_code)
                    .unwrap_or_else(|| {
                        warn!(value, "unknown color code, using white");
                        Color::White
                    });
            }
            "language" => {
                config.language = value
                    .parse::<usize>()
                    .ok()
                    .and_then(Locale::from_index)
                    .unwrap_or_else(|| {
                        warn!(value, "unknown locale index, using English");
                        Locale::English
                    });
            }
            other => warn!(key = other, "ignoring unknown config key"),
        }
    }
    config
}

fn set_limit(slot: &mut usize, key: &str, value: &str) {
    match value.parse::<usize>() {
        Ok(parsed) => *slot = parsed,
        Err(_) => warn!(key, value, "unparsable config value, keeping default"),
    }
}

/// Split a translation row into its key and per-locale values.
pub fn decode_translation_row(line: &str) -> Option<(String, Vec<String>)> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = line.split(DELIMITER);
    let key = fields.next()?.trim();
    if key.is_empty() {
        return None;
    }
    let values: Vec<String> = fields.map(str::to_string).collect();
    if values.is_empty() {
        return None;
    }
    Some((key.to_string(), values))
}

pub fn encode_translation_row(key: &str, values: &[String]) -> String {
    let mut line = key.to_string();
    for value in values {
        line.push(DELIMITER);
        line.push_str(value);
    }
    line
}

/// Pick the column for `locale`, falling back to the first column.
pub fn select_locale(key: &str, values: &[String], locale: Locale) -> Option<String> {
    match values.get(locale.index()) {
        Some(value) => Some(value.clone()),
        None => {
            warn!(key, %locale, "translation row lacks locale column, using first column");
            values.first().cloned()
        }
    }
}
