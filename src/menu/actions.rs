// SPDX-License-Identifier: PMPL-1.0-or-later

//! What each menu entry does when activated

use super::input::{prompt_optional, prompt_required};
use super::screens::Screen;
use crate::error::{NoteError, StorageError};
use crate::i18n::Locale;
use crate::notes::NoteChanges;
use crate::session::Session;
use crate::terminal::Terminal;
use crate::types::{Color, NoteId, Timestamp};
use crate::validate::{check_capacity, validate_content, validate_date, validate_title, ValidationResult};
use anyhow::{anyhow, Result};
use std::io;
use tracing::{info, warn};

const RULE: &str = "______________________________________________________";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Push a sub-menu.
    Open(Screen),
    AddNote,
    ViewNotes,
    EditNote(NoteId),
    DeleteNote(NoteId),
    SetColor(Color),
    SetLocale(Locale),
    /// Date and store a note whose title and content were already entered.
    FinishNote { draft: NoteDraft, date: DateSource },
    Back,
    Exit,
}

/// Title and content collected before the date is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    Manual,
    System,
}

/// Transition requested by an activated entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The action finished; the entry's `AfterActivate` decides what follows.
    Done,
    Push(Screen),
    Exit,
}

pub fn activate(action: &Action, session: &mut Session, term: &mut dyn Terminal) -> Result<Outcome> {
    match action {
        Action::Open(screen) => open(screen, session, term),
        Action::AddNote => add_note(session, term),
        Action::ViewNotes => {
            view_notes(session, term)?;
            Ok(Outcome::Done)
        }
        Action::EditNote(id) => {
            edit_note(id, session, term)?;
            Ok(Outcome::Done)
        }
        Action::DeleteNote(id) => {
            delete_note(id, session, term)?;
            Ok(Outcome::Done)
        }
        Action::SetColor(color) => {
            set_color(*color, session, term)?;
            Ok(Outcome::Done)
        }
        Action::SetLocale(locale) => {
            set_locale(*locale, session, term)?;
            Ok(Outcome::Done)
        }
        Action::FinishNote { draft, date } => {
            finish_note(draft, *date, session, term)?;
            Ok(Outcome::Done)
        }
        Action::Back => Ok(Outcome::Done),
        Action::Exit => {
            info!("exit requested");
            Ok(Outcome::Exit)
        }
    }
}

fn open(screen: &Screen, session: &Session, term: &mut dyn Terminal) -> Result<Outcome> {
    let picks_a_note = matches!(screen, Screen::EditPicker | Screen::DeletePicker);
    if picks_a_note && session.notes.is_empty() {
        notify(session, term, &session.text("noNotesFound"))?;
        return Ok(Outcome::Done);
    }
    Ok(Outcome::Push(screen.clone()))
}

fn add_note(session: &Session, term: &mut dyn Terminal) -> Result<Outcome> {
    if let ValidationResult::Rejected(reason) = check_capacity(session.notes.len(), session.config()) {
        notify(session, term, &reason.localize(&session.translations))?;
        return Ok(Outcome::Done);
    }
    let config = session.config();
    let translations = &session.translations;

    term.clear_screen()?;
    let title = prompt_required(
        term,
        translations,
        &translations.resolve("getInputNoteTitle", true),
        |candidate| validate_title(candidate, config),
    )?;

    term.clear_screen()?;
    let content = prompt_required(
        term,
        translations,
        &translations.resolve("getInputNoteContent", true),
        |candidate| validate_content(candidate, config),
    )?;

    Ok(Outcome::Push(Screen::DateSource(NoteDraft { title, content })))
}

fn finish_note(
    draft: &NoteDraft,
    date: DateSource,
    session: &mut Session,
    term: &mut dyn Terminal,
) -> Result<()> {
    let now = session.now();
    let timestamp = match date {
        DateSource::System => Timestamp::from_datetime(&now),
        DateSource::Manual => {
            term.clear_screen()?;
            let config = session.config();
            let text = prompt_required(
                term,
                &session.translations,
                &session.translations.resolve("getInputDate", true),
                |candidate| validate_date(candidate, config, &now),
            )?;
            parse_validated(&text)?
        }
    };

    let saved = session
        .notes
        .add(draft.title.clone(), draft.content.clone(), timestamp)?;
    notify(session, term, &session.text("noteAddedSuccessfully"))?;
    report_write(session, term, saved.write)?;
    Ok(())
}

fn edit_note(id: &NoteId, session: &mut Session, term: &mut dyn Terminal) -> Result<()> {
    let Some(note) = session.notes.get(id).cloned() else {
        notify(session, term, &session.text("noteNotFound"))?;
        return Ok(());
    };
    let now = session.now();
    let config = session.config();
    let translations = &session.translations;

    term.clear_screen()?;
    term.write(&translations.resolve_with("currentTitle", &note.title, true))?;
    let title = prompt_optional(
        term,
        translations,
        &translations.resolve("getInputNewNoteTitle", true),
        |candidate| validate_title(candidate, config),
    )?;

    term.clear_screen()?;
    term.write(&translations.resolve_with("currentContent", &note.content, true))?;
    let content = prompt_optional(
        term,
        translations,
        &translations.resolve("getInputNewNoteContent", true),
        |candidate| validate_content(candidate, config),
    )?;

    term.clear_screen()?;
    term.write(&translations.resolve_with("currentDate", &note.timestamp.to_string(), true))?;
    let timestamp = prompt_optional(
        term,
        translations,
        &translations.resolve("getInputNewNoteDate", true),
        |candidate| validate_date(candidate, config, &now),
    )?
    .map(|text| parse_validated(&text))
    .transpose()?;

    let changes = NoteChanges {
        title,
        content,
        timestamp,
    };
    match session.notes.edit(id, changes) {
        Ok(saved) => {
            notify(session, term, &session.text("noteEditedSuccessfully"))?;
            report_write(session, term, saved.write)?;
        }
        Err(NoteError::NotFound(_)) => notify(session, term, &session.text("noteNotFound"))?,
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn delete_note(id: &NoteId, session: &mut Session, term: &mut dyn Terminal) -> Result<()> {
    match session.notes.remove(id) {
        Ok(saved) => {
            notify(session, term, &session.text("noteDeletedSuccessfully"))?;
            report_write(session, term, saved.write)?;
        }
        Err(NoteError::NotFound(missing)) => {
            warn!(id = %missing, "delete of unknown note");
            notify(session, term, &session.text("noteNotFound"))?;
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn view_notes(session: &Session, term: &mut dyn Terminal) -> io::Result<()> {
    let translations = &session.translations;
    term.clear_screen()?;
    if session.notes.is_empty() {
        term.write(&translations.resolve("noNotesFound", true))?;
        return term.pause(&session.text("pressAnyKey"));
    }

    term.write(&format!("{}\n", RULE))?;
    for note in session.notes.list() {
        term.write(&format!("-{}", translations.resolve("noteInfo", true)))?;
        term.write(&format!(
            "      -{}",
            translations.resolve_with("title", &note.title, true)
        ))?;
        term.write(&format!("      -{}", translations.resolve("dateInfo", true)))?;
        term.write(&format!(
            "         -{}",
            translations.resolve_with("date", &note.timestamp.format_date(), true)
        ))?;
        term.write(&format!(
            "         -{}",
            translations.resolve_with("time", &note.timestamp.format_time(), true)
        ))?;
        term.write(&format!(
            "      -{}",
            translations.resolve_with("content", &note.content, true)
        ))?;
        term.write(&format!("{}\n", RULE))?;
    }
    term.pause(&session.text("pressAnyKey"))
}

fn set_color(color: Color, session: &mut Session, term: &mut dyn Terminal) -> Result<()> {
    let write = session.update_config(|config| config.color = color);
    term.set_foreground_color(color)?;
    info!(color = color.code(), "color changed");
    notify(session, term, &session.text("colorChangedSuccessfully"))?;
    report_write(session, term, write)?;
    Ok(())
}

/// Reload translations for `locale`, then persist the choice. A failed
/// reload leaves both the table and the config on the previous locale.
fn set_locale(locale: Locale, session: &mut Session, term: &mut dyn Terminal) -> Result<()> {
    if let Err(err) = session.translations.set_locale(locale) {
        warn!(error = %err, %locale, "keeping previous translations");
        let message = session
            .translations
            .resolve_with("languageChangeFailed", &err.to_string(), true);
        notify(session, term, &message)?;
        return Ok(());
    }
    let write = session.update_config(|config| config.language = locale);
    report_write(session, term, write)?;
    Ok(())
}

/// Clear the screen, show `message` and wait for acknowledgement.
fn notify(session: &Session, term: &mut dyn Terminal, message: &str) -> io::Result<()> {
    term.clear_screen()?;
    term.write(message)?;
    if !message.ends_with('\n') {
        term.write("\n")?;
    }
    term.pause(&session.text("pressAnyKey"))
}

/// Tell the user a change stayed in memory only.
fn report_write(
    session: &Session,
    term: &mut dyn Terminal,
    write: Result<(), StorageError>,
) -> io::Result<()> {
    match write {
        Ok(()) => Ok(()),
        Err(err) => notify(
            session,
            term,
            &session.translations.resolve_with("saveFailed", &err.to_string(), true),
        ),
    }
}

fn parse_validated(text: &str) -> Result<Timestamp> {
    Timestamp::parse(text).ok_or_else(|| anyhow!("accepted date '{}' did not parse", text))
}
