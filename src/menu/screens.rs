// SPDX-License-Identifier: PMPL-1.0-or-later

//! Menu definitions, rebuilt from the session every time a screen is shown

use super::actions::{Action, DateSource, NoteDraft};
use super::{AfterActivate, Menu, MenuEntry};
use crate::i18n::Locale;
use crate::session::Session;
use crate::types::{Color, NoteId};

use AfterActivate::{ReturnToParent, StayOnScreen};

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Root,
    Settings,
    Language,
    Color,
    EditPicker,
    DeletePicker,
    /// How to date the note being created.
    DateSource(NoteDraft),
}

pub fn build(screen: &Screen, session: &Session) -> Menu {
    match screen {
        Screen::Root => root(),
        Screen::Settings => settings(),
        Screen::Language => language(),
        Screen::Color => color(),
        Screen::EditPicker => note_picker(
            session,
            "editNoteActionTitle",
            "editNoteActionIndication",
            Action::EditNote,
        ),
        Screen::DeletePicker => note_picker(
            session,
            "deleteNoteActionTitle",
            "deleteNoteActionIndication",
            Action::DeleteNote,
        ),
        Screen::DateSource(draft) => date_source(draft),
    }
}

fn root() -> Menu {
    Menu {
        title_key: "firstMenuTitle",
        instructions_key: "firstMenuIndication",
        entries: vec![
            MenuEntry::translated("addNoteAction", Action::AddNote, StayOnScreen),
            MenuEntry::translated(
                "deleteNoteAction",
                Action::Open(Screen::DeletePicker),
                StayOnScreen,
            ),
            MenuEntry::translated(
                "editNoteAction",
                Action::Open(Screen::EditPicker),
                StayOnScreen,
            ),
            MenuEntry::translated("viewNotes", Action::ViewNotes, StayOnScreen),
            MenuEntry::translated(
                "settingsAction",
                Action::Open(Screen::Settings),
                StayOnScreen,
            ),
            MenuEntry::translated("exit", Action::Exit, ReturnToParent),
        ],
    }
}

fn settings() -> Menu {
    Menu {
        title_key: "settingsActionTitle",
        instructions_key: "settingActionIndication",
        entries: vec![
            MenuEntry::translated(
                "changeColorActionTitle",
                Action::Open(Screen::Color),
                StayOnScreen,
            ),
            MenuEntry::translated(
                "changeLanguageActionTitle",
                Action::Open(Screen::Language),
                StayOnScreen,
            ),
            back(),
        ],
    }
}

fn language() -> Menu {
    let mut entries: Vec<MenuEntry> = Locale::all()
        .iter()
        .map(|locale| {
            MenuEntry::translated(locale.key(), Action::SetLocale(*locale), ReturnToParent)
        })
        .collect();
    entries.push(back());
    Menu {
        title_key: "changeLanguageActionTitle",
        instructions_key: "changeLanguageActionIndication",
        entries,
    }
}

fn color() -> Menu {
    let mut entries: Vec<MenuEntry> = Color::all()
        .iter()
        .map(|color| MenuEntry::translated(color.key(), Action::SetColor(*color), ReturnToParent))
        .collect();
    entries.push(back());
    Menu {
        title_key: "changeColorActionTitle",
        instructions_key: "changeColorActionIndication",
        entries,
    }
}

fn note_picker(
    session: &Session,
    title_key: &'static str,
    instructions_key: &'static str,
    action: fn(NoteId) -> Action,
) -> Menu {
    let mut entries: Vec<MenuEntry> = session
        .notes
        .list()
        .iter()
        .map(|note| {
            MenuEntry::literal(
                note.id.as_str(),
                note.caption(),
                action(note.id.clone()),
                ReturnToParent,
            )
        })
        .collect();
    entries.push(back());
    Menu {
        title_key,
        instructions_key,
        entries,
    }
}

fn date_source(draft: &NoteDraft) -> Menu {
    Menu {
        title_key: "getDateActionTitle",
        instructions_key: "getDateActionIndication",
        entries: vec![
            MenuEntry::translated(
                "addDateFunction",
                Action::FinishNote {
                    draft: draft.clone(),
                    date: DateSource::Manual,
                },
                ReturnToParent,
            ),
            MenuEntry::translated(
                "getSystemDateFunction",
                Action::FinishNote {
                    draft: draft.clone(),
                    date: DateSource::System,
                },
                ReturnToParent,
            ),
            back(),
        ],
    }
}

fn back() -> MenuEntry {
    MenuEntry::translated("back", Action::Back, ReturnToParent)
}
