// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bundled translation table.
//!
//! Written to disk by `notedeck --write-translations` and used by tests as
//! the reference key set. Columns follow [`super::Locale`] index order.

use super::Locale;

const TABLE: &[(&str, &str, &str)] = &[
    // Root menu
    ("firstMenuTitle", "Notes", "Notițe"),
    (
        "firstMenuIndication",
        "Use W/S to move, E to select.",
        "Folosiți W/S pentru navigare, E pentru selectare.",
    ),
    ("addNoteAction", "Add note", "Adaugă notiță"),
    ("deleteNoteAction", "Delete note", "Șterge notiță"),
    ("editNoteAction", "Edit note", "Editează notiță"),
    ("viewNotes", "View notes", "Vezi notițele"),
    ("settingsAction", "Settings", "Setări"),
    ("exit", "Exit", "Ieșire"),
    ("back", "Back", "Înapoi"),
    ("pressAnyKey", "Press any key to continue...", "Apăsați orice tastă pentru a continua..."),
    // Add note
    ("getInputNoteTitle", "Enter the note title:", "Introduceți titlul notiței:"),
    ("getInputNoteContent", "Enter the note content:", "Introduceți conținutul notiței:"),
    (
        "getInputDate",
        "Enter the date (dd.mm.yyyy hh:mm):",
        "Introduceți data (zz.ll.aaaa hh:mm):",
    ),
    ("getDateActionTitle", "Note date", "Data notiței"),
    (
        "getDateActionIndication",
        "Choose how to date the note.",
        "Alegeți cum se datează notița.",
    ),
    ("addDateFunction", "Enter date manually", "Introduceți data manual"),
    ("getSystemDateFunction", "Use current date and time", "Folosiți data și ora curentă"),
    ("noteAddedSuccessfully", "Note added successfully!", "Notița a fost adăugată cu succes!"),
    (
        "noteLimitReached",
        "You have reached the maximum number of notes (#value)!",
        "Ați atins numărul maxim de notițe (#value)!",
    ),
    // Edit note
    ("editNoteActionTitle", "Edit note", "Editează notiță"),
    ("editNoteActionIndication", "Choose the note to edit.", "Alegeți notița de editat."),
    ("currentTitle", "Current title: #value", "Titlul curent: #value"),
    (
        "getInputNewNoteTitle",
        "Enter the new title (empty keeps it):",
        "Introduceți noul titlu (gol îl păstrează):",
    ),
    ("currentContent", "Current content: #value", "Conținutul curent: #value"),
    (
        "getInputNewNoteContent",
        "Enter the new content (empty keeps it):",
        "Introduceți noul conținut (gol îl păstrează):",
    ),
    ("currentDate", "Current date: #value", "Data curentă: #value"),
    (
        "getInputNewNoteDate",
        "Enter the new date as dd.mm.yyyy hh:mm (empty keeps it):",
        "Introduceți noua dată ca zz.ll.aaaa hh:mm (gol o păstrează):",
    ),
    ("noteEditedSuccessfully", "Note edited successfully!", "Notița a fost editată cu succes!"),
    // Delete note
    ("deleteNoteActionTitle", "Delete note", "Șterge notiță"),
    ("deleteNoteActionIndication", "Choose the note to delete.", "Alegeți notița de șters."),
    ("noteDeletedSuccessfully", "Note deleted successfully!", "Notița a fost ștearsă cu succes!"),
    ("noteNotFound", "Note not found!", "Notița nu a fost găsită!"),
    // View notes
    ("noNotesFound", "No notes found!", "Nu există notițe!"),
    ("noteInfo", "Note", "Notiță"),
    ("title", "Title: #value", "Titlu: #value"),
    ("dateInfo", "Date", "Dată"),
    ("date", "Date: #value", "Data: #value"),
    ("time", "Time: #value", "Ora: #value"),
    ("content", "Content: #value", "Conținut: #value"),
    // Settings
    ("settingsActionTitle", "Settings", "Setări"),
    ("settingActionIndication", "Choose a setting to change.", "Alegeți o setare."),
    ("changeColorActionTitle", "Change color", "Schimbă culoarea"),
    ("changeColorActionIndication", "Choose the text color.", "Alegeți culoarea textului."),
    ("changeLanguageActionTitle", "Change language", "Schimbă limba"),
    (
        "changeLanguageActionIndication",
        "Choose the application language.",
        "Alegeți limba aplicației.",
    ),
    ("colorChangedSuccessfully", "Color changed successfully!", "Culoarea a fost schimbată cu succes!"),
    (
        "languageChangeFailed",
        "Language could not be changed: #value",
        "Limba nu a putut fi schimbată: #value",
    ),
    ("saveFailed", "Changes could not be saved: #value", "Modificările nu au putut fi salvate: #value"),
    ("0", "English", "Engleză"),
    ("1", "Romanian", "Română"),
    ("12", "Red", "Roșu"),
    ("10", "Green", "Verde"),
    ("9", "Blue", "Albastru"),
    ("14", "Yellow", "Galben"),
    ("15", "White", "Alb"),
    // Validation
    ("invalidInput", "Invalid input!", "Date invalide!"),
    ("titleEmpty", "Title must not be empty!", "Titlul nu poate fi gol!"),
    ("titleSpace", "Title must not be a single space!", "Titlul nu poate fi un singur spațiu!"),
    ("titleTooShort", "Title must be at least #value characters!", "Titlul trebuie să aibă cel puțin #value caractere!"),
    ("titleTooLong", "Title must be at most #value characters!", "Titlul poate avea cel mult #value caractere!"),
    ("contentEmpty", "Content must not be empty!", "Conținutul nu poate fi gol!"),
    ("contentSpace", "Content must not start with a space!", "Conținutul nu poate începe cu un spațiu!"),
    ("contentTooShort", "Content must be at least #value characters!", "Conținutul trebuie să aibă cel puțin #value caractere!"),
    ("contentTooLong", "Content must be at most #value characters!", "Conținutul poate avea cel mult #value caractere!"),
    ("forbiddenCharacter", "Text must not contain '|' or line breaks!", "Textul nu poate conține '|' sau rânduri noi!"),
    (
        "dateFormat",
        "Invalid date format: must be in format dd.mm.yyyy hh:mm!",
        "Format de dată invalid: trebuie să fie zz.ll.aaaa hh:mm!",
    ),
    ("dayRange", "Day must be between 1 and 31!", "Ziua trebuie să fie între 1 și 31!"),
    ("monthRange", "Month must be between 1 and 12!", "Luna trebuie să fie între 1 și 12!"),
    ("hourRange", "Hour must be between 0 and 23!", "Ora trebuie să fie între 0 și 23!"),
    ("minuteRange", "Minute must be between 0 and 59!", "Minutul trebuie să fie între 0 și 59!"),
    ("yearRange", "Year must be between 1900 and the current year!", "Anul trebuie să fie între 1900 și anul curent!"),
    ("hourInFuture", "Hour must not be later than the current hour!", "Ora nu poate fi după ora curentă!"),
    ("minuteInFuture", "Minute must not be later than the current minute!", "Minutul nu poate fi după minutul curent!"),
    ("dayInFuture", "Day must not be later than today!", "Ziua nu poate fi după ziua de azi!"),
    ("monthInFuture", "Month must not be later than the current month!", "Luna nu poate fi după luna curentă!"),
];

/// The bundled table as `(key, values in locale order)` rows.
pub fn default_table() -> Vec<(String, Vec<String>)> {
    TABLE
        .iter()
        .map(|&(key, en, ro)| {
            let mut values = vec![String::new(); Locale::all().len()];
            values[Locale::English.index()] = en.to_string();
            values[Locale::Romanian.index()] = ro.to_string();
            (key.to_string(), values)
        })
        .collect()
}
