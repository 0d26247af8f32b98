// SPDX-License-Identifier: PMPL-1.0-or-later

//! Validated line prompts

use crate::i18n::TranslationStore;
use crate::terminal::Terminal;
use crate::validate::ValidationResult;
use std::io;
use tracing::debug;

/// Ask until `validator` accepts the answer.
pub fn prompt_required(
    term: &mut dyn Terminal,
    translations: &TranslationStore,
    message: &str,
    validator: impl Fn(&str) -> ValidationResult,
) -> io::Result<String> {
    loop {
        if let Some(answer) = ask(term, translations, message, &validator, false)? {
            return Ok(answer);
        }
    }
}

/// Like [`prompt_required`], but an empty line returns `None`.
pub fn prompt_optional(
    term: &mut dyn Terminal,
    translations: &TranslationStore,
    message: &str,
    validator: impl Fn(&str) -> ValidationResult,
) -> io::Result<Option<String>> {
    ask(term, translations, message, &validator, true)
}

/// Read one answer, re-asking after every rejection. `Ok(None)` is only
/// returned when `allow_empty` is set and the line was empty.
fn ask(
    term: &mut dyn Terminal,
    translations: &TranslationStore,
    message: &str,
    validator: &dyn Fn(&str) -> ValidationResult,
    allow_empty: bool,
) -> io::Result<Option<String>> {
    term.write(message)?;
    loop {
        let line = term.read_line()?;
        if allow_empty && line.is_empty() {
            return Ok(None);
        }
        match validator(&line) {
            ValidationResult::Accepted => return Ok(Some(line)),
            ValidationResult::Rejected(reason) => {
                debug!(reason = reason.key(), "input rejected");
                term.clear_screen()?;
                term.write(&translations.resolve("invalidInput", true))?;
                term.write(&reason.localize(translations))?;
                term.write(message)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::storage::MemoryStore;
    use crate::terminal::ScriptedTerminal;
    use crate::types::Config;
    use crate::validate::validate_title;

    fn translations() -> TranslationStore {
        TranslationStore::load(Box::new(MemoryStore::with_default_translations()), Locale::English)
            .unwrap()
    }

    #[test]
    fn rejected_answer_is_explained_and_asked_again() {
        let store = translations();
        let config = Config::default();
        let mut term = ScriptedTerminal::new().line("ab").line("Groceries");

        let answer = prompt_required(&mut term, &store, "Title?\n", |candidate| {
            validate_title(candidate, &config)
        })
        .unwrap();

        assert_eq!(answer, "Groceries");
        assert!(term.output().contains("Invalid input!"));
        assert!(term
            .output()
            .contains("Title must be at least 3 characters!"));
        assert_eq!(term.output().matches("Title?").count(), 2);
    }

    #[test]
    fn optional_prompt_returns_none_on_empty_line() {
        let store = translations();
        let config = Config::default();
        let mut term = ScriptedTerminal::new().line("");

        let answer = prompt_optional(&mut term, &store, "New title?\n", |candidate| {
            validate_title(candidate, &config)
        })
        .unwrap();

        assert_eq!(answer, None);
        assert_eq!(term.remaining_lines(), 0);
    }

    #[test]
    fn optional_prompt_cancels_after_a_rejection() {
        let store = translations();
        let config = Config::default();
        let mut term = ScriptedTerminal::new().line("a|b").line("");

        let answer = prompt_optional(&mut term, &store, "New title?\n", |candidate| {
            validate_title(candidate, &config)
        })
        .unwrap();

        assert_eq!(answer, None);
        assert!(term.output().contains("must not contain '|'"));
    }

    #[test]
    fn required_prompt_rejects_empty_line() {
        let store = translations();
        let config = Config::default();
        let mut term = ScriptedTerminal::new().line("").line("Valid");

        let answer = prompt_required(&mut term, &store, "Title?\n", |candidate| {
            validate_title(candidate, &config)
        })
        .unwrap();

        assert_eq!(answer, "Valid");
        assert!(term.output().contains("Title must not be empty!"));
    }
}
