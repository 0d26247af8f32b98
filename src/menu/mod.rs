// SPDX-License-Identifier: PMPL-1.0-or-later

//! Keyboard-driven menu engine.
//!
//! Screens are kept on an explicit stack of [`Frame`]s. Each iteration
//! rebuilds the top frame's [`Menu`] from the session, renders it, waits
//! for one key and applies the resulting transition:
//!
//! * move up/down: wrap the selection and re-render
//! * activate: run the entry's [`Action`]; a sub-menu pushes a frame, a
//!   leaf action then stays or pops according to [`AfterActivate`]
//!
//! The root frame is never popped; the only way out is the exit action.

mod actions;
mod input;
mod screens;

pub use actions::{activate, Action, DateSource, NoteDraft, Outcome};
pub use input::{prompt_optional, prompt_required};
pub use screens::{build, Screen};

use crate::i18n::TranslationStore;
use crate::session::Session;
use crate::terminal::Terminal;
use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use std::io;
use tracing::debug;

/// Title shown when a menu's own title key resolves to nothing.
pub const ROOT_TITLE_KEY: &str = "firstMenuTitle";
/// Instructions shown when a menu's own instructions key resolves to nothing.
pub const ROOT_INSTRUCTIONS_KEY: &str = "firstMenuIndication";

/// What happens to the current screen once a leaf action finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterActivate {
    StayOnScreen,
    ReturnToParent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    /// Shown as-is (note captions).
    Literal(String),
    /// The entry key, resolved on every render.
    Translated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub key: String,
    pub label: Label,
    pub action: Action,
    pub after: AfterActivate,
}

impl MenuEntry {
    pub fn translated(key: impl Into<String>, action: Action, after: AfterActivate) -> Self {
        Self {
            key: key.into(),
            label: Label::Translated,
            action,
            after,
        }
    }

    pub fn literal(
        key: impl Into<String>,
        caption: impl Into<String>,
        action: Action,
        after: AfterActivate,
    ) -> Self {
        Self {
            key: key.into(),
            label: Label::Literal(caption.into()),
            action,
            after,
        }
    }

    pub fn display_label(&self, translations: &TranslationStore) -> String {
        match &self.label {
            Label::Literal(caption) => caption.clone(),
            Label::Translated => translations.resolve(&self.key, false),
        }
    }
}

/// One screen: a title, its entries and an instructions line.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub title_key: &'static str,
    pub instructions_key: &'static str,
    pub entries: Vec<MenuEntry>,
}

/// A screen on the navigation stack and its selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub screen: Screen,
    pub selected: usize,
}

impl Frame {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            selected: 0,
        }
    }

    /// Select the previous entry, wrapping to the last.
    pub fn move_up(&mut self, entry_count: usize) {
        if entry_count == 0 {
            return;
        }
        self.selected = (self.selected.min(entry_count - 1) + entry_count - 1) % entry_count;
    }

    /// Select the next entry, wrapping to the first.
    pub fn move_down(&mut self, entry_count: usize) {
        if entry_count == 0 {
            return;
        }
        self.selected = (self.selected.min(entry_count - 1) + 1) % entry_count;
    }

    /// Pull the selection back inside a menu that shrank.
    pub fn clamp(&mut self, entry_count: usize) {
        self.selected = self.selected.min(entry_count.saturating_sub(1));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Activate,
}

impl Command {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Command::Up),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Command::Down),
            KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => Some(Command::Activate),
            _ => None,
        }
    }
}

/// Whether the engine keeps running after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct MenuEngine {
    stack: Vec<Frame>,
}

impl Default for MenuEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuEngine {
    /// An engine sitting on the root menu.
    pub fn new() -> Self {
        Self {
            stack: vec![Frame::new(Screen::Root)],
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn current(&self) -> &Frame {
        &self.stack[self.stack.len() - 1]
    }

    /// Render and handle keys until the exit action runs.
    pub fn run(&mut self, session: &mut Session, term: &mut dyn Terminal) -> Result<()> {
        while self.step(session, term)? == Flow::Continue {}
        Ok(())
    }

    /// Render the top frame, wait for one key and apply it.
    pub fn step(&mut self, session: &mut Session, term: &mut dyn Terminal) -> Result<Flow> {
        let top = self.stack.len() - 1;
        let menu = build(&self.stack[top].screen, session);
        self.stack[top].clamp(menu.entries.len());

        render(&menu, self.stack[top].selected, &session.translations, term)
            .context("rendering menu")?;
        let key = term.read_key().context("reading key")?;

        match Command::from_key(key) {
            Some(Command::Up) => self.stack[top].move_up(menu.entries.len()),
            Some(Command::Down) => self.stack[top].move_down(menu.entries.len()),
            Some(Command::Activate) => {
                let entry = &menu.entries[self.stack[top].selected];
                debug!(key = %entry.key, depth = self.stack.len(), "activating entry");
                match activate(&entry.action, session, term)? {
                    Outcome::Exit => return Ok(Flow::Exit),
                    Outcome::Push(screen) => self.stack.push(Frame::new(screen)),
                    Outcome::Done => {
                        if entry.after == AfterActivate::ReturnToParent && self.stack.len() > 1 {
                            self.stack.pop();
                        }
                    }
                }
            }
            None => {}
        }
        Ok(Flow::Continue)
    }
}

/// Draw `menu` with the entry at `selected` highlighted.
pub fn render(
    menu: &Menu,
    selected: usize,
    translations: &TranslationStore,
    term: &mut dyn Terminal,
) -> io::Result<()> {
    term.clear_screen()?;

    let title = resolve_or_root(translations, menu.title_key, ROOT_TITLE_KEY);
    term.write(&format!("---- {} ----\n", title))?;

    for (index, entry) in menu.entries.iter().enumerate() {
        let label = entry.display_label(translations);
        if index == selected {
            term.write(" ")?;
            term.write_bold(&format!(">> {} <<", label))?;
            term.write(" \n")?;
        } else {
            term.write(&format!(" > {} < \n", label))?;
        }
    }

    let instructions = resolve_or_root(translations, menu.instructions_key, ROOT_INSTRUCTIONS_KEY);
    term.write(&format!("{}\n", instructions))?;
    Ok(())
}

fn resolve_or_root(translations: &TranslationStore, key: &str, root_key: &str) -> String {
    match translations.get(key) {
        Some(text) if !text.trim().is_empty() => text.trim_end_matches('\n').to_string(),
        _ => translations.resolve(root_key, false),
    }
}
