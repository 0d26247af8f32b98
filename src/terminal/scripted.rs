// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal replaying queued keys and lines and recording everything shown.

use super::Terminal;
use crate::types::Color;
use crossterm::event::KeyCode;
use std::collections::VecDeque;
use std::io;

#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    keys: VecDeque<KeyCode>,
    lines: VecDeque<String>,
    output: String,
    clears: usize,
    pauses: usize,
    color: Option<Color>,
    bold: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue menu keys given as characters, e.g. `"sse"`.
    pub fn keys(mut self, keys: &str) -> Self {
        self.keys.extend(keys.chars().map(KeyCode::Char));
        self
    }

    pub fn key(mut self, key: KeyCode) -> Self {
        self.keys.push_back(key);
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push_back(line.into());
        self
    }

    pub fn push_keys(&mut self, keys: &str) {
        self.keys.extend(keys.chars().map(KeyCode::Char));
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Output written since the last clear.
    pub fn screen(&self) -> &str {
        &self.output[self.output.rfind('\u{c}').map_or(0, |at| at + 1)..]
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn pauses(&self) -> usize {
        self.pauses
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Every piece of text written in bold, in order.
    pub fn bold(&self) -> &[String] {
        &self.bold
    }

    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn remaining_lines(&self) -> usize {
        self.lines.len()
    }
}

fn exhausted(what: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("script has no more {}", what),
    )
}

impl Terminal for ScriptedTerminal {
    fn clear_screen(&mut self) -> io::Result<()> {
        self.clears += 1;
        // Form feed marks screen boundaries in the recorded output.
        self.output.push('\u{c}');
        Ok(())
    }

    fn pause(&mut self, prompt: &str) -> io::Result<()> {
        self.pauses += 1;
        self.output.push_str(prompt);
        self.output.push('\n');
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<KeyCode> {
        self.keys.pop_front().ok_or_else(|| exhausted("keys"))
    }

    fn read_line(&mut self) -> io::Result<String> {
        let line = self.lines.pop_front().ok_or_else(|| exhausted("lines"))?;
        self.output.push_str(&line);
        self.output.push('\n');
        Ok(line)
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn write_bold(&mut self, text: &str) -> io::Result<()> {
        self.bold.push(text.to_string());
        self.output.push_str(text);
        Ok(())
    }

    fn set_foreground_color(&mut self, color: Color) -> io::Result<()> {
        self.color = Some(color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_is_output_after_last_clear() {
        let mut term = ScriptedTerminal::new();
        term.write("first").unwrap();
        term.clear_screen().unwrap();
        term.write("second").unwrap();
        assert_eq!(term.screen(), "second");
        assert_eq!(term.clears(), 1);
    }

    #[test]
    fn exhausted_script_is_an_error() {
        let mut term = ScriptedTerminal::new().keys("w");
        assert_eq!(term.read_key().unwrap(), KeyCode::Char('w'));
        assert_eq!(
            term.read_key().unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }
}
