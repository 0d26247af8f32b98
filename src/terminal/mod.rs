// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal driver consumed by the menu engine

mod scripted;

pub use scripted::ScriptedTerminal;

use crate::types::Color;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    style::{self, Attribute, Print, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{self, stdin, stdout, BufRead, Stdout, Write};

pub trait Terminal {
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Show `prompt` and block until a key is pressed.
    fn pause(&mut self, prompt: &str) -> io::Result<()>;

    /// Block until a key is pressed and return it.
    fn read_key(&mut self) -> io::Result<KeyCode>;

    /// Read one line of input without its line terminator.
    fn read_line(&mut self) -> io::Result<String>;

    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write `text` in bold. Only the weight changes; the foreground color
    /// stays as set.
    fn write_bold(&mut self, text: &str) -> io::Result<()>;

    fn set_foreground_color(&mut self, color: Color) -> io::Result<()>;
}

/// Drives the real terminal. Raw mode is only held while waiting for a
/// single key, so line input keeps the usual echo and editing.
pub struct CrosstermTerminal {
    out: Stdout,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self { out: stdout() }
    }

    fn wait_for_key(&mut self) -> io::Result<KeyCode> {
        terminal::enable_raw_mode()?;
        let result = loop {
            match event::read() {
                Ok(Event::Key(KeyEvent { code, kind, .. })) if kind != KeyEventKind::Release => {
                    break Ok(code)
                }
                Ok(_) => continue,
                Err(err) => break Err(err),
            }
        };
        terminal::disable_raw_mode()?;
        result
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, style::ResetColor);
    }
}

impl Terminal for CrosstermTerminal {
    fn clear_screen(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }

    fn pause(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        self.wait_for_key()?;
        writeln!(self.out)?;
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<KeyCode> {
        self.out.flush()?;
        self.wait_for_key()
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.out.flush()?;
        let mut line = String::new();
        if stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed",
            ));
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    fn write_bold(&mut self, text: &str) -> io::Result<()> {
        execute!(
            self.out,
            SetAttribute(Attribute::Bold),
            Print(text),
            SetAttribute(Attribute::NormalIntensity)
        )
    }

    fn set_foreground_color(&mut self, color: Color) -> io::Result<()> {
        execute!(self.out, SetForegroundColor(console_color(color)))
    }
}

fn console_color(color: Color) -> style::Color {
    match color {
        Color::Red => style::Color::Red,
        Color::Green => style::Color::Green,
        Color::Blue => style::Color::Blue,
        Color::Yellow => style::Color::Yellow,
        Color::White => style::Color::White,
    }
}
