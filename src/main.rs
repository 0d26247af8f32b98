// SPDX-License-Identifier: PMPL-1.0-or-later

//! notedeck: keyboard-driven console notes

use anyhow::Result;
use clap::Parser;
use colored::*;
use notedeck::error::{StartupError, TranslationLoadError};
use notedeck::logging;
use notedeck::menu::MenuEngine;
use notedeck::notes::OsIdSource;
use notedeck::session::{Session, SystemClock};
use notedeck::storage::FileStore;
use notedeck::terminal::{CrosstermTerminal, Terminal};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "notedeck")]
#[command(version)]
#[command(about = "Keyboard-driven console notes")]
#[command(long_about = None)]
struct Cli {
    /// Directory holding notes.txt, config.txt and translations.txt
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Write the bundled translations.txt into the data directory and exit
    #[arg(long)]
    write_translations: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = logging::init(&cli.data_dir) {
        eprintln!("{} logging disabled: {:#}", "warning:".yellow().bold(), err);
    }

    let store = FileStore::new(&cli.data_dir);

    if cli.write_translations {
        let path = store.write_default_translations()?;
        println!("Translations written to: {}", path.display());
        return Ok(());
    }

    let mut session = match Session::open(store, Box::new(OsIdSource), Box::new(SystemClock)) {
        Ok(session) => session,
        Err(err) => {
            error!(error = %err, "startup failed");
            eprintln!("{} {}", "error:".red().bold(), err);
            if let StartupError::Translations(TranslationLoadError::Missing(_)) = err {
                eprintln!("hint: run `notedeck --write-translations` to create it");
            }
            process::exit(1);
        }
    };

    let mut term = CrosstermTerminal::new();
    term.set_foreground_color(session.config().color)?;

    MenuEngine::new().run(&mut session, &mut term)?;
    info!("session closed");
    Ok(())
}
