// SPDX-License-Identifier: PMPL-1.0-or-later

//! Log setup.
//!
//! The terminal belongs to the menu, so events go to `notedeck.log` in the
//! data directory. `RUST_LOG` overrides the default `info` filter.

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "notedeck.log";

/// Install the global subscriber writing to `dir/notedeck.log`.
///
/// Returns the log path. Fails if the file cannot be opened or a
/// subscriber is already installed.
pub fn init(dir: &Path) -> Result<PathBuf> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)
        .with_context(|| format!("opening log file in {}", dir.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(appender)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("installing log subscriber: {}", err))?;

    Ok(dir.join(LOG_FILE))
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
