//! Logger setup.

use std::fs::File;
use std::path::Path;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use crate::error::CliError;

/// Map `-v` occurrences to a level. Warnings only by default.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Log to `log_file` when given, to stderr otherwise.
///
/// Stdout carries the plan, so terminal logging never goes there.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<(), CliError> {
    let level = level_for(verbosity);
    match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?,
    }
    Ok(())
}
