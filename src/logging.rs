//! Structured logging with tracing
//!
//! Line-based commands log to stderr so logs never interleave with game
//! output on stdout. The TUI owns the whole terminal, so while it runs logs
//! go to a file if one was given and are dropped otherwise.
//! `RUST_LOG` takes precedence over the level passed on the command line.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, fmt::writer::BoxMakeWriter};

/// Where log events are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Stderr,
    File(PathBuf),
    Discard,
}

impl LogOutput {
    /// Output for commands that print to stdout line by line
    #[must_use]
    pub fn for_console(file: Option<&Path>) -> Self {
        file.map_or(Self::Stderr, |path| Self::File(path.to_path_buf()))
    }

    /// Output for the TUI, which must never share the terminal with logs
    #[must_use]
    pub fn for_tui(file: Option<&Path>) -> Self {
        file.map_or(Self::Discard, |path| Self::File(path.to_path_buf()))
    }

    fn make_writer(&self) -> io::Result<BoxMakeWriter> {
        Ok(match self {
            Self::Stderr => BoxMakeWriter::new(io::stderr),
            Self::File(path) => BoxMakeWriter::new(Mutex::new(open_log_file(path)?)),
            Self::Discard => BoxMakeWriter::new(io::sink),
        })
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global tracing subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(level: &str, output: &LogOutput) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(*output == LogOutput::Stderr)
        .with_writer(output.make_writer()?)
        .compact()
        .try_init();
    Ok(())
}
