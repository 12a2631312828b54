//! Logging init for the verifier CLI.
//!
//! Reports go to stdout; diagnostics go through `tracing` to a log file
//! under the XDG state dir so they never interleave with report text.
//! `RUST_LOG` overrides the default filter.

use anyhow::Result;
use std::fs;
use std::io;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,cemv=debug";

/// Log sink: the state-dir file, or stderr when the file handle cannot be
/// cloned for a writer.
enum LogSink {
    File(fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct StateFileWriter(fs::File);

impl<'a> MakeWriter<'a> for StateFileWriter {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize logging to `cemv.log` under the XDG state dir
/// (`~/.local/state/cemv/` by default).
///
/// Returns Err when the state dir is unusable; the caller should then use
/// [`init_logging_stderr`] instead of aborting.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cemv")?;
    let log_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("cemv.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(StateFileWriter(file)))
        .with_ansi(false)
        .init();

    tracing::info!("cemv logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Stderr-only fallback for when the log file cannot be opened.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
