// src/logging.rs
use std::{fmt, io::Write};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Plain stderr logger printing `[level] message` lines such as `[warn] ...`.
///
/// Records from our own crates pass at the configured level; dependencies are
/// held back to warnings so `--debug` stays readable.
struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    fn is_own(target: &str) -> bool {
        target.starts_with("mx_numplan")
    }
}

const fn tag(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warn",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}

fn write_line<W: Write>(
    out: &mut W,
    level: Level,
    args: &fmt::Arguments<'_>,
) -> std::io::Result<()> {
    writeln!(out, "[{}] {args}", tag(level))
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        let limit = if Self::is_own(metadata.target()) {
            self.level
        } else {
            self.level.min(LevelFilter::Warn)
        };
        metadata.level() <= limit
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let _ = write_line(&mut std::io::stderr().lock(), record.level(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the stderr logger. Later calls only move the global max level.
pub fn init(level: LevelFilter) {
    if log::set_boxed_logger(Box::new(StderrLogger { level })).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(level);
}
