//! Structured JSON logger
//!
//! Backend for the `log` facade:
//! - One log line = one JSON object
//! - Keys in fixed order: event, severity, then the rest alphabetically
//! - The log target is the event name
//! - Synchronous, flushed per line

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Severity label for a log level
pub fn severity_label(level: Level) -> &'static str {
    match level {
        Level::Trace => "TRACE",
        Level::Debug => "DEBUG",
        Level::Info => "INFO",
        Level::Warn => "WARN",
        Level::Error => "ERROR",
    }
}

/// A `log::Log` implementation that writes JSON lines.
pub struct JsonLogger {
    level: LevelFilter,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonLogger {
    pub fn new(level: LevelFilter, writer: Box<dyn Write + Send>) -> Self {
        Self {
            level,
            writer: Mutex::new(writer),
        }
    }

    /// Logger writing to stderr, keeping stdout free for program output
    pub fn stderr(level: LevelFilter) -> Self {
        Self::new(level, Box::new(io::stderr()))
    }

    /// Installs a stderr logger as the global `log` backend.
    ///
    /// Fails if a logger was already installed.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::stderr(level)))?;
        log::set_max_level(level);
        Ok(())
    }

    /// Renders one record as a JSON line, newline included.
    pub fn format_line(record: &Record<'_>, ts: &str) -> String {
        let mut output = String::with_capacity(128);

        output.push_str("{\"event\":");
        push_json_str(&mut output, record.target());
        output.push_str(",\"severity\":");
        push_json_str(&mut output, severity_label(record.level()));
        output.push_str(",\"message\":");
        push_json_str(&mut output, &record.args().to_string());
        output.push_str(",\"ts\":");
        push_json_str(&mut output, ts);
        output.push_str("}\n");

        output
    }
}

impl Log for JsonLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let line = Self::format_line(record, &ts);

        // Logging never fails the caller
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(line.as_bytes());
            let _ = writer.flush();
        }
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

fn push_json_str(output: &mut String, s: &str) {
    match serde_json::to_string(s) {
        Ok(quoted) => output.push_str(&quoted),
        Err(_) => output.push_str("\"\""),
    }
}
