//! Observability for rosterdb
//!
//! Library code logs through the `log` facade with an event name as the
//! target, e.g. `log::warn!(target: "LOAD_ENTRY_SKIPPED", ...)`. The CLI
//! installs [`JsonLogger`] once at startup; without it, log calls are
//! no-ops.
//!
//! ```ignore
//! use rosterdb::observability::JsonLogger;
//!
//! JsonLogger::init(log::LevelFilter::Info)?;
//! log::info!(target: "SHELL_STARTED", "ready");
//! ```

mod logger;

pub use logger::{severity_label, JsonLogger};
