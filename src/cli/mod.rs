//! CLI module for rosterdb
//!
//! Provides command-line interface for:
//! - shell: interactive menu over an in-memory store
//! - show: print the records of a file
//! - check: report on the entries of a file
//! - init: write a default configuration file

mod args;
mod commands;
mod config;
mod errors;
mod io;
mod render;
mod shell;

pub use args::{Cli, Command, SortField};
pub use commands::{check, init, run, run_command, shell, show};
pub use config::{Config, EditValidationMode};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_response, Prompter};
pub use render::{render_list, render_table};
pub use shell::{Shell, SAMPLE_RECORDS};
