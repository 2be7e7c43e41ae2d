//! CLI command implementations
//!
//! Every command loads the configuration first, installs the logger, then
//! builds a `RecordStore` from it. One-shot commands write to stdout and
//! exit; `shell` runs the interactive menu on stdin/stdout.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::json;

use crate::observability::JsonLogger;
use crate::store::{RecordStore, SortDirection, SortSpec};

use super::args::{Command, SortField};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_response;
use super::render::render_list;
use super::shell::Shell;

const DEFAULT_CONFIG: &str = "./rosterdb.json";

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    let command = cli.command.unwrap_or(Command::Shell {
        config: DEFAULT_CONFIG.into(),
        load: None,
    });
    run_command(command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Shell { config, load } => shell(&config, load.as_deref()),
        Command::Show {
            config,
            file,
            sort,
            desc,
        } => show(&config, &file, sort, desc),
        Command::Check { config, file } => check(&config, &file),
        Command::Init { config } => init(&config),
    }
}

/// Interactive menu on stdin/stdout
pub fn shell(config_path: &Path, load: Option<&Path>) -> CliResult<()> {
    let config = boot(config_path)?;
    let mut store = RecordStore::with_options(config.store_options());

    if let Some(path) = load {
        let report = store.load(path)?;
        println!(
            "Loaded {} of {} records from {}",
            report.accepted,
            report.entries_read,
            path.display()
        );
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(store, config, stdin.lock(), stdout.lock());
    shell.run()
}

/// Print the records of a file, optionally sorted
pub fn show(config_path: &Path, file: &Path, sort: Option<SortField>, desc: bool) -> CliResult<()> {
    let config = boot(config_path)?;
    let mut store = RecordStore::with_options(config.store_options());
    store.load(file)?;

    if let Some(field) = sort {
        store.sort(SortSpec {
            key: field.into(),
            direction: SortDirection::from_ascending(!desc),
        });
    }

    print!("{}", render_list(store.records()));
    Ok(())
}

/// Load a file and print the report
pub fn check(config_path: &Path, file: &Path) -> CliResult<()> {
    let config = boot(config_path)?;
    let mut store = RecordStore::with_options(config.store_options());
    let report = store.load(file)?;

    write_response(json!({
        "file": file.display().to_string(),
        "next_id": store.next_id(),
        "report": serde_json::to_value(&report)?,
    }))
}

/// Write a default configuration file
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_exists(config_path.display()));
    }

    let content = serde_json::to_string_pretty(&Config::default())?;
    fs::write(config_path, content + "\n").map_err(|e| {
        CliError::config_error(format!("Failed to write {}: {}", config_path.display(), e))
    })?;

    write_response(json!({"config": config_path.display().to_string()}))
}

fn boot(config_path: &Path) -> CliResult<Config> {
    let config = Config::load(config_path)?;
    JsonLogger::init(config.level_filter()?)
        .map_err(|e| CliError::logger_error(e.to_string()))?;
    Ok(config)
}
