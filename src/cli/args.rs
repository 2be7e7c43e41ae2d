//! CLI argument definitions using clap
//!
//! Commands:
//! - rosterdb [shell] [--config <path>] [--load <file>]
//! - rosterdb show --file <file> [--sort <key>] [--desc]
//! - rosterdb check --file <file>
//! - rosterdb init [--config <path>]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::store::SortKey;

/// rosterdb - keep a small list of people in a text file
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive menu (default)
    Shell {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterdb.json")]
        config: PathBuf,

        /// Record file to load before the menu opens
        #[arg(long)]
        load: Option<PathBuf>,
    },

    /// Print the records of a file and exit
    Show {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterdb.json")]
        config: PathBuf,

        /// Record file to read
        #[arg(long)]
        file: PathBuf,

        /// Sort before printing
        #[arg(long, value_enum)]
        sort: Option<SortField>,

        /// Sort in descending order
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// Validate a record file and print the load report as JSON
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterdb.json")]
        config: PathBuf,

        /// Record file to read
        #[arg(long)]
        file: PathBuf,
    },

    /// Write a configuration file with default values
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterdb.json")]
        config: PathBuf,
    },
}

/// Sort field accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Age,
    Salary,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Id => SortKey::Id,
            SortField::Name => SortKey::Name,
            SortField::Age => SortKey::Age,
            SortField::Salary => SortKey::Salary,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
