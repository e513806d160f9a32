//! Command-line interface definitions.
//!
//! The program has no subcommands: it starts straight into the interactive
//! menu. Flags only choose where configuration and data come from.

use std::path::PathBuf;

use clap::Parser;

/// Browse and register sakila countries, cities and addresses
#[derive(Parser, Debug)]
#[command(name = "sakila")]
#[command(version)]
pub struct Cli {
    /// Config file [default: ~/.sakila/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Database URL, overriding the config file
    #[arg(long, value_name = "URL")]
    pub database: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The config file to read: the one named on the command line, else `default`.
    #[must_use]
    pub fn config_path_or(&self, default: PathBuf) -> PathBuf {
        self.config.clone().unwrap_or(default)
    }

    /// A config file named on the command line must exist; the default one may not.
    #[must_use]
    pub fn config_required(&self) -> bool {
        self.config.is_some()
    }
}
