use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "phonebook")]
#[command(version)]
#[command(about = "Terminal phonebook backed by a remote persons collection", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: <config dir>/phonebook/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the server base URL from the config
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Run a single operation instead of the interactive UI
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print every entry, optionally filtered by name
    List {
        /// Case-insensitive name substring
        #[arg(long)]
        filter: Option<String>,
    },
    /// Add an entry, or replace the number of an existing one
    Add {
        name: String,
        number: String,
        /// Replace without asking
        #[arg(long, short)]
        yes: bool,
    },
    /// Delete the entry with this exact name
    Delete {
        name: String,
        /// Delete without asking
        #[arg(long, short)]
        yes: bool,
    },
}

impl Command {
    /// True when prompts should be answered "yes" without asking.
    pub fn assume_yes(&self) -> bool {
        match self {
            Command::List { .. } => true,
            Command::Add { yes, .. } | Command::Delete { yes, .. } => *yes,
        }
    }
}

impl Cli {
    /// Load the config named by `--config` (or the default one) and apply
    /// `--url`.
    ///
    /// A missing default file yields defaults; a missing explicit file is
    /// an error.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) if !path.exists() => {
                return Err(ConfigError::ReadError {
                    path: path.clone(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "file does not exist",
                    ),
                });
            }
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(url) = &self.url {
            config.server.base_url = url.clone();
            config.validate()?;
        }
        Ok(config)
    }
}
