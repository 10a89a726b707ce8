use std::{fmt, path::PathBuf};

use common::config::{self, merge_configuration};
use common::settings::Settings;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug)]
pub enum Error {
    Merging {
        context: String,
        source: config::Error,
    },
    Deserializing {
        context: String,
        source: ::config::ConfigError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Merging { context, source } => {
                write!(fmt, "Could not merge settings: {context} | {source}")
            }
            Error::Deserializing { context, source } => {
                write!(fmt, "Could not deserialize settings: {context} | {source}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, clap::Parser)]
#[clap(
    name = "registration-form",
    about = "Drives the registration form without a browser",
    version = VERSION,
    )]
pub struct Opts {
    /// Defines the config directory
    #[arg(
        value_parser = clap::value_parser!(PathBuf),
        short = 'c',
        long = "config-dir",
        default_value = "config"
    )]
    pub config_dir: PathBuf,

    /// Defines the run mode in {testing, dev, prod, ...}
    ///
    /// If no run mode is provided, a default behavior will be used.
    #[arg(short = 'm', long = "run-mode")]
    pub run_mode: Option<String>,

    /// Override settings values using key=value
    #[arg(short = 's', long = "setting")]
    pub settings: Vec<String>,

    #[clap(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum Command {
    /// Prints the merged configuration
    Config,
    /// Runs the events found in a JSON file through a registration form
    Replay {
        /// File holding a JSON array of form events
        #[arg(value_parser = clap::value_parser!(PathBuf))]
        file: PathBuf,
    },
}

impl TryInto<Settings> for Opts {
    type Error = Error;

    fn try_into(self) -> Result<Settings, Self::Error> {
        merge_configuration(
            self.config_dir.as_ref(),
            &["form", "tracing"],
            self.run_mode.as_deref(),
            "REGISTRATION",
            self.settings.clone(),
        )
        .map_err(|err| Error::Merging {
            context: "Registration Form Settings: Could not merge configuration".to_string(),
            source: err,
        })?
        .try_deserialize()
        .map_err(|err| Error::Deserializing {
            context: "Registration Form Settings: Could not deserialize configuration".to_string(),
            source: err,
        })
    }
}
