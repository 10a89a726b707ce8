use clap::Parser;
use std::fmt;

use common::err_context::{ErrorContext, ErrorContextExt};
use common::settings::Settings;
use common::tracing::init_tracing;
use registration::application::opts::{Command, Error as OptsError, Opts};
use registration::application::replay::{load_events, replay};
use registration::application::Error as ApplicationError;

#[derive(Debug)]
pub enum Error {
    Options {
        context: String,
        source: OptsError,
    },
    Application {
        context: String,
        source: ApplicationError,
    },
    Output {
        context: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Options { context, source } => {
                write!(fmt, "Options Error: {context} | {source}")
            }
            Error::Application { context, source } => {
                write!(fmt, "Registration Form Error: {context} | {source}")
            }
            Error::Output { context, source } => {
                write!(fmt, "Output Error: {context} | {source}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<ErrorContext<OptsError>> for Error {
    fn from(err: ErrorContext<OptsError>) -> Self {
        Error::Options {
            context: err.0,
            source: err.1,
        }
    }
}

impl From<ErrorContext<ApplicationError>> for Error {
    fn from(err: ErrorContext<ApplicationError>) -> Self {
        Error::Application {
            context: err.0,
            source: err.1,
        }
    }
}

impl From<ErrorContext<serde_json::Error>> for Error {
    fn from(err: ErrorContext<serde_json::Error>) -> Self {
        Error::Output {
            context: err.0,
            source: err.1,
        }
    }
}

fn main() -> Result<(), Error> {
    let opts = Opts::parse();

    let cmd = opts.cmd.clone();

    let settings: Settings = opts.try_into().context("Compiling Application Settings")?;

    init_tracing(settings.tracing.clone());

    match cmd {
        Command::Config => {
            let json = serde_json::to_string_pretty(&settings)
                .context("Serializing Application Settings")?;
            println!("{json}");
        }
        Command::Replay { file } => {
            let events = load_events(&file).context("Loading form events")?;
            let report = replay(&settings.form, events).context("Replaying form events")?;
            for step in &report.steps {
                let line = serde_json::to_string(step).context("Serializing replay step")?;
                println!("{line}");
            }
            for mode in &report.modes {
                let line = serde_json::json!({ "set_mode": mode });
                println!("{line}");
            }
        }
    }
    Ok(())
}
