use config::ConfigError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The files or environment of one of the settings sections could not be read.
    Sources {
        root_dir: PathBuf,
        sections: Vec<String>,
        profile: Option<String>,
        source: ConfigError,
    },
    /// A `key=value` override is not a valid TOML assignment.
    Override {
        assignment: String,
        source: ConfigError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Sources {
                root_dir,
                sections,
                profile,
                source,
            } => {
                write!(
                    fmt,
                    "Could not load registration settings [{}] from {}",
                    sections.join(", "),
                    root_dir.display()
                )?;
                if let Some(profile) = profile {
                    write!(fmt, " with profile '{profile}'")?;
                }
                write!(fmt, " | {source}")
            }
            Error::Override { assignment, source } => {
                write!(fmt, "Invalid setting override '{assignment}' | {source}")
            }
        }
    }
}

impl std::error::Error for Error {}
