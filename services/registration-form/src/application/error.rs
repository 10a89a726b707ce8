use common::err_context::ErrorContext;
use std::fmt;

use crate::domain::name_pattern::Error as PatternError;

#[derive(Debug)]
pub enum Error {
    Pattern {
        context: String,
        source: PatternError,
    },
    Io {
        context: String,
        source: std::io::Error,
    },
    Json {
        context: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pattern { context, source } => {
                write!(fmt, "Name Pattern Error: {context} | {source}")
            }
            Error::Io { context, source } => {
                write!(fmt, "IO Error: {context} | {source}")
            }
            Error::Json { context, source } => {
                write!(fmt, "JSON Error: {context} | {source}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<ErrorContext<PatternError>> for Error {
    fn from(err: ErrorContext<PatternError>) -> Self {
        Error::Pattern {
            context: err.0,
            source: err.1,
        }
    }
}

impl From<ErrorContext<std::io::Error>> for Error {
    fn from(err: ErrorContext<std::io::Error>) -> Self {
        Error::Io {
            context: err.0,
            source: err.1,
        }
    }
}

impl From<ErrorContext<serde_json::Error>> for Error {
    fn from(err: ErrorContext<serde_json::Error>) -> Self {
        Error::Json {
            context: err.0,
            source: err.1,
        }
    }
}
