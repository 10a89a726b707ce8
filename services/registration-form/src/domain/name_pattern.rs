use common::err_context::{ErrorContext, ErrorContextExt};
use regex::Regex;
use std::fmt;

/// Letters, combining marks, spaces, apostrophes and hyphens, at least one of them.
pub const DEFAULT_NAME_PATTERN: &str = r"^[\p{L}\p{M}' \-]+$";

/// The pattern a user name must match to be considered well formed.
///
/// The pattern always applies to the whole value: whatever the source
/// expression, it is compiled anchored at both ends.
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    regex: Regex,
}

impl NamePattern {
    /// Compiles `source` into a `NamePattern`.
    pub fn parse(source: &str) -> Result<NamePattern, Error> {
        let regex = Regex::new(&format!("^(?:{source})$"))
            .context(format!("Compiling name pattern '{source}'"))?;
        Ok(NamePattern {
            source: source.to_string(),
            regex,
        })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Default for NamePattern {
    fn default() -> Self {
        // The default pattern is a constant, covered by tests.
        NamePattern::parse(DEFAULT_NAME_PATTERN).expect("default name pattern")
    }
}

impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl TryFrom<String> for NamePattern {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        NamePattern::parse(&value)
    }
}

#[derive(Debug)]
pub enum Error {
    InvalidPattern {
        context: String,
        source: regex::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPattern { context, source } => {
                write!(fmt, "Invalid name pattern: {context} | {source}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<ErrorContext<regex::Error>> for Error {
    fn from(err: ErrorContext<regex::Error>) -> Self {
        Error::InvalidPattern {
            context: err.0,
            source: err.1,
        }
    }
}
