use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The view mode of the page hosting the registration form.
///
/// The form starts out in `Register`, and asks its parent to switch to
/// `Complete` once a submission succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Register,
    Complete,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "register" => Ok(Mode::Register),
            "complete" => Ok(Mode::Complete),
            _ => Err(format!("Invalid Mode: {s}")),
        }
    }
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Register => "register",
            Mode::Complete => "complete",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
