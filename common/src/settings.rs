use serde::{Deserialize, Serialize};

/// Settings for the registration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    /// Regular expression a name must match, anchored to the whole value.
    pub name_pattern: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracingSettings {
    /// Default filter directive, used when `RUST_LOG` is not set.
    pub level: String,
    /// Emit events as JSON instead of the human readable format.
    #[serde(default)]
    pub json: bool,
}

impl TracingSettings {
    /// Settings used by developer tooling, which does not read configuration files.
    pub fn dev() -> Self {
        TracingSettings {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub form: FormSettings,
    pub tracing: TracingSettings,
}
