use common::err_context::ErrorContextExt;
use common::settings::FormSettings;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use tracing::info;

use super::Error;
use crate::domain::{Mode, NamePattern};
use crate::form::{ConstraintValidity, FormEvent, Outcome, RegistrationController};

/// The state of the form after one replayed event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayStep {
    pub event: String,
    pub outcome: Outcome,
    pub name_error: bool,
    pub repeat_password_error: bool,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    /// Every mode change requested by the form, in order.
    pub modes: Vec<Mode>,
}

/// Reads a JSON array of form events.
pub fn load_events(path: &Path) -> Result<Vec<FormEvent>, Error> {
    let content = fs::read_to_string(path)
        .context(format!("Could not read events from {}", path.display()))?;
    let events = serde_json::from_str(&content)
        .context(format!("Could not parse events from {}", path.display()))?;
    Ok(events)
}

/// Runs `events` through a fresh registration form, validated the way a
/// browser would validate it.
pub fn replay(settings: &FormSettings, events: Vec<FormEvent>) -> Result<ReplayReport, Error> {
    let pattern = NamePattern::parse(&settings.name_pattern)
        .context("Could not build the registration form")?;

    let modes = RefCell::new(Vec::new());
    let mut steps = Vec::with_capacity(events.len());
    {
        let mut controller = RegistrationController::new(
            pattern,
            ConstraintValidity,
            |mode: Mode| modes.borrow_mut().push(mode),
        );

        for event in events {
            let kind = event.kind().to_string();
            let outcome = controller.dispatch(event);
            let form = controller.form();
            steps.push(ReplayStep {
                event: kind,
                outcome,
                name_error: form.name_error(),
                repeat_password_error: form.repeat_password_error(),
                submit_enabled: controller.submit_enabled(),
            });
        }
    }

    let modes = modes.into_inner();
    info!(steps = steps.len(), modes = modes.len(), "Replay complete");

    Ok(ReplayReport { steps, modes })
}
