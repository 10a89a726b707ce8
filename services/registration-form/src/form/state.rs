use serde::{Deserialize, Serialize};

use super::event::FormEvent;
use crate::domain::{Mode, NamePattern};

/// The current contents of the four form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Editing,
    Submitted,
}

/// Something the host of the form must do as a result of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Ask the parent view to switch to the given mode.
    SetMode(Mode),
}

/// The result of applying an event to a snapshot of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub form: RegistrationForm,
    pub effect: Option<Effect>,
}

/// An immutable snapshot of the registration form.
///
/// Snapshots only change through [`RegistrationForm::reduce`], which returns
/// a new snapshot and leaves the current one untouched. The error flags are
/// a function of the field values at the time of the last event which
/// evaluated them:
/// - `name_error` is set by a name change, iff the new name fails the pattern,
/// - `repeat_password_error` is set by a submission with mismatched
///   passwords, and cleared by any password edit or a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    fields: FormFields,
    name_error: bool,
    repeat_password_error: bool,
    phase: Phase,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn name_error(&self) -> bool {
        self.name_error
    }

    pub fn repeat_password_error(&self) -> bool {
        self.repeat_password_error
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn passwords_match(&self) -> bool {
        self.fields.password == self.fields.repeat_password
    }

    /// Applies `event` to this snapshot.
    pub fn reduce(&self, event: &FormEvent, pattern: &NamePattern) -> Transition {
        let mut form = self.clone();
        let mut effect = None;

        match event {
            FormEvent::NameChanged { value } => {
                form.name_error = !pattern.matches(value);
                form.fields.name = value.clone();
                form.phase = Phase::Editing;
            }
            FormEvent::EmailChanged { value } => {
                form.fields.email = value.clone();
                form.phase = Phase::Editing;
            }
            FormEvent::PasswordChanged { value } => {
                form.fields.password = value.clone();
                form.repeat_password_error = false;
                form.phase = Phase::Editing;
            }
            FormEvent::RepeatPasswordChanged { value } => {
                form.fields.repeat_password = value.clone();
                form.repeat_password_error = false;
                form.phase = Phase::Editing;
            }
            FormEvent::Submit => {
                if form.passwords_match() {
                    form.repeat_password_error = false;
                    form.phase = Phase::Submitted;
                    effect = Some(Effect::SetMode(Mode::Complete));
                } else {
                    form.repeat_password_error = true;
                }
            }
        }

        Transition { form, effect }
    }
}
