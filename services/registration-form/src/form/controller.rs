use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::event::FormEvent;
use super::state::{Effect, RegistrationForm, Transition};
use super::validity::FormValiditySource;
use crate::domain::{Mode, NamePattern};

/// Receives the mode change requested by the form.
#[cfg_attr(test, mockall::automock)]
pub trait ModeSink {
    fn set_mode(&self, mode: Mode);
}

impl<F> ModeSink for F
where
    F: Fn(Mode),
{
    fn set_mode(&self, mode: Mode) {
        self(mode)
    }
}

/// What happened to an event dispatched to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A field was updated.
    Updated,
    /// The submission was aborted because the passwords differ.
    Mismatch,
    /// The submission succeeded and the mode change was requested.
    Completed,
    /// The submission was refused because the form is not valid.
    Blocked,
}

/// Holds the live state of one registration form instance, and connects the
/// pure transitions of [`RegistrationForm`] to its validity source and to
/// whoever wants to hear about mode changes.
pub struct RegistrationController<V, S> {
    form: RegistrationForm,
    pattern: NamePattern,
    validity: V,
    sink: S,
}

impl<V, S> RegistrationController<V, S>
where
    V: FormValiditySource,
    S: ModeSink,
{
    pub fn new(pattern: NamePattern, validity: V, sink: S) -> Self {
        RegistrationController {
            form: RegistrationForm::new(),
            pattern,
            validity,
            sink,
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// Replaces the name pattern. Field values and errors are kept, the new
    /// pattern applies from the next name change.
    pub fn set_pattern(&mut self, pattern: NamePattern) {
        self.pattern = pattern;
    }

    /// Evaluated on every call, the result is never cached.
    pub fn submit_enabled(&self) -> bool {
        self.validity.check_validity(self.form.fields())
    }

    pub fn dispatch(&mut self, event: FormEvent) -> Outcome {
        let is_submit = matches!(event, FormEvent::Submit);

        if is_submit && !self.submit_enabled() {
            debug!("Submission refused: the form is not valid");
            return Outcome::Blocked;
        }

        let Transition { form, effect } = self.form.reduce(&event, &self.pattern);
        self.form = form;

        let outcome = match effect {
            Some(Effect::SetMode(mode)) => {
                info!(mode = %mode, "Registration submitted");
                self.sink.set_mode(mode);
                Outcome::Completed
            }
            None if is_submit => {
                debug!("Submission aborted: passwords do not match");
                Outcome::Mismatch
            }
            None => Outcome::Updated,
        };

        debug!(
            event = event.kind(),
            name_error = self.form.name_error(),
            repeat_password_error = self.form.repeat_password_error(),
            ?outcome,
            "Form event handled"
        );

        outcome
    }

    pub fn submit(&mut self) -> Outcome {
        self.dispatch(FormEvent::Submit)
    }
}
