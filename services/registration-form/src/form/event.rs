use serde::{Deserialize, Serialize};

/// Everything that can happen to the registration form.
///
/// Field events carry the full new value of the field, as read from the
/// input element after the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    NameChanged { value: String },
    EmailChanged { value: String },
    PasswordChanged { value: String },
    RepeatPasswordChanged { value: String },
    Submit,
}

impl FormEvent {
    /// A short label for the event, which never includes the value.
    pub fn kind(&self) -> &'static str {
        match self {
            FormEvent::NameChanged { .. } => "name_changed",
            FormEvent::EmailChanged { .. } => "email_changed",
            FormEvent::PasswordChanged { .. } => "password_changed",
            FormEvent::RepeatPasswordChanged { .. } => "repeat_password_changed",
            FormEvent::Submit => "submit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FormEvent;
    use speculoos::prelude::*;

    #[test]
    fn events_should_deserialize_from_tagged_json() {
        let events: Vec<FormEvent> = serde_json::from_str(
            r#"[
                {"type": "name_changed", "value": "Ann"},
                {"type": "repeat_password_changed", "value": "Pass1"},
                {"type": "submit"}
            ]"#,
        )
        .unwrap();
        assert_that(&events).is_equal_to(vec![
            FormEvent::NameChanged {
                value: "Ann".to_string(),
            },
            FormEvent::RepeatPasswordChanged {
                value: "Pass1".to_string(),
            },
            FormEvent::Submit,
        ]);
    }

    #[test]
    fn unknown_event_should_be_rejected() {
        let res = serde_json::from_str::<FormEvent>(r#"{"type": "reset"}"#);
        assert_that(&res).is_err();
    }

    #[test]
    fn kind_should_not_expose_the_value() {
        let event = FormEvent::PasswordChanged {
            value: "hunter2".to_string(),
        };
        assert_that(&event.kind()).is_equal_to("password_changed");
    }
}
