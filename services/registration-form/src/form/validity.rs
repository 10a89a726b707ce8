use super::state::FormFields;
use crate::domain::is_valid_email;

/// Tells whether the form, as currently filled, would pass the host's
/// constraint validation (required fields, input types).
///
/// In a browser this is `HTMLFormElement.checkValidity()`. Implementations
/// which inspect a live element can ignore `fields`.
#[cfg_attr(test, mockall::automock)]
pub trait FormValiditySource {
    fn check_validity(&self, fields: &FormFields) -> bool;
}

/// Constraint validation for the registration form, without a DOM: every
/// field is required, and the email must be a valid address.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintValidity;

impl FormValiditySource for ConstraintValidity {
    fn check_validity(&self, fields: &FormFields) -> bool {
        let FormFields {
            name,
            email,
            password,
            repeat_password,
        } = fields;
        let required = [name, email, password, repeat_password]
            .iter()
            .all(|value| !value.is_empty());
        required && is_valid_email(email)
    }
}

/// Always gives the same answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedValidity(pub bool);

impl FormValiditySource for FixedValidity {
    fn check_validity(&self, _fields: &FormFields) -> bool {
        self.0
    }
}
