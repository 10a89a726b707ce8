use validator::validate_email;

/// Whether `value` would be accepted by an `<input type="email">`.
///
/// Browsers strip leading and trailing whitespace from email inputs before
/// checking them, so surrounding whitespace is ignored here as well.
pub fn is_valid_email(value: &str) -> bool {
    validate_email(value.trim())
}
