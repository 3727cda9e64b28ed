//! Sign-up form validation rules

use super::errors::{FormErrors, ValidationError};
use super::field::{FieldName, FormFields};
use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld with no whitespace or extra '@'; not RFC 5322.
// U+FEFF is excluded explicitly since Unicode White_Space does not cover it.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is valid")
});

/// Outcome of validating the whole form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub errors: FormErrors,
    pub ok: bool,
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

fn required(fields: &FormFields, name: FieldName) -> Option<ValidationError> {
    fields
        .get(name)
        .is_empty()
        .then_some(ValidationError::Required(name))
}

fn check_email(email: &str) -> Option<ValidationError> {
    if email.is_empty() {
        Some(ValidationError::Required(FieldName::Email))
    } else if !is_valid_email(email) {
        Some(ValidationError::InvalidEmail)
    } else {
        None
    }
}

fn check_confirm_password(password: &str, confirm: &str) -> Option<ValidationError> {
    if confirm.is_empty() {
        Some(ValidationError::Required(FieldName::ConfirmPassword))
    } else if confirm != password {
        Some(ValidationError::PasswordMismatch)
    } else {
        None
    }
}

/// Run every rule against `fields`. Never fails; errors are returned as data.
pub fn validate(fields: &FormFields) -> Validation {
    let checks = [
        (FieldName::FirstName, required(fields, FieldName::FirstName)),
        (FieldName::LastName, required(fields, FieldName::LastName)),
        (FieldName::Email, check_email(&fields.email)),
        (FieldName::Password, required(fields, FieldName::Password)),
        (
            FieldName::ConfirmPassword,
            check_confirm_password(&fields.password, &fields.confirm_password),
        ),
    ];

    let errors = checks
        .into_iter()
        .fold(FormErrors::default(), |errors, (name, failure)| match failure {
            Some(err) => errors.with_error(name, err),
            None => errors,
        });
    let ok = errors.fields_ok();

    Validation { errors, ok }
}
