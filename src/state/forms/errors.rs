//! Validation errors and the per-field error record

use super::field::FieldName;
use thiserror::Error;

/// A failed validation rule. `Display` is the message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required.", .0.subject())]
    Required(FieldName),
    #[error("Invalid email address.")]
    InvalidEmail,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Error messages for the form, one slot per field plus a general slot.
///
/// Treated as a value: every change produces a new record instead of
/// patching fields in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    first_name: Option<ValidationError>,
    last_name: Option<ValidationError>,
    email: Option<ValidationError>,
    password: Option<ValidationError>,
    confirm_password: Option<ValidationError>,
    /// Reserved for failures not tied to a field. Nothing sets it yet.
    general: Option<String>,
}

impl FormErrors {
    fn slot(&self, name: FieldName) -> &Option<ValidationError> {
        match name {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    fn slot_mut(&mut self, name: FieldName) -> &mut Option<ValidationError> {
        match name {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Copy of this record with `name` set to `error`
    #[must_use]
    pub fn with_error(&self, name: FieldName, error: ValidationError) -> Self {
        let mut next = self.clone();
        *next.slot_mut(name) = Some(error);
        next
    }

    /// Copy of this record with `name` cleared
    #[must_use]
    pub fn cleared(&self, name: FieldName) -> Self {
        let mut next = self.clone();
        *next.slot_mut(name) = None;
        next
    }

    /// Copy of this record with the general slot set
    #[allow(dead_code)]
    #[must_use]
    pub fn with_general(&self, message: impl Into<String>) -> Self {
        Self {
            general: Some(message.into()),
            ..self.clone()
        }
    }

    pub fn get(&self, name: FieldName) -> Option<ValidationError> {
        *self.slot(name)
    }

    /// Message for `name`, if its rule failed
    pub fn message(&self, name: FieldName) -> Option<String> {
        self.get(name).map(|e| e.to_string())
    }

    pub fn general(&self) -> Option<&str> {
        self.general.as_deref()
    }

    /// True when none of the five field slots hold an error
    pub fn fields_ok(&self) -> bool {
        FieldName::ALL.iter().all(|name| self.slot(*name).is_none())
    }

    /// True when no slot, including the general one, holds an error
    pub fn is_empty(&self) -> bool {
        self.fields_ok() && self.general.is_none()
    }

    /// Fields that currently carry an error, in display order
    pub fn failed_fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|name| self.slot(*name).is_some())
            .collect()
    }
}
