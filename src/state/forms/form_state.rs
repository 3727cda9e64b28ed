//! Sign-up form state and its submit/reset orchestration

use super::errors::FormErrors;
use super::field::{FieldName, FormFields};
use super::validator::validate;

/// Message shown once a submission passes validation
pub const SUCCESS_MESSAGE: &str = "Signup successful!";

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// Submit and reset are disabled while in this state
    InProgress,
    Succeeded,
}

/// Owns the field values, error messages, submission status and success message
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: FormFields,
    errors: FormErrors,
    status: SubmissionStatus,
    success: Option<String>,
}

impl FormState {
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.status == SubmissionStatus::InProgress
    }

    /// Put the form mid-submission, as a slow backend call would
    #[cfg(test)]
    pub fn begin_submission(&mut self) {
        self.status = SubmissionStatus::InProgress;
    }

    /// Overwrite a field and drop its error without re-validating
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        *self.fields.get_mut(name) = value.into();
        self.errors = self.errors.cleared(name);
    }

    /// Append a typed character to a field
    pub fn push_char(&mut self, name: FieldName, c: char) {
        let mut value = self.fields.get(name).to_string();
        value.push(c);
        self.set_field(name, value);
    }

    /// Remove the last character of a field
    pub fn pop_char(&mut self, name: FieldName) {
        let mut value = self.fields.get(name).to_string();
        value.pop();
        self.set_field(name, value);
    }

    /// Validate the current values and record the outcome.
    ///
    /// Each call recomputes everything from the current fields, so stale
    /// errors from a previous submit never survive. Ignored while busy.
    pub fn submit(&mut self) -> SubmissionStatus {
        if self.is_busy() {
            return self.status;
        }

        self.status = SubmissionStatus::InProgress;
        self.errors = FormErrors::default();
        self.success = None;

        let result = validate(&self.fields);
        if result.ok {
            self.success = Some(SUCCESS_MESSAGE.to_string());
            self.status = SubmissionStatus::Succeeded;
        } else {
            self.errors = result.errors;
            self.status = SubmissionStatus::Idle;
        }
        self.status
    }

    /// Clear every field, error and the success message
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.errors = FormErrors::default();
        self.success = None;
        if !self.is_busy() {
            self.status = SubmissionStatus::Idle;
        }
    }
}
