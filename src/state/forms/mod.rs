//! Form domain layer
//!
//! Field values, validation rules and the submit/reset state of the
//! sign-up form. Nothing in here knows about the terminal.

mod errors;
mod field;
mod form_state;
mod validator;

pub use field::FieldName;
pub use form_state::{FormState, SubmissionStatus};

#[cfg(test)]
pub use errors::ValidationError;
#[cfg(test)]
pub use field::FormFields;
#[cfg(test)]
pub use form_state::SUCCESS_MESSAGE;
