//! Application state definitions

use super::forms::{FieldName, FormState};

/// Buttons below the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    SignUp,
    Reset,
}

impl FormButton {
    pub fn toggle(&self) -> Self {
        match self {
            Self::SignUp => Self::Reset,
            Self::Reset => Self::SignUp,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SignUp => "Sign Up",
            Self::Reset => "Reset",
        }
    }
}

/// What currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    Buttons,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldName::FirstName)
    }
}

impl Focus {
    /// Fields followed by the button row
    const RING_LEN: usize = FieldName::ALL.len() + 1;

    fn position(&self) -> usize {
        match self {
            Self::Field(name) => name.index(),
            Self::Buttons => FieldName::ALL.len(),
        }
    }

    fn at(position: usize) -> Self {
        FieldName::from_index(position).map_or(Self::Buttons, Self::Field)
    }

    pub fn next(&self) -> Self {
        Self::at((self.position() + 1) % Self::RING_LEN)
    }

    pub fn prev(&self) -> Self {
        Self::at((self.position() + Self::RING_LEN - 1) % Self::RING_LEN)
    }

    pub fn field(&self) -> Option<FieldName> {
        match self {
            Self::Field(name) => Some(*name),
            Self::Buttons => None,
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: FormState,
    pub focus: Focus,
    pub selected_button: FormButton,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_focus_is_first_name() {
        assert_eq!(Focus::default(), Focus::Field(FieldName::FirstName));
    }

    #[test]
    fn test_next_walks_fields_then_buttons_then_wraps() {
        let mut focus = Focus::default();
        let mut visited = vec![focus];
        for _ in 0..6 {
            focus = focus.next();
            visited.push(focus);
        }
        assert_eq!(
            visited,
            vec![
                Focus::Field(FieldName::FirstName),
                Focus::Field(FieldName::LastName),
                Focus::Field(FieldName::Email),
                Focus::Field(FieldName::Password),
                Focus::Field(FieldName::ConfirmPassword),
                Focus::Buttons,
                Focus::Field(FieldName::FirstName),
            ]
        );
    }

    #[test]
    fn test_prev_wraps_to_buttons() {
        assert_eq!(Focus::default().prev(), Focus::Buttons);
        assert_eq!(
            Focus::Buttons.prev(),
            Focus::Field(FieldName::ConfirmPassword)
        );
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(Focus::Field(FieldName::Email).field(), Some(FieldName::Email));
        assert_eq!(Focus::Buttons.field(), None);
    }

    #[test]
    fn test_button_toggle_and_labels() {
        assert_eq!(FormButton::default(), FormButton::SignUp);
        assert_eq!(FormButton::SignUp.toggle(), FormButton::Reset);
        assert_eq!(FormButton::Reset.toggle(), FormButton::SignUp);
        assert_eq!(FormButton::SignUp.label(), "Sign Up");
        assert_eq!(FormButton::Reset.label(), "Reset");
    }
}
