//! Form field names and values

/// The five inputs of the sign-up form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// All fields in display (and focus) order
    pub const ALL: [FieldName; 5] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Placeholder label shown on the input border
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// Subject used in "... is required." messages
    pub fn subject(&self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm password",
        }
    }

    /// Whether the value should be masked when rendered
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    /// Position in [`FieldName::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Email => 2,
            Self::Password => 3,
            Self::ConfirmPassword => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Current values of the five inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormFields {
    pub fn get(&self, name: FieldName) -> &str {
        match name {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn get_mut(&mut self, name: FieldName) -> &mut String {
        match name {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Get the display value for rendering, masking secret fields when asked
    pub fn display_value(&self, name: FieldName, mask_secrets: bool) -> String {
        let value = self.get(name);
        if mask_secrets && name.is_secret() {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_through_all() {
        for (i, name) in FieldName::ALL.iter().enumerate() {
            assert_eq!(name.index(), i);
            assert_eq!(FieldName::from_index(i), Some(*name));
        }
        assert_eq!(FieldName::from_index(5), None);
    }

    #[test]
    fn test_only_passwords_are_secret() {
        let secret: Vec<_> = FieldName::ALL.iter().filter(|n| n.is_secret()).collect();
        assert_eq!(
            secret,
            vec![&FieldName::Password, &FieldName::ConfirmPassword]
        );
    }

    #[test]
    fn test_labels_and_subjects() {
        assert_eq!(FieldName::ConfirmPassword.label(), "Confirm Password");
        assert_eq!(FieldName::ConfirmPassword.subject(), "Confirm password");
        assert_eq!(FieldName::FirstName.subject(), "First name");
    }

    #[test]
    fn test_default_fields_are_empty() {
        let fields = FormFields::default();
        for name in FieldName::ALL {
            assert_eq!(fields.get(name), "");
        }
    }

    #[test]
    fn test_get_mut_writes_the_named_field() {
        let mut fields = FormFields::default();
        fields.get_mut(FieldName::Email).push_str("ada@example.com");
        assert_eq!(fields.email, "ada@example.com");
        assert!(fields.first_name.is_empty());
    }

    #[test]
    fn test_display_value_masks_secrets() {
        let fields = FormFields {
            first_name: "Ada".to_string(),
            password: "sécret".to_string(),
            ..Default::default()
        };
        assert_eq!(fields.display_value(FieldName::Password, true), "••••••");
        assert_eq!(fields.display_value(FieldName::Password, false), "sécret");
        assert_eq!(fields.display_value(FieldName::FirstName, true), "Ada");
    }
}
