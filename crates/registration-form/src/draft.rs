//! In-progress registration input.

use std::fmt;

/// Editable fields of the registration screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
    Height,
    Weight,
}

impl Field {
    /// All fields in screen order.
    pub const ALL: [Field; 6] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Height,
        Field::Weight,
    ];

    /// Placeholder text shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Username => "nickname",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm password",
            Field::Height => "height (cm)",
            Field::Weight => "weight (kg)",
        }
    }

    /// Whether the current value is hidden when the field is prompted again.
    pub fn is_secret(&self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

/// Unsubmitted registration form data.
///
/// Edits never mutate in place: each change produces the next draft.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    username: String,
    email: String,
    password: String,
    confirm_password: String,
    height: String,
    weight: String,
}

impl RegistrationDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the draft with one field replaced.
    pub fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        *self.slot_mut(field) = value.into();
        self
    }

    /// Current raw value of a field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Height => &self.height,
            Field::Weight => &self.weight,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    /// True when every field holds some input.
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|f| !self.field(*f).is_empty())
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::Height => &mut self.height,
            Field::Weight => &mut self.weight,
        }
    }
}

impl fmt::Debug for RegistrationDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationDraft")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .field("height", &self.height)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Edits dispatched by the input widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    FieldChanged { field: Field, value: String },
}

/// Apply an action to a draft, producing the next draft.
pub fn reduce(draft: RegistrationDraft, action: FormAction) -> RegistrationDraft {
    match action {
        FormAction::FieldChanged { field, value } => draft.with_field(field, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_empty() {
        let draft = RegistrationDraft::new();
        for field in Field::ALL {
            assert_eq!(draft.field(field), "");
        }
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_with_field_replaces_only_that_field() {
        let draft = RegistrationDraft::new()
            .with_field(Field::Email, "a@b.com")
            .with_field(Field::Height, "175");

        assert_eq!(draft.email(), "a@b.com");
        assert_eq!(draft.height(), "175");
        assert_eq!(draft.username(), "");

        let draft = draft.with_field(Field::Email, "c@d.org");
        assert_eq!(draft.email(), "c@d.org");
        assert_eq!(draft.height(), "175");
    }

    #[test]
    fn test_reduce_field_changed() {
        let draft = reduce(
            RegistrationDraft::new(),
            FormAction::FieldChanged {
                field: Field::ConfirmPassword,
                value: "pw123".into(),
            },
        );
        assert_eq!(draft.confirm_password(), "pw123");
        assert_eq!(draft.password(), "");
    }

    #[test]
    fn test_is_complete() {
        let draft = Field::ALL
            .iter()
            .fold(RegistrationDraft::new(), |d, f| d.with_field(*f, "x"));
        assert!(draft.is_complete());
        assert!(!draft.with_field(Field::Weight, "").is_complete());
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let draft = RegistrationDraft::new()
            .with_field(Field::Username, "runner1")
            .with_field(Field::Password, "hunter2")
            .with_field(Field::ConfirmPassword, "hunter2");

        let debug = format!("{:?}", draft);
        assert!(debug.contains("runner1"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_secret_fields() {
        assert!(Field::Password.is_secret());
        assert!(Field::ConfirmPassword.is_secret());
        assert!(!Field::Email.is_secret());
    }
}
