//! Alert modal state.

use crate::messages;

/// What the alert modal shows, and what closing it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalOutcome {
    /// Informational message; closing returns to the form.
    Notice { message: String },
    /// Signup succeeded; closing navigates to the login screen.
    Success { message: String },
}

impl ModalOutcome {
    pub fn notice(message: impl Into<String>) -> Self {
        ModalOutcome::Notice {
            message: message.into(),
        }
    }

    pub fn success() -> Self {
        ModalOutcome::Success {
            message: messages::SIGNUP_COMPLETE.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ModalOutcome::Notice { message } | ModalOutcome::Success { message } => message,
        }
    }

    pub fn navigates_on_close(&self) -> bool {
        matches!(self, ModalOutcome::Success { .. })
    }
}

/// Props handed to the modal widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalView<'a> {
    pub visible: bool,
    pub message: &'a str,
}

impl<'a> ModalView<'a> {
    pub(crate) fn of(outcome: Option<&'a ModalOutcome>) -> Self {
        match outcome {
            Some(outcome) => Self {
                visible: true,
                message: outcome.message(),
            },
            None => Self {
                visible: false,
                message: "",
            },
        }
    }
}
