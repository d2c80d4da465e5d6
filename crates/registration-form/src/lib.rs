//! RunningMate registration screen.
//!
//! Owns the sign-up draft, validates it client-side, submits it to the
//! signup endpoint and reports the outcome through an alert modal:
//! - Field edits replace the draft; validation is deferred to submit
//! - At most one signup request is in flight at a time
//! - A successful signup navigates to the login screen once the modal closes

mod collaborators;
mod draft;
mod error;
mod form;
pub mod messages;
mod modal;
mod validation;

pub use collaborators::{Router, SignupBackend, LOGIN_SCREEN};
pub use draft::{reduce, Field, FormAction, RegistrationDraft};
pub use error::SubmissionError;
pub use form::{RegistrationForm, SubmitResult, SubmitStatus};
pub use modal::{ModalOutcome, ModalView};
pub use validation::{
    is_valid_email, parse_body_measurement, parse_leading_int, validate, ValidatedSignup,
    ValidationError,
};
