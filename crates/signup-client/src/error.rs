//! Signup client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Email or nickname already taken")]
    Conflict,

    #[error("Signup rejected: {status} - {message}")]
    Rejected { status: u16, message: String },
}

impl SignupError {
    /// True when the server answered with a non-2xx status.
    ///
    /// Transport failures (connection refused, timeouts) return false.
    pub fn is_rejection(&self) -> bool {
        matches!(self, SignupError::Conflict | SignupError::Rejected { .. })
    }

    /// HTTP status of the rejection, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            SignupError::Conflict => Some(409),
            SignupError::Rejected { status, .. } => Some(*status),
            SignupError::Http(_) => None,
        }
    }
}
