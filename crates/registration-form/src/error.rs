//! Submission failure taxonomy.

use crate::messages;
use signup_client::SignupError;
use thiserror::Error;

/// Why a validated signup did not go through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Email or nickname already registered")]
    Duplicate,

    #[error("Signup rejected with HTTP {status}")]
    Rejected { status: u16 },

    #[error("Network error: {0}")]
    Network(String),
}

impl SubmissionError {
    /// Text shown in the alert modal.
    ///
    /// Any HTTP answer other than 2xx reads as a duplicate account; only a
    /// request that never got an answer gets its own wording.
    pub fn message(&self) -> &'static str {
        match self {
            SubmissionError::Duplicate | SubmissionError::Rejected { .. } => {
                messages::DUPLICATE_ACCOUNT
            }
            SubmissionError::Network(_) => messages::SERVER_UNREACHABLE,
        }
    }
}

impl From<SignupError> for SubmissionError {
    fn from(e: SignupError) -> Self {
        match (e.is_rejection(), e.status()) {
            (true, Some(409)) => SubmissionError::Duplicate,
            (true, Some(status)) => SubmissionError::Rejected { status },
            _ => SubmissionError::Network(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_maps_to_duplicate() {
        let err = SubmissionError::from(SignupError::Conflict);
        assert_eq!(err, SubmissionError::Duplicate);
        assert_eq!(err.message(), "duplicate email or nickname exists.");
    }

    #[test]
    fn test_rejection_keeps_status() {
        let err = SubmissionError::from(SignupError::Rejected {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(err, SubmissionError::Rejected { status: 500 });
        assert_eq!(err.message(), messages::DUPLICATE_ACCOUNT);
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_network() {
        // Nothing listens on port 9 locally
        let client = signup_client::SignupClient::new(
            "http://127.0.0.1:9",
            std::time::Duration::from_secs(2),
        )
        .unwrap();
        let request = signup_client::SignupRequest::new("a@b.com", "pw123", "runner1", 70, 175);

        let signup_err = client.signup(&request).await.unwrap_err();
        assert!(!signup_err.is_rejection());
        assert_eq!(signup_err.status(), None);

        let err = SubmissionError::from(signup_err);
        assert!(matches!(err, SubmissionError::Network(_)));
        assert_eq!(err.message(), messages::SERVER_UNREACHABLE);
    }

    #[test]
    fn test_network_message() {
        let err = SubmissionError::Network("connection refused".into());
        assert_eq!(err.message(), "unable to reach the server. please try again.");
        assert!(err.to_string().contains("connection refused"));
    }
}
