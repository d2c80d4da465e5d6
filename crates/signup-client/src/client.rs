//! Signup HTTP client.

use crate::error::SignupError;
use crate::types::SignupRequest;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Client for the RunningMate user API.
#[derive(Clone, Debug)]
pub struct SignupClient {
    client: Client,
    base_url: String,
}

impl SignupClient {
    /// Create a new signup client for the given base API URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SignupError> {
        let client = Client::builder().timeout(timeout).build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Get the configured base API URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the signup endpoint.
    pub fn signup_url(&self) -> String {
        format!("{}/user/signup", self.base_url)
    }

    /// Register a new user account.
    ///
    /// Only the response status is inspected; the body is read solely to
    /// enrich the error on rejection.
    #[instrument(skip(self, request), fields(nickname = %request.nickname))]
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), SignupError> {
        let response = self
            .client
            .post(self.signup_url())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        debug!("Signup response status: {}", status);

        if status.is_success() {
            info!("Signup accepted");
            return Ok(());
        }

        Err(self.extract_error(response).await)
    }

    /// Convert a non-2xx response into an error.
    async fn extract_error(&self, response: reqwest::Response) -> SignupError {
        let status = response.status();

        match status {
            StatusCode::CONFLICT => {
                warn!("Signup conflict: email or nickname already exists");
                SignupError::Conflict
            }
            _ => {
                let message = response.text().await.unwrap_or_default();
                warn!("Signup rejected: {} - {}", status, message);
                SignupError::Rejected {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }
}
