//! Seams to the services the screen does not own.

use async_trait::async_trait;
use signup_client::{SignupClient, SignupError, SignupRequest};

/// Route name of the login screen.
pub const LOGIN_SCREEN: &str = "LoginScreen";

/// Screen navigation, fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait Router: Send + Sync {
    fn navigate(&self, screen: &str);
}

/// Remote account creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupBackend: Send + Sync {
    async fn signup(&self, request: &SignupRequest) -> Result<(), SignupError>;
}

#[async_trait]
impl SignupBackend for SignupClient {
    async fn signup(&self, request: &SignupRequest) -> Result<(), SignupError> {
        SignupClient::signup(self, request).await
    }
}
