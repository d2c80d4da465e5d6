//! Common test utilities for integration tests.

use registration_form::{Field, RegistrationForm, Router};
use signup_client::SignupClient;
use std::sync::Mutex;
use std::time::Duration;
use wiremock::MockServer;

/// Router that remembers every navigation.
#[derive(Default)]
pub struct RecordingRouter {
    visited: Mutex<Vec<String>>,
}

impl RecordingRouter {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Router for RecordingRouter {
    fn navigate(&self, screen: &str) {
        self.visited.lock().unwrap().push(screen.to_string());
    }
}

/// Create a signup client configured for a mock server.
pub fn test_signup_client(mock_server: &MockServer) -> SignupClient {
    SignupClient::new(mock_server.uri(), Duration::from_secs(5)).unwrap()
}

/// A form holding the canonical valid draft.
pub fn filled_form() -> RegistrationForm<RecordingRouter> {
    let mut form = RegistrationForm::new(RecordingRouter::default());
    form.update_field(Field::Username, "runner1");
    form.update_field(Field::Email, "a@b.com");
    form.update_field(Field::Password, "pw123");
    form.update_field(Field::ConfirmPassword, "pw123");
    form.update_field(Field::Height, "175");
    form.update_field(Field::Weight, "70");
    form
}
