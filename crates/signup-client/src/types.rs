//! Signup API types.

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

/// Body of `POST /user/signup`.
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    #[serde(rename = "userEmail")]
    pub email: String,

    /// Only revealed while serializing the request body
    #[serde(rename = "userPassword", serialize_with = "expose_password")]
    pub password: SecretString,

    #[serde(rename = "userNickname")]
    pub nickname: String,

    /// Body weight in kilograms
    #[serde(rename = "userWeight")]
    pub weight: u16,

    /// Height in centimeters
    #[serde(rename = "userHeight")]
    pub height: u16,
}

impl SignupRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        nickname: impl Into<String>,
        weight: u16,
        height: u16,
    ) -> Self {
        Self {
            email: email.into(),
            password: SecretString::new(password.into()),
            nickname: nickname.into(),
            weight,
            height,
        }
    }
}

fn expose_password<S: Serializer>(password: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(password.expose_secret())
}
