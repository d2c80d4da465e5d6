//! Client-side checks run before a signup request is sent.

use crate::draft::RegistrationDraft;
use crate::messages;
use regex::Regex;
use signup_client::SignupRequest;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Basic `local@domain.tld` shape.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Exclusive upper bound for height and weight.
const MAX_BODY_MEASUREMENT: i64 = 300;

/// Reasons a draft is refused before submission.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", messages::MISSING_FIELDS)]
    MissingFields,

    #[error("{}", messages::INVALID_EMAIL)]
    InvalidEmail,

    #[error("{}", messages::PASSWORD_MISMATCH)]
    PasswordMismatch,

    #[error("{}", messages::INVALID_BODY_MEASUREMENTS)]
    InvalidBodyMeasurements,
}

impl ValidationError {
    /// Text shown in the alert modal.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => messages::MISSING_FIELDS,
            ValidationError::InvalidEmail => messages::INVALID_EMAIL,
            ValidationError::PasswordMismatch => messages::PASSWORD_MISMATCH,
            ValidationError::InvalidBodyMeasurements => messages::INVALID_BODY_MEASUREMENTS,
        }
    }
}

/// A draft that passed every check, with measurements parsed.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedSignup {
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub height: u16,
    pub weight: u16,
}

impl ValidatedSignup {
    /// Build the wire request for the signup endpoint.
    pub fn into_request(self) -> SignupRequest {
        SignupRequest::new(
            self.email,
            self.password,
            self.nickname,
            self.weight,
            self.height,
        )
    }
}

impl fmt::Debug for ValidatedSignup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedSignup")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("nickname", &self.nickname)
            .field("height", &self.height)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Validate a draft, stopping at the first failing check.
///
/// Order: missing fields, email shape, password confirmation, body
/// measurements.
pub fn validate(draft: &RegistrationDraft) -> Result<ValidatedSignup, ValidationError> {
    if !draft.is_complete() {
        return Err(ValidationError::MissingFields);
    }

    if !is_valid_email(draft.email()) {
        return Err(ValidationError::InvalidEmail);
    }

    if draft.password() != draft.confirm_password() {
        return Err(ValidationError::PasswordMismatch);
    }

    let height = parse_body_measurement(draft.height());
    let weight = parse_body_measurement(draft.weight());
    let (Some(height), Some(weight)) = (height, weight) else {
        return Err(ValidationError::InvalidBodyMeasurements);
    };

    Ok(ValidatedSignup {
        email: draft.email().to_string(),
        password: draft.password().to_string(),
        nickname: draft.username().to_string(),
        height,
        weight,
    })
}

/// Check the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Parse a height or weight, accepting only values in `1..300`.
pub fn parse_body_measurement(input: &str) -> Option<u16> {
    parse_leading_int(input)
        .filter(|v| (1..MAX_BODY_MEASUREMENT).contains(v))
        .and_then(|v| u16::try_from(v).ok())
}

/// Lenient integer parse: leading whitespace and an optional sign are
/// accepted, then the longest run of ASCII digits. Trailing text is ignored
/// ("175cm" is 175). Returns `None` when no digit follows.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in rest.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    seen_digit.then(|| if negative { -value } else { value })
}
