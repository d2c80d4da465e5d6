//! Fixed user-facing modal messages.

pub const MISSING_FIELDS: &str = "all fields required.";
pub const INVALID_EMAIL: &str = "invalid email format.";
pub const PASSWORD_MISMATCH: &str = "passwords do not match.";
pub const INVALID_BODY_MEASUREMENTS: &str = "invalid body measurements.";

pub const SIGNUP_COMPLETE: &str = "registration complete.\nplease log in on the previous screen.";
pub const DUPLICATE_ACCOUNT: &str = "duplicate email or nickname exists.";
pub const SERVER_UNREACHABLE: &str = "unable to reach the server. please try again.";
