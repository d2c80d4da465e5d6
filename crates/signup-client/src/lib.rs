//! RunningMate signup API client.

mod client;
mod error;
mod types;

pub use client::SignupClient;
pub use error::SignupError;
pub use types::*;
