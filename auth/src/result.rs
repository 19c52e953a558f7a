//! Uniform success/failure envelope for auth API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (no response, non-2xx status, malformed success body)
//! collapses into [`AuthFailure`] carrying a user-facing message, so views
//! only ever decide between "navigate" and "show message".

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;

use serde_json::Value;

use crate::client::HttpReply;
use crate::types::{ErrorBody, LoginResponse};

pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Failure half of [`AuthResult`]; displays as the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthFailure {
    pub message: String,
}

impl AuthFailure {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

pub type AuthResult<T> = Result<T, AuthFailure>;

/// Normalize a raw HTTP reply.
///
/// 2xx yields the body parsed as JSON (`Null` when empty or not JSON).
/// Anything else yields the server's `message` when present, else `default`.
///
/// # Errors
///
/// Returns [`AuthFailure`] for every non-2xx status.
pub fn interpret_reply(reply: &HttpReply, default: &str) -> AuthResult<Value> {
    if reply.is_success() {
        return Ok(serde_json::from_str(&reply.body).unwrap_or(Value::Null));
    }
    Err(AuthFailure::new(server_message(&reply.body).unwrap_or_else(|| default.to_owned())))
}

/// Pull the issued token out of a successful login payload.
///
/// # Errors
///
/// Returns [`AuthFailure`] with [`LOGIN_FAILED_MESSAGE`] when the token is
/// missing or empty.
pub fn extract_token(payload: Value) -> AuthResult<String> {
    serde_json::from_value::<LoginResponse>(payload)
        .ok()
        .and_then(|resp| resp.token)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AuthFailure::new(LOGIN_FAILED_MESSAGE))
}

fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|err| err.message)
        .filter(|msg| !msg.is_empty())
}
