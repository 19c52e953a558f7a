//! Request and response bodies exchanged with the remote auth API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

const LOGIN_REQUIRED_MESSAGE: &str = "Email and password are required.";
const SIGNUP_REQUIRED_MESSAGE: &str = "Email, password and username are required.";

/// Form input collected by the login and signup views.
///
/// Held only until submission; nothing here is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Only collected by the signup form.
    pub username: Option<String>,
}

impl Credentials {
    #[must_use]
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into(), username: None }
    }

    #[must_use]
    pub fn signup(email: impl Into<String>, password: impl Into<String>, username: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into(), username: Some(username.into()) }
    }

    /// Body for `POST /login`.
    #[must_use]
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest { email: self.email.trim().to_owned(), password: self.password.clone() }
    }

    /// Body for `POST /signup`. A missing username is sent as an empty string.
    #[must_use]
    pub fn signup_request(&self) -> SignupRequest {
        SignupRequest {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            username: self.username.as_deref().unwrap_or_default().trim().to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub username: String,
}

/// Successful `POST /login` payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Error payload the API attaches to non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Required-field check for the login form.
///
/// # Errors
///
/// Returns a fixed user-facing message when email or password is blank.
pub fn validate_login(credentials: &Credentials) -> Result<(), &'static str> {
    if credentials.email.trim().is_empty() || credentials.password.is_empty() {
        return Err(LOGIN_REQUIRED_MESSAGE);
    }
    Ok(())
}

/// Required-field check for the signup form.
///
/// # Errors
///
/// Returns a fixed user-facing message when any of the three fields is blank.
pub fn validate_signup(credentials: &Credentials) -> Result<(), &'static str> {
    let username_blank = credentials.username.as_deref().is_none_or(|u| u.trim().is_empty());
    if credentials.email.trim().is_empty() || credentials.password.is_empty() || username_blank {
        return Err(SIGNUP_REQUIRED_MESSAGE);
    }
    Ok(())
}
