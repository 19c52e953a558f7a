//! Auth API client over a pluggable HTTP transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build supplies a `gloo-net` transport and the CLI a `reqwest`
//! one; tests script replies directly. Each call is a single attempt with no
//! retry and no timeout of its own.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde_json::Value;

use crate::result::{self, AuthFailure, AuthResult, LOGIN_FAILED_MESSAGE, SIGNUP_FAILED_MESSAGE};
use crate::types::Credentials;

/// Local development address of the auth API.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Status line and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (network down, CORS, DNS...).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

/// Minimal HTTP capability the auth client needs.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// POST `body` as JSON to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no HTTP response was received. Non-2xx
    /// statuses are still `Ok`.
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, TransportError>;
}

/// Client for `POST /signup` and `POST /login`.
#[derive(Clone, Debug)]
pub struct AuthClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> AuthClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, transport }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create an account. Success carries whatever payload the API returned.
    ///
    /// # Errors
    ///
    /// Returns [`AuthFailure`] with the server message, or `"Signup failed"`.
    pub async fn signup(&self, credentials: &Credentials) -> AuthResult<Value> {
        self.post("signup", &credentials.signup_request(), SIGNUP_FAILED_MESSAGE).await
    }

    /// Create a session and return the issued token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthFailure`] with the server message, or `"Login failed"`
    /// (also used when a 2xx reply carries no token).
    pub async fn login(&self, credentials: &Credentials) -> AuthResult<String> {
        let payload = self.post("login", &credentials.login_request(), LOGIN_FAILED_MESSAGE).await?;
        result::extract_token(payload)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B, default: &str) -> AuthResult<Value> {
        let url = self.endpoint(path);
        let body = serde_json::to_value(body).map_err(|_| AuthFailure::new(default))?;
        tracing::debug!(%url, "auth request");

        let reply = match self.transport.post_json(&url, &body).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(%url, error = %e, "auth request failed before response");
                return Err(AuthFailure::new(default));
            }
        };

        let outcome = result::interpret_reply(&reply, default);
        if let Err(failure) = &outcome {
            tracing::warn!(%url, status = reply.status, message = %failure, "auth request rejected");
        }
        outcome
    }
}
