//! Form submission flows shared by every front end.
//!
//! Each flow turns one submission into exactly one [`Navigation`] effect.
//! Failures always leave the user on the current form with their input
//! intact; only a successful login touches the session. A session that
//! changed in memory but not in durable storage comes back as
//! [`StorageError`]; whether that is fatal is up to the front end.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::client::{AuthClient, Transport};
use crate::guard::{DASHBOARD_PATH, LOGIN_PATH};
use crate::session::{SessionAccess, StorageError};
use crate::types::{self, Credentials};

/// What the view should do after a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Navigate(&'static str),
    /// Stay on the current view and show a blocking message.
    Alert(String),
}

/// Login: on success store the token then go to the dashboard.
///
/// # Errors
///
/// Returns [`StorageError`] when the API issued a token but it could not be
/// persisted. The session still holds it in memory.
pub async fn submit_login<T, A>(
    client: &AuthClient<T>,
    session: &A,
    credentials: &Credentials,
) -> Result<Navigation, StorageError>
where
    T: Transport,
    A: SessionAccess + ?Sized,
{
    if let Err(msg) = types::validate_login(credentials) {
        return Ok(Navigation::Alert(msg.to_owned()));
    }
    match client.login(credentials).await {
        Ok(token) => {
            session.set_token(&token)?;
            tracing::info!("login succeeded");
            Ok(Navigation::Navigate(DASHBOARD_PATH))
        }
        Err(failure) => Ok(Navigation::Alert(failure.message)),
    }
}

/// Signup: on success go to the login view; there is no auto-login.
pub async fn submit_signup<T: Transport>(client: &AuthClient<T>, credentials: &Credentials) -> Navigation {
    if let Err(msg) = types::validate_signup(credentials) {
        return Navigation::Alert(msg.to_owned());
    }
    match client.signup(credentials).await {
        Ok(_) => {
            tracing::info!("signup succeeded");
            Navigation::Navigate(LOGIN_PATH)
        }
        Err(failure) => Navigation::Alert(failure.message),
    }
}

/// Clear the session; the guard sends the user to login from here.
///
/// # Errors
///
/// Returns [`StorageError`] when the persisted token could not be removed.
/// The session is already cleared in memory.
pub fn logout<A: SessionAccess + ?Sized>(session: &A) -> Result<Navigation, StorageError> {
    session.logout()?;
    tracing::info!("logged out");
    Ok(Navigation::Navigate(LOGIN_PATH))
}
