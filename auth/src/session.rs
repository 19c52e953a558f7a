//! Session Store: the single source of truth for "is there a session".
//!
//! DESIGN
//! ======
//! The token lives in memory and in one durable key-value entry. Only
//! [`SessionStore::set_token`] and [`SessionStore::logout`] mutate it, which
//! keeps "non-empty token <=> authenticated" enforced in one place. The token
//! is opaque: never decoded, validated, expired or refreshed here.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

/// Key of the durable entry holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Durable storage could not be read or written.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("token storage unavailable: {0}")]
pub struct StorageError(pub String);

/// Durable home of the token (browser `localStorage`, a file, memory).
pub trait TokenStorage {
    fn load(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StorageError`] if the entry cannot be written.
    fn save(&mut self, token: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] if the entry cannot be removed.
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// Process-local storage for tests and server-side rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    value: Option<String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { value: Some(token.into()) }
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, token: &str) -> Result<(), StorageError> {
        self.value = Some(token.to_owned());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.value = None;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionStore<S> {
    storage: S,
    token: Option<String>,
}

impl<S: TokenStorage> SessionStore<S> {
    /// Build the store, restoring any token persisted by an earlier run.
    pub fn init(storage: S) -> Self {
        let token = storage.load().filter(|t| !t.is_empty());
        tracing::debug!(restored = token.is_some(), "session store initialized");
        Self { storage, token }
    }

    /// Persist `token` and make it current. An empty token logs out.
    ///
    /// Memory is updated even when the durable write fails, so the running
    /// process stays logged in; the error tells the caller the session will
    /// not survive a restart.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the token could not be persisted.
    pub fn set_token(&mut self, token: &str) -> Result<(), StorageError> {
        if token.is_empty() {
            return self.logout();
        }
        self.token = Some(token.to_owned());
        self.storage.save(token)
    }

    /// Forget the token. Memory is cleared even when the durable entry
    /// cannot be removed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the persisted token could not be removed.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.token = None;
        self.storage.clear()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Session accessor handed to views, route guards and flows.
///
/// Takes `&self` so one handle can be shared by every consumer; the
/// implementation decides how interior mutation happens.
pub trait SessionAccess {
    fn token(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StorageError`] if the token was not persisted.
    fn set_token(&self, token: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] if the persisted token was not removed.
    fn logout(&self) -> Result<(), StorageError>;

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

impl<S: TokenStorage> SessionAccess for RefCell<SessionStore<S>> {
    fn token(&self) -> Option<String> {
        self.borrow().token().map(str::to_owned)
    }

    fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.borrow_mut().set_token(token)
    }

    fn logout(&self) -> Result<(), StorageError> {
        self.borrow_mut().logout()
    }
}
