//! Shared authentication core for the expense tracker clients.
//!
//! This crate owns everything about a session that does not depend on where
//! it runs: the remote API wire model, the uniform success/failure result,
//! the API client over a pluggable [`Transport`], the [`SessionStore`] over
//! pluggable durable storage, the route guard decision and the form
//! submission flows. The `client` (browser) and `cli` (terminal) crates plug
//! in their own transport and storage.
//!
//! DATA FLOW
//! =========
//! form input -> [`flow`] -> [`AuthClient`] -> [`Transport`] -> remote API
//! -> [`AuthResult`] -> [`SessionAccess::set_token`] -> [`guard::evaluate`].

pub mod client;
pub mod flow;
pub mod guard;
pub mod result;
pub mod session;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{AuthClient, DEFAULT_API_URL, HttpReply, Transport, TransportError};
pub use flow::Navigation;
pub use guard::GuardDecision;
pub use result::{AuthFailure, AuthResult};
pub use session::{MemoryStorage, SessionAccess, SessionStore, StorageError, TOKEN_STORAGE_KEY, TokenStorage};
pub use types::Credentials;
