//! Route Guard decision and the navigable paths of the app.
//!
//! The guard is re-evaluated on every navigation to a protected path. The
//! login path is never guarded, so a redirect cannot loop.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::SessionAccess;

pub const HOME_PATH: &str = "/";
pub const SIGNUP_PATH: &str = "/signup";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Outcome of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the wrapped view.
    Admitted,
    /// Leave for `to`; `replace` swaps the current history entry.
    Redirected { to: &'static str, replace: bool },
}

/// Admit iff `token` is present and non-empty.
#[must_use]
pub fn evaluate(token: Option<&str>) -> GuardDecision {
    match token {
        Some(token) if !token.is_empty() => GuardDecision::Admitted,
        _ => GuardDecision::Redirected { to: LOGIN_PATH, replace: true },
    }
}

#[must_use]
pub fn evaluate_session<A: SessionAccess + ?Sized>(session: &A) -> GuardDecision {
    evaluate(session.token().as_deref())
}

#[must_use]
pub fn is_protected(path: &str) -> bool {
    path == DASHBOARD_PATH
}
