use std::cell::RefCell;

use super::*;
use crate::session::{MemoryStorage, SessionStore};

const TO_LOGIN: GuardDecision = GuardDecision::Redirected { to: LOGIN_PATH, replace: true };

#[test]
fn token_admits() {
    assert_eq!(evaluate(Some("abc123")), GuardDecision::Admitted);
}

#[test]
fn missing_or_empty_token_redirects_to_login_replacing_history() {
    assert_eq!(evaluate(None), TO_LOGIN);
    assert_eq!(evaluate(Some("")), TO_LOGIN);
}

#[test]
fn fresh_session_is_redirected() {
    let session = RefCell::new(SessionStore::init(MemoryStorage::default()));
    assert_eq!(evaluate_session(&session), TO_LOGIN);
}

#[test]
fn logout_then_protected_request_redirects() {
    let session = RefCell::new(SessionStore::init(MemoryStorage::with_token("abc123")));
    assert_eq!(evaluate_session(&session), GuardDecision::Admitted);

    session.logout().expect("clear");

    assert_eq!(evaluate_session(&session), TO_LOGIN);
}

#[test]
fn only_dashboard_is_protected() {
    assert!(is_protected(DASHBOARD_PATH));
    assert!(!is_protected(LOGIN_PATH));
    assert!(!is_protected(SIGNUP_PATH));
    assert!(!is_protected(HOME_PATH));
}
