use super::*;

fn reply(status: u16, body: &str) -> HttpReply {
    HttpReply { status, body: body.to_owned() }
}

#[test]
fn success_reply_yields_parsed_payload() {
    let value = interpret_reply(&reply(201, r#"{"message":"User created"}"#), SIGNUP_FAILED_MESSAGE).expect("ok");
    assert_eq!(value, serde_json::json!({ "message": "User created" }));
}

#[test]
fn success_reply_with_empty_body_is_null() {
    let value = interpret_reply(&reply(204, ""), SIGNUP_FAILED_MESSAGE).expect("ok");
    assert_eq!(value, Value::Null);
}

#[test]
fn error_reply_uses_server_message_verbatim() {
    let err = interpret_reply(&reply(401, r#"{"message":"Invalid credentials"}"#), LOGIN_FAILED_MESSAGE)
        .expect_err("401 should fail");
    assert_eq!(err.message, "Invalid credentials");
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn error_reply_without_message_uses_default() {
    let err = interpret_reply(&reply(500, "<html>oops</html>"), SIGNUP_FAILED_MESSAGE).expect_err("500 should fail");
    assert_eq!(err.message, SIGNUP_FAILED_MESSAGE);

    let err = interpret_reply(&reply(400, r#"{"message":""}"#), SIGNUP_FAILED_MESSAGE).expect_err("400 should fail");
    assert_eq!(err.message, SIGNUP_FAILED_MESSAGE);
}

#[test]
fn redirect_status_is_not_success() {
    assert!(interpret_reply(&reply(302, ""), LOGIN_FAILED_MESSAGE).is_err());
}

#[test]
fn extract_token_reads_token_field() {
    assert_eq!(extract_token(serde_json::json!({ "token": "abc123" })), Ok("abc123".to_owned()));
}

#[test]
fn extract_token_rejects_missing_or_empty_token() {
    let expected = Err(AuthFailure::new(LOGIN_FAILED_MESSAGE));
    assert_eq!(extract_token(serde_json::json!({})), expected);
    assert_eq!(extract_token(serde_json::json!({ "token": "" })), expected);
    assert_eq!(extract_token(Value::Null), expected);
}
