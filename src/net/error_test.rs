use super::*;

#[test]
fn rejected_uses_backend_message() {
    let err = ClientError::rejected(409, r#"{"message":"You are already attending this event"}"#, "fallback");
    assert_eq!(
        err,
        ClientError::Rejected { status: 409, message: "You are already attending this event".to_owned() }
    );
    assert_eq!(err.to_string(), "You are already attending this event");
}

#[test]
fn rejected_falls_back_when_body_is_not_json() {
    let err = ClientError::rejected(500, "<html>boom</html>", "Failed to create event");
    assert_eq!(err.to_string(), "Failed to create event");
}

#[test]
fn rejected_falls_back_when_message_missing_or_blank() {
    assert_eq!(ClientError::rejected(400, "{}", "Login failed").to_string(), "Login failed");
    assert_eq!(
        ClientError::rejected(400, r#"{"message":"  "}"#, "Login failed").to_string(),
        "Login failed"
    );
}

#[test]
fn network_errors_carry_underlying_text() {
    let err = ClientError::Network("Failed to fetch".to_owned());
    assert_eq!(err.to_string(), "Network error: Failed to fetch");
}
