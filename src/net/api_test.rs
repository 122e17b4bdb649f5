use super::*;
use crate::net::mock_transport::MockTransport;

fn api(transport: MockTransport) -> EventApi<MockTransport> {
    EventApi::new(ClientConfig::new("http://api.test/api"), transport)
}

// =============================================================
// Query building
// =============================================================

#[test]
fn query_string_is_empty_without_filters() {
    assert_eq!(EventFilter::default().query_string(), "");
    assert_eq!(EventFilter::new("   ", "\t").query_string(), "");
}

#[test]
fn query_string_includes_only_non_empty_fields() {
    assert_eq!(EventFilter::new("rust", "").query_string(), "q=rust");
    assert_eq!(EventFilter::new("", "Berlin").query_string(), "location=Berlin");
    assert_eq!(EventFilter::new("rust", "Berlin").query_string(), "q=rust&location=Berlin");
}

#[test]
fn query_string_trims_and_url_encodes() {
    assert_eq!(
        EventFilter::new("  game night & pizza ", " São Paulo ").query_string(),
        "q=game+night+%26+pizza&location=S%C3%A3o+Paulo"
    );
}

#[test]
fn events_path_omits_question_mark_when_unfiltered() {
    assert_eq!(events_path(&EventFilter::default()), "/events");
    assert_eq!(events_path(&EventFilter::new("jazz", "")), "/events?q=jazz");
}

#[test]
fn user_lookup_path_encodes_username() {
    assert_eq!(user_lookup_path("ana maria"), "/auth/users?username=ana+maria");
    assert_eq!(user_lookup_path("a&b"), "/auth/users?username=a%26b");
}

#[test]
fn entity_paths_embed_ids() {
    assert_eq!(attended_events_path(5), "/auth/users/5/attended_events");
    assert_eq!(event_path(9), "/events/9");
    assert_eq!(attend_path(9), "/events/9/attend");
    assert_eq!(attendees_path(9), "/events/9/attendees");
}

// =============================================================
// Request/response mapping
// =============================================================

#[tokio::test]
async fn list_events_sends_get_to_filtered_url() {
    let api = api(MockTransport::new().respond(200, serde_json::json!([])));
    let events = api.list_events(&EventFilter::new("rust", "")).await.unwrap();
    assert!(events.is_empty());
    assert_eq!(api.transport().calls(), vec![(Method::Get, "http://api.test/api/events?q=rust".to_owned())]);
    assert_eq!(api.transport().requests()[0].body, None);
}

#[tokio::test]
async fn delete_event_sends_acting_user_in_body() {
    let api = api(MockTransport::new().respond(200, serde_json::json!({ "message": "Event deleted successfully" })));
    let message = api.delete_event(4, ActingUser { user_id: Some(2) }).await.unwrap();
    assert_eq!(message, "Event deleted successfully");
    let request = &api.transport().requests()[0];
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.url, "http://api.test/api/events/4");
    assert_eq!(request.body, Some(serde_json::json!({ "user_id": 2 })));
}

#[tokio::test]
async fn non_success_maps_to_rejected_with_backend_message() {
    let api = api(MockTransport::new().respond(403, serde_json::json!({ "message": "You are not authorized to update this event" })));
    let payload = EventPayload {
        title: "T".to_owned(),
        description: String::new(),
        date: "2025-01-01".to_owned(),
        time: String::new(),
        location: "L".to_owned(),
        user_id: Some(1),
    };
    let err = api.update_event(3, &payload).await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Rejected { status: 403, message: "You are not authorized to update this event".to_owned() }
    );
}

#[tokio::test]
async fn non_success_without_message_uses_endpoint_fallback() {
    let api = api(MockTransport::new().respond_raw(500, "Internal Server Error"));
    let err = api.create_event(&EventPayload {
        title: "T".to_owned(),
        description: String::new(),
        date: "2025-01-01".to_owned(),
        time: String::new(),
        location: "L".to_owned(),
        user_id: Some(1),
    })
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Failed to create event");
}

#[tokio::test]
async fn transport_failure_maps_to_network_error() {
    let api = api(MockTransport::new().fail("Failed to fetch"));
    let err = api.attendees(1).await.unwrap_err();
    assert_eq!(err, ClientError::Network("Failed to fetch".to_owned()));
}

#[tokio::test]
async fn malformed_success_body_maps_to_decode_error() {
    let api = api(MockTransport::new().respond_raw(200, "not json"));
    let err = api.list_events(&EventFilter::default()).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn find_users_treats_not_found_as_no_match() {
    let api = api(MockTransport::new().respond(404, serde_json::json!({ "message": "User not found" })));
    assert!(api.find_users("ghost").await.unwrap().is_empty());
}

#[tokio::test]
async fn message_endpoints_default_when_body_has_no_message() {
    let api = api(MockTransport::new().respond(200, serde_json::json!({})));
    let message = api.attend_event(2, ActingUser { user_id: Some(1) }).await.unwrap();
    assert_eq!(message, "Registered for event.");
}
