use super::*;
use crate::config::ClientConfig;
use crate::net::api::EventFilter;
use crate::net::mock_transport::MockTransport;
use crate::net::transport::Method;
use crate::services::listing::refresh_after;

// =============================================================
// Helpers
// =============================================================

fn api(transport: MockTransport) -> EventApi<MockTransport> {
    EventApi::new(ClientConfig::new("http://api.test/api"), transport)
}

fn owner() -> Session {
    Session::for_user(4, "ana")
}

fn form() -> EventForm {
    EventForm {
        event_id: None,
        title: "Picnic".to_owned(),
        description: String::new(),
        date: "2025-06-01".to_owned(),
        time: "12:30".to_owned(),
        location: "Park".to_owned(),
    }
}

fn event_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": "Picnic",
        "description": "Bring food",
        "date": "2025-06-01",
        "time": "12:30:00",
        "location": "Park",
        "created_by_user_id": 4
    })
}

// =============================================================
// create / update
// =============================================================

#[tokio::test]
async fn create_sends_normalized_payload_with_user_id() {
    let api = api(MockTransport::new().respond(201, serde_json::json!({ "message": "Event created successfully" })));
    let message = create(&api, &owner(), &form()).await.unwrap();

    assert_eq!(message, "Event created successfully");
    let request = &api.transport().requests()[0];
    assert_eq!((request.method, request.url.as_str()), (Method::Post, "http://api.test/api/events"));
    assert_eq!(
        request.body,
        Some(serde_json::json!({
            "title": "Picnic",
            "description": "",
            "date": "2025-06-01",
            "time": "12:30:00",
            "location": "Park",
            "user_id": 4
        }))
    );
}

#[tokio::test]
async fn create_rejection_surfaces_backend_message() {
    let api = api(MockTransport::new().respond(400, serde_json::json!({ "message": "Title and date are required" })));
    let err = create(&api, &owner(), &EventForm::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "Title and date are required");
}

#[tokio::test]
async fn update_puts_to_event_path() {
    let api = api(MockTransport::new().respond(200, serde_json::json!({ "message": "Event updated successfully" })));
    let message = update(&api, &owner(), 7, &form()).await.unwrap();
    assert_eq!(message, "Event updated successfully");
    assert_eq!(api.transport().calls(), vec![(Method::Put, "http://api.test/api/events/7".to_owned())]);
}

#[tokio::test]
async fn update_forbidden_without_message_uses_fallback() {
    let api = api(MockTransport::new().respond_raw(403, "Forbidden"));
    let err = update(&api, &owner(), 7, &form()).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to update event");
}

// =============================================================
// delete
// =============================================================

#[tokio::test]
async fn declined_delete_issues_no_request() {
    let api = api(MockTransport::new());
    let outcome = delete(&api, &owner(), 7, |_| false).await.unwrap();
    assert_eq!(outcome, None);
    assert_eq!(api.transport().request_count(), 0);
}

#[tokio::test]
async fn delete_prompts_with_confirmation_text() {
    let api = api(MockTransport::new().respond(200, serde_json::json!({ "message": "Event deleted successfully" })));
    let mut prompt = String::new();
    delete(&api, &owner(), 7, |text| {
        prompt = text.to_owned();
        true
    })
    .await
    .unwrap();
    assert_eq!(prompt, DELETE_CONFIRMATION);
}

#[tokio::test]
async fn confirmed_delete_then_refresh_drops_the_card() {
    let api = api(MockTransport::new()
        .respond(200, serde_json::json!({ "message": "Event deleted successfully" }))
        .respond(200, serde_json::json!([event_json(8)]))
        .respond(200, serde_json::json!([])));
    let session = owner();

    let outcome = delete(&api, &session, 7, |_| true).await;
    assert_eq!(outcome, Ok(Some("Event deleted successfully".to_owned())));
    let delete_request = &api.transport().requests()[0];
    assert_eq!(delete_request.method, Method::Delete);
    assert_eq!(delete_request.body, Some(serde_json::json!({ "user_id": 4 })));

    let view = refresh_after(&api, &session, &EventFilter::default(), &outcome).await.unwrap();
    assert!(view.find(7).is_none());
    assert!(view.find(8).is_some());
}

// =============================================================
// attend
// =============================================================

#[tokio::test]
async fn anonymous_attend_fails_locally() {
    let api = api(MockTransport::new());
    let err = attend(&api, &Session::anonymous(), 7).await.unwrap_err();
    assert_eq!(err, ClientError::NotLoggedIn);
    assert_eq!(api.transport().request_count(), 0);
}

#[tokio::test]
async fn attend_posts_user_id() {
    let api = api(MockTransport::new().respond(201, serde_json::json!({ "message": "Successfully registered for event" })));
    let message = attend(&api, &owner(), 7).await.unwrap();
    assert_eq!(message, "Successfully registered for event");
    let request = &api.transport().requests()[0];
    assert_eq!(request.url, "http://api.test/api/events/7/attend");
    assert_eq!(request.body, Some(serde_json::json!({ "user_id": 4 })));
}

#[tokio::test]
async fn attend_twice_surfaces_conflict() {
    let api = api(MockTransport::new().respond(409, serde_json::json!({ "message": "User already registered for this event" })));
    let err = attend(&api, &owner(), 7).await.unwrap_err();
    assert!(matches!(err, ClientError::Rejected { status: 409, .. }));
    assert_eq!(err.to_string(), "User already registered for this event");
}

// =============================================================
// load_for_edit
// =============================================================

#[tokio::test]
async fn load_for_edit_prefills_short_time() {
    let api = api(MockTransport::new().respond(200, event_json(7)));
    let form = load_for_edit(&api, 7).await.unwrap();
    assert_eq!(form.event_id, Some(7));
    assert_eq!(form.time, "12:30");
    assert_eq!(form.description, "Bring food");
}

#[tokio::test]
async fn load_for_edit_missing_event_uses_fallback() {
    let api = api(MockTransport::new().respond_raw(404, ""));
    let err = load_for_edit(&api, 7).await.unwrap_err();
    assert_eq!(err.to_string(), "Could not fetch event for editing.");
}
