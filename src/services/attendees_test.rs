use super::*;
use crate::config::ClientConfig;
use crate::net::mock_transport::MockTransport;
use crate::net::types::Attendee;

fn api(transport: MockTransport) -> EventApi<MockTransport> {
    EventApi::new(ClientConfig::new("http://api.test/api"), transport)
}

#[tokio::test]
async fn roster_lists_attendees_under_card_title() {
    let api = api(MockTransport::new().respond(
        200,
        serde_json::json!([
            { "user_id": 1, "username": "ana", "email": "ana@example.com" },
            { "user_id": 2, "username": "bo", "email": "bo@example.com" }
        ]),
    ));
    let roster = roster(&api, 7, "Picnic").await.unwrap();

    assert_eq!(roster.heading(), "Attendees for: Picnic");
    let labels: Vec<String> = roster.attendees.iter().map(Attendee::label).collect();
    assert_eq!(labels, vec!["ana (ana@example.com)", "bo (bo@example.com)"]);
    assert_eq!(api.transport().calls()[0].1, "http://api.test/api/events/7/attendees");
}

#[tokio::test]
async fn empty_roster_keeps_title() {
    let api = api(MockTransport::new().respond(200, serde_json::json!([])));
    let roster = roster(&api, 7, "Picnic").await.unwrap();
    assert!(roster.attendees.is_empty());
}

#[tokio::test]
async fn failed_roster_surfaces_fallback() {
    let api = api(MockTransport::new().respond_raw(500, "oops"));
    let err = roster(&api, 7, "Picnic").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch attendees");
}
