//! Wire DTOs for the event board REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly (`created_by_user_id`,
//! `event_id`, ...) so serde needs no renames. Response types are lenient
//! about optional fields; request bodies are serialized verbatim.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Backend identifier for a user row.
pub type UserId = i64;

/// Backend identifier for an event row.
pub type EventId = i64;

/// An event as returned by `GET /events` and `GET /events/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Start time, `HH:MM:SS`, if set.
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub created_by_user_id: UserId,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Event {
    /// Start time trimmed to `HH:MM` for display and edit inputs.
    pub fn short_time(&self) -> Option<&str> {
        self.time
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| t.get(..5).unwrap_or(t))
    }
}

/// One row of `GET /auth/users/{id}/attended_events`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendedEvent {
    pub event_id: EventId,
}

/// One row of `GET /events/{id}/attendees`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub username: String,
    pub email: String,
}

impl Attendee {
    /// Roster line shown in the attendee overlay.
    pub fn label(&self) -> String {
        format!("{} ({})", self.username, self.email)
    }
}

/// One row of `GET /auth/users?username=`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// The `{ "message": ... }` envelope used by mutations and error responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /events` and `PUT /events/{id}`.
///
/// `time` is already normalized to `HH:MM:SS` or left empty; an empty string
/// clears the time on update. `user_id` is `null` without a session and the
/// backend rejects the write.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub user_id: Option<UserId>,
}

/// Body of `DELETE /events/{id}` and `POST /events/{id}/attend`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ActingUser {
    pub user_id: Option<UserId>,
}
