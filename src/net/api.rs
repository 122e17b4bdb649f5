//! Typed client for the event board REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! One method per backend endpoint. Each call resolves the URL against the
//! configured base, sends through the `Transport`, and maps the response into
//! the `ClientError` taxonomy with a per-endpoint fallback message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ClientError, ClientResult};
use super::transport::{ApiRequest, Method, Transport};
use super::types::{
    ActingUser, AttendedEvent, Attendee, Event, EventId, EventPayload, LoginRequest, MessageBody, RegisterRequest,
    UserId, UserRecord,
};
use crate::config::ClientConfig;

/// Search criteria read from the filter inputs at fetch time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub query: String,
    pub location: String,
}

impl EventFilter {
    pub fn new(query: &str, location: &str) -> Self {
        Self { query: query.to_owned(), location: location.to_owned() }
    }

    /// Url-encoded query containing only the non-blank fields, trimmed.
    pub fn query_string(&self) -> String {
        let mut params = url::form_urlencoded::Serializer::new(String::new());
        if let Some(q) = non_blank(&self.query) {
            params.append_pair("q", q);
        }
        if let Some(location) = non_blank(&self.location) {
            params.append_pair("location", location);
        }
        params.finish()
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

pub(crate) fn events_path(filter: &EventFilter) -> String {
    let query = filter.query_string();
    if query.is_empty() { "/events".to_owned() } else { format!("/events?{query}") }
}

pub(crate) fn user_lookup_path(username: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("username", username)
        .finish();
    format!("/auth/users?{query}")
}

pub(crate) fn attended_events_path(user_id: UserId) -> String {
    format!("/auth/users/{user_id}/attended_events")
}

pub(crate) fn event_path(event_id: EventId) -> String {
    format!("/events/{event_id}")
}

pub(crate) fn attend_path(event_id: EventId) -> String {
    format!("/events/{event_id}/attend")
}

pub(crate) fn attendees_path(event_id: EventId) -> String {
    format!("/events/{event_id}/attendees")
}

/// REST client bound to one base URL and transport.
#[derive(Clone, Debug)]
pub struct EventApi<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> EventApi<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `POST /auth/register`; returns the backend's confirmation text.
    ///
    /// # Errors
    ///
    /// Transport failure, or a non-2xx answer (e.g. 409 duplicate user).
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<String> {
        self.send_for_message(Method::Post, "/auth/register", Some(request), "Registration failed", "Registered.")
            .await
    }

    /// `POST /auth/login`; returns the backend's confirmation text.
    ///
    /// # Errors
    ///
    /// Transport failure, or a non-2xx answer (401 on bad credentials).
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<String> {
        self.send_for_message(Method::Post, "/auth/login", Some(request), "Login failed", "Logged in.")
            .await
    }

    /// `GET /auth/users?username=`. A 404 means no such user and yields an
    /// empty list rather than an error.
    ///
    /// # Errors
    ///
    /// Transport failure, a non-2xx answer other than 404, or a malformed body.
    pub async fn find_users(&self, username: &str) -> ClientResult<Vec<UserRecord>> {
        match self.get_json(&user_lookup_path(username), "User lookup failed").await {
            Err(ClientError::Rejected { status: 404, .. }) => Ok(Vec::new()),
            other => other,
        }
    }

    /// `GET /auth/users/{id}/attended_events`.
    ///
    /// # Errors
    ///
    /// Transport failure, a non-2xx answer, or a malformed body.
    pub async fn attended_events(&self, user_id: UserId) -> ClientResult<Vec<AttendedEvent>> {
        self.get_json(&attended_events_path(user_id), "Failed to fetch attended events")
            .await
    }

    /// `GET /events` with the non-blank filter fields.
    ///
    /// # Errors
    ///
    /// Transport failure, a non-2xx answer, or a malformed body.
    pub async fn list_events(&self, filter: &EventFilter) -> ClientResult<Vec<Event>> {
        self.get_json(&events_path(filter), "Failed to load events").await
    }

    /// `GET /events/{id}`.
    ///
    /// # Errors
    ///
    /// Transport failure, a non-2xx answer (404 unknown event), or a malformed body.
    pub async fn get_event(&self, event_id: EventId) -> ClientResult<Event> {
        self.get_json(&event_path(event_id), "Could not fetch event for editing.")
            .await
    }

    /// `POST /events`.
    ///
    /// # Errors
    ///
    /// Transport failure or a non-2xx answer (400 missing fields, 403 unknown user).
    pub async fn create_event(&self, payload: &EventPayload) -> ClientResult<String> {
        self.send_for_message(Method::Post, "/events", Some(payload), "Failed to create event", "Event created.")
            .await
    }

    /// `PUT /events/{id}`.
    ///
    /// # Errors
    ///
    /// Transport failure or a non-2xx answer (403 when not the owner).
    pub async fn update_event(&self, event_id: EventId, payload: &EventPayload) -> ClientResult<String> {
        self.send_for_message(
            Method::Put,
            &event_path(event_id),
            Some(payload),
            "Failed to update event",
            "Event updated.",
        )
        .await
    }

    /// `DELETE /events/{id}` with the acting user in the body.
    ///
    /// # Errors
    ///
    /// Transport failure or a non-2xx answer (403 when not the owner).
    pub async fn delete_event(&self, event_id: EventId, actor: ActingUser) -> ClientResult<String> {
        self.send_for_message(
            Method::Delete,
            &event_path(event_id),
            Some(&actor),
            "Failed to delete event",
            "Event deleted.",
        )
        .await
    }

    /// `POST /events/{id}/attend`.
    ///
    /// # Errors
    ///
    /// Transport failure or a non-2xx answer (409 when already attending).
    pub async fn attend_event(&self, event_id: EventId, actor: ActingUser) -> ClientResult<String> {
        self.send_for_message(
            Method::Post,
            &attend_path(event_id),
            Some(&actor),
            "Failed to register for event",
            "Registered for event.",
        )
        .await
    }

    /// `GET /events/{id}/attendees`.
    ///
    /// # Errors
    ///
    /// Transport failure, a non-2xx answer, or a malformed body.
    pub async fn attendees(&self, event_id: EventId) -> ClientResult<Vec<Attendee>> {
        self.get_json(&attendees_path(event_id), "Failed to fetch attendees")
            .await
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str, fallback: &str) -> ClientResult<R> {
        let body = self.send(Method::Get, path, None::<&()>, fallback).await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn send_for_message<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        fallback: &str,
        default_message: &str,
    ) -> ClientResult<String> {
        let body = self.send(method, path, body, fallback).await?;
        Ok(serde_json::from_str::<MessageBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| default_message.to_owned()))
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        fallback: &str,
    ) -> ClientResult<String> {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        let request = ApiRequest { method, url: self.config.endpoint(path), body };
        let response = self.transport.send(request).await.map_err(ClientError::Network)?;
        if !response.is_success() {
            return Err(ClientError::rejected(response.status, &response.body, fallback));
        }
        Ok(response.body)
    }
}
