//! Event create/update/delete/attend and edit-form loading.
//!
//! Each operation returns the backend's message for the flash area. The
//! caller refreshes the list on success via
//! [`refresh_after`](super::listing::refresh_after).

#[cfg(test)]
#[path = "mutations_test.rs"]
mod mutations_test;

use crate::net::api::EventApi;
use crate::net::error::{ClientError, ClientResult};
use crate::net::transport::Transport;
use crate::net::types::{ActingUser, EventId};
use crate::state::forms::EventForm;
use crate::state::session::Session;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this event?";

/// # Errors
///
/// Transport failure or backend rejection (missing title/date, bad time).
pub async fn create<T: Transport>(api: &EventApi<T>, session: &Session, form: &EventForm) -> ClientResult<String> {
    api.create_event(&form.to_payload(session.user_id())).await
}

/// # Errors
///
/// Transport failure or backend rejection (403 for non-owners, 404).
pub async fn update<T: Transport>(
    api: &EventApi<T>,
    session: &Session,
    event_id: EventId,
    form: &EventForm,
) -> ClientResult<String> {
    api.update_event(event_id, &form.to_payload(session.user_id())).await
}

/// Ask `confirm` first; a declined prompt returns `Ok(None)` without any
/// request.
///
/// # Errors
///
/// Transport failure or backend rejection.
pub async fn delete<T: Transport>(
    api: &EventApi<T>,
    session: &Session,
    event_id: EventId,
    confirm: impl FnOnce(&str) -> bool,
) -> ClientResult<Option<String>> {
    if !confirm(DELETE_CONFIRMATION) {
        return Ok(None);
    }
    let actor = ActingUser { user_id: session.user_id() };
    api.delete_event(event_id, actor).await.map(Some)
}

/// Register the session's user for an event.
///
/// # Errors
///
/// [`ClientError::NotLoggedIn`] for an anonymous session (no request is
/// made), otherwise transport failure or backend rejection (409 when
/// already attending).
pub async fn attend<T: Transport>(api: &EventApi<T>, session: &Session, event_id: EventId) -> ClientResult<String> {
    let Some(user_id) = session.user_id() else {
        return Err(ClientError::NotLoggedIn);
    };
    api.attend_event(event_id, ActingUser { user_id: Some(user_id) }).await
}

/// Fetch an event and turn it into a pre-filled edit form.
///
/// # Errors
///
/// Transport failure, 404, or a malformed body.
pub async fn load_for_edit<T: Transport>(api: &EventApi<T>, event_id: EventId) -> ClientResult<EventForm> {
    let event = api.get_event(event_id).await?;
    Ok(EventForm::from_event(&event))
}
