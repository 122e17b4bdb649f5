//! Attendee roster lookup.

#[cfg(test)]
#[path = "attendees_test.rs"]
mod attendees_test;

use crate::net::api::EventApi;
use crate::net::error::ClientResult;
use crate::net::transport::Transport;
use crate::net::types::EventId;
use crate::state::ui::AttendeeRoster;

/// Fetch who attends `event_id`, labelled with the title shown on the card.
///
/// # Errors
///
/// Transport failure, a non-2xx answer, or a malformed body.
pub async fn roster<T: Transport>(api: &EventApi<T>, event_id: EventId, event_title: &str) -> ClientResult<AttendeeRoster> {
    let attendees = api.attendees(event_id).await?;
    Ok(AttendeeRoster { event_title: event_title.to_owned(), attendees })
}
