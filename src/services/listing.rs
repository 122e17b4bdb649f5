//! Event-list refresh.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::api::{EventApi, EventFilter};
use crate::net::error::ClientResult;
use crate::net::transport::Transport;
use crate::state::events::{AttendanceSet, EventListView};
use crate::state::session::Session;

/// Fetch the filtered events and, for a logged-in session, the attendance
/// set, then rebuild the list view.
///
/// A failed attendance lookup is logged and treated as attending nothing;
/// only a failed event fetch yields [`EventListView::Failed`].
pub async fn refresh<T: Transport>(api: &EventApi<T>, session: &Session, filter: &EventFilter) -> EventListView {
    let events = match api.list_events(filter).await {
        Ok(events) => events,
        Err(e) => {
            leptos::logging::warn!("event fetch failed: {e}");
            return EventListView::Failed(e.to_string());
        }
    };
    if events.is_empty() {
        return EventListView::Empty;
    }
    let attending = attendance(api, session).await;
    EventListView::build(events, session, &attending)
}

async fn attendance<T: Transport>(api: &EventApi<T>, session: &Session) -> AttendanceSet {
    let Some(user_id) = session.user_id() else {
        return AttendanceSet::default();
    };
    match api.attended_events(user_id).await {
        Ok(rows) => rows.into_iter().collect(),
        Err(e) => {
            leptos::logging::warn!("attended events fetch failed for user {user_id}: {e}");
            AttendanceSet::default()
        }
    }
}

/// Refresh only when `outcome` succeeded; failures leave the list alone and
/// issue no request.
pub async fn refresh_after<T: Transport, R>(
    api: &EventApi<T>,
    session: &Session,
    filter: &EventFilter,
    outcome: &ClientResult<R>,
) -> Option<EventListView> {
    if outcome.is_err() {
        return None;
    }
    Some(refresh(api, session, filter).await)
}
