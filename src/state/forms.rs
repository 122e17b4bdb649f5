//! Create/edit form drafts.
//!
//! Values are kept exactly as typed; the only transformation before sending
//! is widening `HH:MM` times to `HH:MM:SS`.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{Event, EventId, EventPayload, UserId};

/// Append `:00` to a bare `HH:MM` time. Anything else (already with seconds,
/// empty, or free text) passes through for the backend to judge.
pub fn normalize_time(input: &str) -> String {
    let bytes = input.as_bytes();
    let is_hh_mm = bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if is_hh_mm { format!("{input}:00") } else { input.to_owned() }
}

/// One event form's inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventForm {
    /// Set when editing an existing event.
    pub event_id: Option<EventId>,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

impl EventForm {
    /// Pre-fill the edit form from a fetched event, showing time as `HH:MM`.
    pub fn from_event(event: &Event) -> Self {
        Self {
            event_id: Some(event.id),
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            date: event.date.clone(),
            time: event.short_time().unwrap_or_default().to_owned(),
            location: event.location.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self, user_id: Option<UserId>) -> EventPayload {
        EventPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date.clone(),
            time: normalize_time(&self.time),
            location: self.location.clone(),
            user_id,
        }
    }
}

/// Both form drafts. Cleared together whenever the forms hide.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormsState {
    pub create: EventForm,
    pub edit: EventForm,
}

impl FormsState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
