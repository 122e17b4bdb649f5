//! Event-list view model.
//!
//! DESIGN
//! ======
//! Each refresh produces a brand-new `EventListView` from the fetched events
//! and the attendance set; nothing is patched in place. Refreshes are
//! ticketed so a slow response can never overwrite a newer one.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::collections::HashSet;

use crate::net::types::{AttendedEvent, Event, EventId};
use crate::state::session::Session;

/// Shown instead of cards when a fetch returns no events.
pub const EMPTY_PLACEHOLDER: &str = "No events found matching your criteria. Try adjusting your filters.";

/// Event ids the session's user attends, rebuilt on every refresh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttendanceSet(HashSet<EventId>);

impl AttendanceSet {
    pub fn contains(&self, event_id: EventId) -> bool {
        self.0.contains(&event_id)
    }
}

impl FromIterator<AttendedEvent> for AttendanceSet {
    fn from_iter<I: IntoIterator<Item = AttendedEvent>>(iter: I) -> Self {
        Self(iter.into_iter().map(|row| row.event_id).collect())
    }
}

/// State of the attend control on one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttendControl {
    /// Anonymous session: no control at all.
    Hidden,
    Attend,
    /// Disabled indicator; the user already attends.
    Attending,
}

/// Which controls a card renders for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affordances {
    pub attend: AttendControl,
    pub view_attendees: bool,
    /// Edit/delete dropdown, only for the event's creator.
    pub owner_tools: bool,
}

impl Affordances {
    pub fn for_event(session: &Session, event: &Event, attending: &AttendanceSet) -> Self {
        if !session.is_authenticated() {
            return Self { attend: AttendControl::Hidden, view_attendees: false, owner_tools: false };
        }
        let attend = if attending.contains(event.id) { AttendControl::Attending } else { AttendControl::Attend };
        Self { attend, view_attendees: true, owner_tools: session.owns(event.created_by_user_id) }
    }

    /// True when the card renders no controls at all.
    pub fn is_empty(&self) -> bool {
        self.attend == AttendControl::Hidden && !self.view_attendees && !self.owner_tools
    }
}

/// One rendered event.
#[derive(Clone, Debug, PartialEq)]
pub struct EventCard {
    pub event: Event,
    pub affordances: Affordances,
}

impl EventCard {
    pub fn description_text(&self) -> &str {
        or_na(self.event.description.as_deref())
    }

    pub fn location_text(&self) -> &str {
        or_na(self.event.location.as_deref())
    }

    /// `YYYY-MM-DD` followed by `HH:MM` when a time is set.
    pub fn when_text(&self) -> String {
        match self.event.short_time() {
            Some(time) => format!("{} {time}", self.event.date),
            None => self.event.date.clone(),
        }
    }

    pub fn creator_text(&self) -> String {
        format!("Created by User ID: {}", self.event.created_by_user_id)
    }
}

fn or_na(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("N/A")
}

/// What the list area shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EventListView {
    #[default]
    Loading,
    /// The single placeholder line.
    Empty,
    Cards(Vec<EventCard>),
    /// The event fetch itself failed; carries the reason.
    Failed(String),
}

impl EventListView {
    /// Rebuild the list from one fetch.
    pub fn build(events: Vec<Event>, session: &Session, attending: &AttendanceSet) -> Self {
        if events.is_empty() {
            return Self::Empty;
        }
        Self::Cards(
            events
                .into_iter()
                .map(|event| {
                    let affordances = Affordances::for_event(session, &event, attending);
                    EventCard { event, affordances }
                })
                .collect(),
        )
    }

    pub fn cards(&self) -> &[EventCard] {
        match self {
            Self::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn find(&self, event_id: EventId) -> Option<&EventCard> {
        self.cards().iter().find(|card| card.event.id == event_id)
    }

    pub fn failure_text(&self) -> Option<String> {
        match self {
            Self::Failed(reason) => Some(format!("Failed to load events: {reason}")),
            _ => None,
        }
    }
}

/// Monotonic refresh ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// List state plus refresh sequencing.
#[derive(Clone, Debug, Default)]
pub struct EventsState {
    pub view: EventListView,
    issued: u64,
    applied: u64,
}

impl EventsState {
    /// Take the next ticket for a refresh about to start.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        RefreshTicket(self.issued)
    }

    /// Install `view` unless a newer refresh already landed. Returns whether
    /// the view was applied.
    pub fn apply(&mut self, ticket: RefreshTicket, view: EventListView) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        self.view = view;
        true
    }
}
