//! Action routing for controls rendered inside event cards.
//!
//! DESIGN
//! ======
//! Cards never call flows directly. Each control carries an action tag and
//! the event it belongs to; one table maps the tag to its handler, so adding
//! an action means adding a row rather than another branch.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::collections::HashMap;
use std::sync::Arc;

use crate::net::types::EventId;

/// Actions a card control can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardAction {
    Edit,
    Delete,
    Attend,
    ViewAttendees,
    ToggleTools,
}

const ACTION_TAGS: &[(&str, CardAction)] = &[
    ("edit", CardAction::Edit),
    ("delete", CardAction::Delete),
    ("attend", CardAction::Attend),
    ("view-attendees", CardAction::ViewAttendees),
    ("toggle-tools", CardAction::ToggleTools),
];

impl CardAction {
    /// Stable tag rendered into the control's `data-action` attribute.
    pub fn tag(self) -> &'static str {
        ACTION_TAGS
            .iter()
            .find(|(_, action)| *action == self)
            .map_or("", |(tag, _)| tag)
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        ACTION_TAGS
            .iter()
            .find(|(candidate, _)| *candidate == tag)
            .map(|(_, action)| *action)
    }
}

/// The entity a control acts on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardTarget {
    pub event_id: EventId,
    pub title: String,
}

type Handler = Arc<dyn Fn(&CardTarget) + Send + Sync>;

/// Lookup table from action to handler.
#[derive(Clone, Default)]
pub struct ActionTable {
    handlers: HashMap<CardAction, Handler>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `action`, replacing any previous one.
    #[must_use]
    pub fn on<F>(mut self, action: CardAction, handler: F) -> Self
    where
        F: Fn(&CardTarget) + Send + Sync + 'static,
    {
        self.handlers.insert(action, Arc::new(handler));
        self
    }

    /// Run the handler for `action`. Returns false when none is registered.
    pub fn dispatch(&self, action: CardAction, target: &CardTarget) -> bool {
        match self.handlers.get(&action) {
            Some(handler) => {
                handler(target);
                true
            }
            None => false,
        }
    }

    /// Resolve a raw tag and dispatch it. Unknown tags are not handled.
    pub fn dispatch_tag(&self, tag: &str, target: &CardTarget) -> bool {
        CardAction::from_tag(tag).is_some_and(|action| self.dispatch(action, target))
    }
}
