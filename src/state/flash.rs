//! Transient inline messages.
//!
//! Each message area is a `FlashSlot`. Showing a message bumps the slot's
//! generation and the caller schedules `expire` with that generation; an
//! expiry for an older generation is a no-op, so a newer message always gets
//! its full display time.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use crate::net::error::ClientError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    pub text: String,
    pub kind: FlashKind,
}

/// Message areas, one per form plus one for the event list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashTarget {
    Register,
    Login,
    CreateEvent,
    EditEvent,
    EventList,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashSlot {
    current: Option<Flash>,
    generation: u64,
}

impl FlashSlot {
    /// Replace the message and return the generation to expire later.
    pub fn show(&mut self, text: impl Into<String>, kind: FlashKind) -> u64 {
        self.generation += 1;
        self.current = Some(Flash { text: text.into(), kind });
        self.generation
    }

    /// Clear the message if it is still the one from `generation`.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Flash> {
        self.current.as_ref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashState {
    register: FlashSlot,
    login: FlashSlot,
    create_event: FlashSlot,
    edit_event: FlashSlot,
    event_list: FlashSlot,
}

impl FlashState {
    pub fn slot(&self, target: FlashTarget) -> &FlashSlot {
        match target {
            FlashTarget::Register => &self.register,
            FlashTarget::Login => &self.login,
            FlashTarget::CreateEvent => &self.create_event,
            FlashTarget::EditEvent => &self.edit_event,
            FlashTarget::EventList => &self.event_list,
        }
    }

    pub fn slot_mut(&mut self, target: FlashTarget) -> &mut FlashSlot {
        match target {
            FlashTarget::Register => &mut self.register,
            FlashTarget::Login => &mut self.login,
            FlashTarget::CreateEvent => &mut self.create_event,
            FlashTarget::EditEvent => &mut self.edit_event,
            FlashTarget::EventList => &mut self.event_list,
        }
    }

    pub fn success(&mut self, target: FlashTarget, text: impl Into<String>) -> u64 {
        self.slot_mut(target).show(text, FlashKind::Success)
    }

    pub fn error(&mut self, target: FlashTarget, err: &ClientError) -> u64 {
        self.slot_mut(target).show(err.to_string(), FlashKind::Error)
    }

    pub fn expire(&mut self, target: FlashTarget, generation: u64) -> bool {
        self.slot_mut(target).expire(generation)
    }

    /// Hide both auth messages, as when switching auth panels.
    pub fn clear_auth(&mut self) {
        self.register.clear();
        self.login.clear();
    }

    /// Hide both form messages, as when the forms hide.
    pub fn clear_forms(&mut self) {
        self.create_event.clear();
        self.edit_event.clear();
    }
}
