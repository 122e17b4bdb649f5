//! Local UI chrome state (auth panels, form panels, dropdowns, overlay).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session and list state so
//! rendering controls can evolve independently of backend data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::types::{Attendee, EventId};

/// Which auth panel is visible in the anonymous layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPanel {
    #[default]
    Closed,
    Register,
    Login,
}

/// Which event form is visible in the authenticated layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPanel {
    #[default]
    Hidden,
    Create,
    Edit,
}

/// Attendee overlay contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttendeeRoster {
    pub event_title: String,
    pub attendees: Vec<Attendee>,
}

impl AttendeeRoster {
    pub const EMPTY_MESSAGE: &'static str = "No one has registered for this event yet.";

    pub fn heading(&self) -> String {
        format!("Attendees for: {}", self.event_title)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub auth_panel: AuthPanel,
    pub form_panel: FormPanel,
    /// The one tools dropdown currently open, if any.
    pub open_tools: Option<EventId>,
    pub attendees: Option<AttendeeRoster>,
}

impl UiState {
    pub fn show_register(&mut self) {
        self.auth_panel = AuthPanel::Register;
    }

    pub fn show_login(&mut self) {
        self.auth_panel = AuthPanel::Login;
    }

    pub fn show_create_form(&mut self) {
        self.form_panel = FormPanel::Create;
    }

    pub fn show_edit_form(&mut self) {
        self.form_panel = FormPanel::Edit;
    }

    pub fn hide_forms(&mut self) {
        self.form_panel = FormPanel::Hidden;
    }

    /// Open the dropdown for `event_id`, closing any other; toggling the open
    /// one closes it.
    pub fn toggle_tools(&mut self, event_id: EventId) {
        self.open_tools = if self.open_tools == Some(event_id) { None } else { Some(event_id) };
    }

    /// Click landed outside every dropdown and toggle.
    pub fn close_tools(&mut self) {
        self.open_tools = None;
    }

    pub fn is_tools_open(&self, event_id: EventId) -> bool {
        self.open_tools == Some(event_id)
    }

    pub fn open_attendees(&mut self, roster: AttendeeRoster) {
        self.attendees = Some(roster);
    }

    pub fn close_attendees(&mut self) {
        self.attendees = None;
    }

    /// Reset everything the authenticated layout owned.
    pub fn reset_for_logout(&mut self) {
        self.form_panel = FormPanel::Hidden;
        self.open_tools = None;
        self.attendees = None;
    }
}
