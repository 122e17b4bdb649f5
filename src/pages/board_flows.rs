//! Board page orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call into `BoardHandle` from their event handlers. Each method
//! spawns the matching flow from `services` and applies the outcome to the
//! page signals and flash slots. The handle is `Copy`, so closures capture it
//! by value.
//!
//! What an outcome does to the page (which forms hide, which flash slot
//! speaks, which dropdown closes) is decided by the pure `settle_*`
//! functions at the bottom over a `PageModels` borrow, so it is testable
//! without a browser.

#[cfg(test)]
#[path = "board_flows_test.rs"]
mod board_flows_test;

use leptos::prelude::*;

use crate::config::FLASH_DURATION_MS;
use crate::net::api::{EventApi, EventFilter};
use crate::net::error::{ClientError, ClientResult};
use crate::net::transport::FetchTransport;
use crate::net::types::EventId;
use crate::services::auth::LoginOutcome;
use crate::services::{attendees, auth, listing, mutations};
use crate::state::events::EventsState;
use crate::state::flash::{FlashState, FlashTarget};
use crate::state::forms::FormsState;
use crate::state::session::Session;
use crate::state::ui::{AuthPanel, UiState};
use crate::util::browser::{confirm, schedule, spawn_task};
use crate::util::dispatch::{ActionTable, CardAction, CardTarget};
use crate::util::storage::BrowserStorage;

pub const LOGOUT_MESSAGE: &str = "Logged out successfully.";

#[derive(Clone, Copy)]
pub struct BoardHandle {
    api: StoredValue<EventApi<FetchTransport>>,
    pub session: RwSignal<Session>,
    pub ui: RwSignal<UiState>,
    pub forms: RwSignal<FormsState>,
    pub events: RwSignal<EventsState>,
    pub flash: RwSignal<FlashState>,
    pub filter: RwSignal<EventFilter>,
}

impl BoardHandle {
    pub fn new(api: EventApi<FetchTransport>, session: RwSignal<Session>, ui: RwSignal<UiState>) -> Self {
        Self {
            api: StoredValue::new(api),
            session,
            ui,
            forms: RwSignal::new(FormsState::default()),
            events: RwSignal::new(EventsState::default()),
            flash: RwSignal::new(FlashState::default()),
            filter: RwSignal::new(EventFilter::default()),
        }
    }

    fn api(self) -> EventApi<FetchTransport> {
        self.api.get_value()
    }

    // =========================================================
    // Flash messages
    // =========================================================

    pub fn notify_error(self, target: FlashTarget, err: &ClientError) {
        if let Some(generation) = self.flash.try_update(|f| f.error(target, err)) {
            self.expire_later(target, generation);
        }
    }

    /// Run `f` over copies of the page models and write back whatever changed.
    fn settle<R>(self, f: impl FnOnce(&mut PageModels<'_>) -> R) -> R {
        let mut ui = self.ui.get_untracked();
        let mut forms = self.forms.get_untracked();
        let mut flash = self.flash.get_untracked();
        let result = f(&mut PageModels { ui: &mut ui, forms: &mut forms, flash: &mut flash });
        write_if_changed(self.ui, ui);
        write_if_changed(self.forms, forms);
        write_if_changed(self.flash, flash);
        result
    }

    /// Settle an outcome that posted a flash, then schedule its expiry.
    fn settle_and_notify(self, f: impl FnOnce(&mut PageModels<'_>) -> (FlashTarget, u64)) {
        let (target, generation) = self.settle(f);
        self.expire_later(target, generation);
    }

    fn expire_later(self, target: FlashTarget, generation: u64) {
        let flash = self.flash;
        schedule(FLASH_DURATION_MS, move || {
            flash.update(|f| {
                f.expire(target, generation);
            });
        });
    }

    // =========================================================
    // Event list
    // =========================================================

    /// Refetch the list with the current filter and session.
    pub fn refresh(self) {
        let api = self.api();
        spawn_task(async move {
            let Some(ticket) = self.events.try_update(EventsState::begin_refresh) else {
                return;
            };
            let session = self.session.get_untracked();
            let filter = self.filter.get_untracked();
            let view = listing::refresh(&api, &session, &filter).await;
            self.events.update(|s| {
                s.apply(ticket, view);
            });
        });
    }

    async fn reload_after<R>(self, api: &EventApi<FetchTransport>, outcome: &ClientResult<R>) {
        let Some(ticket) = self.events.try_update(EventsState::begin_refresh) else {
            return;
        };
        let session = self.session.get_untracked();
        let filter = self.filter.get_untracked();
        if let Some(view) = listing::refresh_after(api, &session, &filter, outcome).await {
            self.events.update(|s| {
                s.apply(ticket, view);
            });
        }
    }

    pub fn clear_filters(self) {
        self.filter.set(EventFilter::default());
        self.refresh();
    }

    // =========================================================
    // Session
    // =========================================================

    pub fn show_auth_panel(self, panel: AuthPanel) {
        self.settle(|m| show_auth_panel(m, panel));
    }

    pub fn register(self, username: String, email: String, password: String) {
        let api = self.api();
        spawn_task(async move {
            let outcome = auth::register(&api, &username, &email, &password).await;
            self.settle_and_notify(|m| settle_register(m, &outcome));
        });
    }

    pub fn login(self, username: String, password: String) {
        let api = self.api();
        let session = self.session.get_untracked();
        spawn_task(async move {
            let outcome = auth::login(&api, &BrowserStorage, session, &username, &password).await;
            self.settle_and_notify(|m| settle_login(m, &outcome));
            if let Ok(outcome) = outcome {
                self.session.set(outcome.session);
                self.refresh();
            }
        });
    }

    pub fn logout(self) {
        let session = auth::logout(&BrowserStorage, self.session.get_untracked());
        self.session.set(session);
        let mut filter = self.filter.get_untracked();
        self.settle_and_notify(|m| settle_logout(m, &mut filter));
        self.filter.set(filter);
        self.refresh();
    }

    // =========================================================
    // Event forms
    // =========================================================

    pub fn hide_forms(self) {
        self.settle(hide_forms);
    }

    pub fn show_create_form(self) {
        self.settle(|m| {
            hide_forms(m);
            m.ui.show_create_form();
        });
    }

    pub fn open_edit(self, event_id: EventId) {
        self.hide_forms();
        let api = self.api();
        spawn_task(async move {
            match mutations::load_for_edit(&api, event_id).await {
                Ok(form) => self.settle(|m| {
                    m.forms.edit = form;
                    m.ui.show_edit_form();
                }),
                Err(e) => self.notify_error(FlashTarget::EventList, &e),
            }
        });
    }

    pub fn submit_create(self) {
        let api = self.api();
        let session = self.session.get_untracked();
        let form = self.forms.with_untracked(|f| f.create.clone());
        spawn_task(async move {
            let outcome = mutations::create(&api, &session, &form).await;
            self.finish_mutation(&api, FlashTarget::CreateEvent, outcome).await;
        });
    }

    pub fn submit_edit(self) {
        let form = self.forms.with_untracked(|f| f.edit.clone());
        let Some(event_id) = form.event_id else {
            return;
        };
        let api = self.api();
        let session = self.session.get_untracked();
        spawn_task(async move {
            let outcome = mutations::update(&api, &session, event_id, &form).await;
            self.finish_mutation(&api, FlashTarget::EditEvent, outcome).await;
        });
    }

    async fn finish_mutation(self, api: &EventApi<FetchTransport>, error_target: FlashTarget, outcome: ClientResult<String>) {
        self.settle_and_notify(|m| settle_mutation(m, &outcome, error_target));
        self.reload_after(api, &outcome).await;
    }

    // =========================================================
    // Card actions
    // =========================================================

    pub fn delete(self, event_id: EventId) {
        let api = self.api();
        let session = self.session.get_untracked();
        spawn_task(async move {
            let outcome = mutations::delete(&api, &session, event_id, confirm).await;
            if let Some(outcome) = confirmed(outcome) {
                self.finish_mutation(&api, FlashTarget::EventList, outcome).await;
            }
        });
    }

    pub fn attend(self, event_id: EventId) {
        let api = self.api();
        let session = self.session.get_untracked();
        spawn_task(async move {
            let outcome = mutations::attend(&api, &session, event_id).await;
            self.finish_mutation(&api, FlashTarget::EventList, outcome).await;
        });
    }

    pub fn show_attendees(self, target: CardTarget) {
        let api = self.api();
        spawn_task(async move {
            match attendees::roster(&api, target.event_id, &target.title).await {
                Ok(roster) => self.ui.update(|ui| ui.open_attendees(roster)),
                Err(e) => self.notify_error(FlashTarget::EventList, &e),
            }
        });
    }

    /// Handlers for every control rendered inside a card. Each one first
    /// settles the tools dropdowns.
    pub fn action_table(self) -> ActionTable {
        let chrome = move |action: CardAction, target: &CardTarget| {
            self.ui.update(|ui| settle_card_action(ui, action, target.event_id));
        };
        ActionTable::new()
            .on(CardAction::Edit, move |target| {
                chrome(CardAction::Edit, target);
                self.open_edit(target.event_id);
            })
            .on(CardAction::Delete, move |target| {
                chrome(CardAction::Delete, target);
                self.delete(target.event_id);
            })
            .on(CardAction::Attend, move |target| {
                chrome(CardAction::Attend, target);
                self.attend(target.event_id);
            })
            .on(CardAction::ViewAttendees, move |target| {
                chrome(CardAction::ViewAttendees, target);
                self.show_attendees(target.clone());
            })
            .on(CardAction::ToggleTools, move |target| chrome(CardAction::ToggleTools, target))
    }
}

fn write_if_changed<T>(signal: RwSignal<T>, value: T)
where
    T: PartialEq + Send + Sync + 'static,
{
    if signal.with_untracked(|current| *current != value) {
        signal.set(value);
    }
}

// =============================================================
// Outcome decisions
// =============================================================

/// The page models a flow outcome can touch, borrowed together.
pub(crate) struct PageModels<'a> {
    pub ui: &'a mut UiState,
    pub forms: &'a mut FormsState,
    pub flash: &'a mut FlashState,
}

/// Hide and clear both forms along with their messages.
pub(crate) fn hide_forms(m: &mut PageModels<'_>) {
    m.ui.hide_forms();
    m.forms.reset();
    m.flash.clear_forms();
}

/// Switch auth panels; any switch hides both auth messages.
pub(crate) fn show_auth_panel(m: &mut PageModels<'_>, panel: AuthPanel) {
    match panel {
        AuthPanel::Register => m.ui.show_register(),
        AuthPanel::Login => m.ui.show_login(),
        AuthPanel::Closed => m.ui.auth_panel = AuthPanel::Closed,
    }
    m.flash.clear_auth();
}

/// Success moves the visitor on to the login panel.
pub(crate) fn settle_register(m: &mut PageModels<'_>, outcome: &ClientResult<String>) -> (FlashTarget, u64) {
    let target = FlashTarget::Register;
    match outcome {
        Ok(message) => {
            show_auth_panel(m, AuthPanel::Login);
            (target, m.flash.success(target, message.clone()))
        }
        Err(e) => (target, m.flash.error(target, e)),
    }
}

/// Success closes the auth panels and greets in the list area; failure stays
/// in the login panel.
pub(crate) fn settle_login(m: &mut PageModels<'_>, outcome: &ClientResult<LoginOutcome>) -> (FlashTarget, u64) {
    match outcome {
        Ok(outcome) => {
            show_auth_panel(m, AuthPanel::Closed);
            let target = FlashTarget::EventList;
            (target, m.flash.success(target, outcome.message.clone()))
        }
        Err(e) => (FlashTarget::Login, m.flash.error(FlashTarget::Login, e)),
    }
}

/// Drop everything the authenticated layout owned, including the filters.
pub(crate) fn settle_logout(m: &mut PageModels<'_>, filter: &mut EventFilter) -> (FlashTarget, u64) {
    m.ui.reset_for_logout();
    hide_forms(m);
    *filter = EventFilter::default();
    (FlashTarget::Login, m.flash.success(FlashTarget::Login, LOGOUT_MESSAGE))
}

/// Any successful mutation clears and hides both forms and reports in the
/// list area. A failure leaves the forms untouched and reports in
/// `error_target`.
pub(crate) fn settle_mutation(
    m: &mut PageModels<'_>,
    outcome: &ClientResult<String>,
    error_target: FlashTarget,
) -> (FlashTarget, u64) {
    match outcome {
        Ok(message) => {
            hide_forms(m);
            let target = FlashTarget::EventList;
            (target, m.flash.success(target, message.clone()))
        }
        Err(e) => (error_target, m.flash.error(error_target, e)),
    }
}

/// A declined delete prompt yields nothing to settle.
pub(crate) fn confirmed(outcome: ClientResult<Option<String>>) -> Option<ClientResult<String>> {
    outcome.transpose()
}

/// Toggling opens or closes that card's dropdown; every other card control
/// closes them all.
pub(crate) fn settle_card_action(ui: &mut UiState, action: CardAction, event_id: EventId) {
    match action {
        CardAction::ToggleTools => ui.toggle_tools(event_id),
        _ => ui.close_tools(),
    }
}
