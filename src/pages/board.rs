//! The single event board screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anonymous visitors see the auth panels, the filters, and a read-only list.
//! Logged-in users additionally get the create form, per-card actions, and
//! the attendee overlay. The list loads once on mount and after every
//! successful mutation.

use leptos::prelude::*;

use crate::components::attendees_modal::AttendeesModal;
use crate::components::auth_panel::AuthSection;
use crate::components::event_form::EventFormPanel;
use crate::components::event_list::EventList;
use crate::components::filter_bar::FilterBar;
use crate::components::site_header::SiteHeader;
use crate::config::ClientConfig;
use crate::net::api::EventApi;
use crate::net::transport::FetchTransport;
use crate::pages::board_flows::BoardHandle;
use crate::state::session::Session;
use crate::state::ui::{FormPanel, UiState};

#[component]
pub fn BoardPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<Session>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let handle = BoardHandle::new(EventApi::new(config, FetchTransport), session, ui);
    let actions = handle.action_table();

    // Any click that reaches the window came from outside every dropdown.
    #[cfg(feature = "csr")]
    {
        let listener = window_event_listener(leptos::ev::click, move |_| {
            if ui.with_untracked(|u| u.open_tools.is_some()) {
                ui.update(UiState::close_tools);
            }
        });
        on_cleanup(move || listener.remove());
    }

    handle.refresh();

    let authenticated = move || session.with(Session::is_authenticated);
    let form_panel = move || ui.with(|u| u.form_panel);
    let on_close_attendees = Callback::new(move |()| ui.update(UiState::close_attendees));

    view! {
        <div class="board-page">
            <SiteHeader handle=handle />
            <Show when=move || !authenticated()>
                <AuthSection handle=handle />
            </Show>
            <main class="board-page__main">
                <Show when=authenticated>
                    <div class="board-page__toolbar">
                        <button class="btn btn--primary" on:click=move |_| handle.show_create_form()>
                            "Create New Event"
                        </button>
                    </div>
                    <Show when=move || form_panel() == FormPanel::Create>
                        <EventFormPanel handle=handle panel=FormPanel::Create />
                    </Show>
                    <Show when=move || form_panel() == FormPanel::Edit>
                        <EventFormPanel handle=handle panel=FormPanel::Edit />
                    </Show>
                </Show>
                <h2 class="board-page__heading">"Upcoming Events"</h2>
                <FilterBar handle=handle />
                <EventList handle=handle actions=actions />
            </main>
            {move || {
                ui.with(|u| u.attendees.clone())
                    .map(|roster| view! { <AttendeesModal roster=roster on_close=on_close_attendees /> })
            }}
        </div>
    }
}
