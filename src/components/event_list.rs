//! Event list area with delegated card-control clicks.
//!
//! DESIGN
//! ======
//! One click listener sits on the list. It finds the nearest control with a
//! `data-action` tag, resolves the card it belongs to, and hands both to the
//! `ActionTable`. Handled clicks stop here, so the window-level listener that
//! closes tools dropdowns never sees them; the table's handlers settle the
//! dropdowns themselves.

use leptos::prelude::*;

use crate::components::event_card::EventCardView;
use crate::components::flash_message::FlashMessage;
use crate::pages::board_flows::BoardHandle;
use crate::state::events::{EMPTY_PLACEHOLDER, EventListView};
use crate::state::flash::FlashTarget;
use crate::util::dispatch::ActionTable;

#[component]
pub fn EventList(handle: BoardHandle, actions: ActionTable) -> impl IntoView {
    let events = handle.events;
    let ui = handle.ui;

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            use crate::util::dispatch::CardTarget;

            let Some(delegated) = delegated_click(&ev) else {
                return;
            };
            ev.stop_propagation();
            let Some((tag, event_id)) = delegated else {
                return;
            };
            let target = events.with_untracked(|s| {
                s.view.find(event_id).map(|card| CardTarget { event_id, title: card.event.title.clone() })
            });
            if let Some(target) = target {
                actions.dispatch_tag(&tag, &target);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, &actions);
        }
    };

    let body = move || {
        events.with(|s| match &s.view {
            EventListView::Loading => view! { <p class="event-list__note">"Loading events..."</p> }.into_any(),
            EventListView::Empty => view! { <p class="event-list__note">{EMPTY_PLACEHOLDER}</p> }.into_any(),
            EventListView::Failed(_) => {
                let text = s.view.failure_text().unwrap_or_default();
                view! { <p class="message message--error">{text}</p> }.into_any()
            }
            EventListView::Cards(cards) => cards
                .iter()
                .map(|card| {
                    let event_id = card.event.id;
                    let tools_open = Signal::derive(move || ui.with(|u| u.is_tools_open(event_id)));
                    view! { <EventCardView card=card.clone() tools_open=tools_open /> }
                })
                .collect_view()
                .into_any(),
        })
    };

    view! {
        <section class="events-section">
            <FlashMessage flash=handle.flash target=FlashTarget::EventList />
            <div class="event-list" on:click=on_click>
                {body}
            </div>
        </section>
    }
}

/// `None` when the click hit neither a tagged control nor an open dropdown.
/// Otherwise the control's tag and event id, if it had both.
#[cfg(feature = "csr")]
fn delegated_click(ev: &leptos::ev::MouseEvent) -> Option<Option<(String, crate::net::types::EventId)>> {
    let origin: web_sys::Element = event_target(ev);
    let control = origin.closest("[data-action], .tools-dropdown").ok().flatten()?;
    let tag = control.get_attribute("data-action");
    let event_id = control.get_attribute("data-event-id").and_then(|id| id.parse().ok());
    Some(tag.zip(event_id))
}
