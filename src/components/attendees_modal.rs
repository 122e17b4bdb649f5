//! Overlay listing who attends an event.

use leptos::prelude::*;

use crate::net::types::Attendee;
use crate::state::ui::AttendeeRoster;

/// Closes on the close button, a backdrop click, or Escape.
#[component]
pub fn AttendeesModal(roster: AttendeeRoster, on_close: Callback<()>) -> impl IntoView {
    let modal_ref = NodeRef::<leptos::html::Div>::new();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(modal) = modal_ref.get() {
            let _ = modal.focus();
        }
    });

    let heading = roster.heading();
    let body = if roster.attendees.is_empty() {
        view! { <p class="attendees-modal__empty">{AttendeeRoster::EMPTY_MESSAGE}</p> }.into_any()
    } else {
        view! {
            <ul class="attendees-modal__list">
                {roster.attendees.iter().map(|a| view! { <li>{Attendee::label(a)}</li> }).collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="attendees-modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="attendees-modal"
                node_ref=modal_ref
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="attendees-modal__header">
                    <h2>{heading}</h2>
                    <button
                        class="attendees-modal__close"
                        title="Close attendees"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>
                {body}
            </div>
        </div>
    }
}
