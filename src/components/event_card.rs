//! One event card.
//!
//! Controls only carry `data-action` and `data-event-id`; the surrounding
//! list routes clicks through the action table.

use leptos::prelude::*;

use crate::state::events::{AttendControl, EventCard};
use crate::util::dispatch::CardAction;

#[component]
pub fn EventCardView(card: EventCard, #[prop(into)] tools_open: Signal<bool>) -> impl IntoView {
    let event_id = card.event.id.to_string();
    let affordances = card.affordances;

    let attend = match affordances.attend {
        AttendControl::Hidden => None,
        AttendControl::Attend => Some(
            view! {
                <button
                    class="btn btn--success"
                    data-action=CardAction::Attend.tag()
                    data-event-id=event_id.clone()
                >
                    "Attend"
                </button>
            }
            .into_any(),
        ),
        AttendControl::Attending => Some(view! { <button class="btn btn--muted" disabled>"Attending"</button> }.into_any()),
    };

    let view_attendees = affordances.view_attendees.then(|| {
        view! {
            <button
                class="btn btn--primary"
                data-action=CardAction::ViewAttendees.tag()
                data-event-id=event_id.clone()
            >
                "View Attendees"
            </button>
        }
    });

    let owner_tools = affordances.owner_tools.then(|| {
        let edit_id = event_id.clone();
        let delete_id = event_id.clone();
        view! {
            <div class="tools">
                <button
                    class="btn btn--secondary tools__toggle"
                    data-action=CardAction::ToggleTools.tag()
                    data-event-id=event_id.clone()
                >
                    "Tools ▾"
                </button>
                <Show when=move || tools_open.get()>
                    <div class="tools-dropdown" role="menu">
                        <button
                            class="tools-dropdown__item"
                            role="menuitem"
                            data-action=CardAction::Edit.tag()
                            data-event-id=edit_id.clone()
                        >
                            "Edit"
                        </button>
                        <button
                            class="tools-dropdown__item tools-dropdown__item--danger"
                            role="menuitem"
                            data-action=CardAction::Delete.tag()
                            data-event-id=delete_id.clone()
                        >
                            "Delete"
                        </button>
                    </div>
                </Show>
            </div>
        }
    });

    view! {
        <article class="event-card">
            <div class="event-card__body">
                <h3 class="event-card__title">{card.event.title.clone()}</h3>
                <p><strong>"Description: "</strong>{card.description_text().to_owned()}</p>
                <p><strong>"Date: "</strong>{card.when_text()}</p>
                <p><strong>"Location: "</strong>{card.location_text().to_owned()}</p>
                <p><small class="event-card__creator">{card.creator_text()}</small></p>
            </div>
            {(!affordances.is_empty()).then(|| {
                view! { <div class="event-card__actions">{attend}{view_attendees}{owner_tools}</div> }
            })}
        </article>
    }
}
