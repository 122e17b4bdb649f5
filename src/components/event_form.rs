//! Create and edit event forms.
//!
//! Both panels share one layout; `FormPanel` picks which draft in
//! `FormsState` the inputs read and write.

use leptos::prelude::*;

use crate::components::flash_message::FlashMessage;
use crate::pages::board_flows::BoardHandle;
use crate::state::flash::FlashTarget;
use crate::state::forms::{EventForm, FormsState};
use crate::state::ui::FormPanel;

#[derive(Clone, Copy)]
enum Field {
    Title,
    Description,
    Date,
    Time,
    Location,
}

impl Field {
    fn value(self, form: &EventForm) -> String {
        match self {
            Self::Title => form.title.clone(),
            Self::Description => form.description.clone(),
            Self::Date => form.date.clone(),
            Self::Time => form.time.clone(),
            Self::Location => form.location.clone(),
        }
    }

    fn slot(self, form: &mut EventForm) -> &mut String {
        match self {
            Self::Title => &mut form.title,
            Self::Description => &mut form.description,
            Self::Date => &mut form.date,
            Self::Time => &mut form.time,
            Self::Location => &mut form.location,
        }
    }
}

fn draft(forms: &FormsState, panel: FormPanel) -> &EventForm {
    if panel == FormPanel::Edit { &forms.edit } else { &forms.create }
}

fn draft_mut(forms: &mut FormsState, panel: FormPanel) -> &mut EventForm {
    if panel == FormPanel::Edit { &mut forms.edit } else { &mut forms.create }
}

#[component]
pub fn EventFormPanel(handle: BoardHandle, panel: FormPanel) -> impl IntoView {
    let forms = handle.forms;
    let (heading, submit_label, flash_target) = match panel {
        FormPanel::Edit => ("Edit Event", "Update Event", FlashTarget::EditEvent),
        _ => ("Create New Event", "Create Event", FlashTarget::CreateEvent),
    };

    let value = move |field: Field| move || forms.with(|f| field.value(draft(f, panel)));
    let input = move |field: Field| {
        move |ev: leptos::ev::Event| {
            let text = event_target_value(&ev);
            forms.update(|f| *field.slot(draft_mut(f, panel)) = text);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if panel == FormPanel::Edit {
            handle.submit_edit();
        } else {
            handle.submit_create();
        }
    };

    view! {
        <form class="event-form" on:submit=on_submit>
            <h2>{heading}</h2>
            <input
                class="event-form__input"
                type="text"
                placeholder="Title"
                required
                prop:value=value(Field::Title)
                on:input=input(Field::Title)
            />
            <textarea
                class="event-form__input"
                placeholder="Description"
                prop:value=value(Field::Description)
                on:input=input(Field::Description)
            ></textarea>
            <input
                class="event-form__input"
                type="date"
                required
                prop:value=value(Field::Date)
                on:input=input(Field::Date)
            />
            <input
                class="event-form__input"
                type="time"
                prop:value=value(Field::Time)
                on:input=input(Field::Time)
            />
            <input
                class="event-form__input"
                type="text"
                placeholder="Location"
                prop:value=value(Field::Location)
                on:input=input(Field::Location)
            />
            <div class="event-form__actions">
                <button class="btn btn--primary" type="submit">{submit_label}</button>
                <button class="btn btn--secondary" type="button" on:click=move |_| handle.hide_forms()>
                    "Cancel"
                </button>
            </div>
            <FlashMessage flash=handle.flash target=flash_target />
        </form>
    }
}
