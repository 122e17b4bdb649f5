//! Inline transient message bound to one flash slot.

use leptos::prelude::*;

use crate::state::flash::{FlashKind, FlashState, FlashTarget};

#[component]
pub fn FlashMessage(flash: RwSignal<FlashState>, target: FlashTarget) -> impl IntoView {
    move || {
        flash.with(|f| f.slot(target).current().cloned()).map(|message| {
            let class = match message.kind {
                FlashKind::Success => "message message--success",
                FlashKind::Error => "message message--error",
            };
            view! { <p class=class role="status">{message.text}</p> }
        })
    }
}
