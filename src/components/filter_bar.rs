//! Search and location filter inputs.

use leptos::prelude::*;

use crate::pages::board_flows::BoardHandle;

#[component]
pub fn FilterBar(handle: BoardHandle) -> impl IntoView {
    let filter = handle.filter;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        handle.refresh();
    };

    view! {
        <form class="filter-bar" on:submit=on_submit>
            <input
                class="filter-bar__input"
                type="search"
                placeholder="Search title or description"
                prop:value=move || filter.with(|f| f.query.clone())
                on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
            />
            <input
                class="filter-bar__input"
                type="text"
                placeholder="Filter by location"
                prop:value=move || filter.with(|f| f.location.clone())
                on:input=move |ev| filter.update(|f| f.location = event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit">"Apply Filters"</button>
            <button class="btn btn--secondary" type="button" on:click=move |_| handle.clear_filters()>
                "Clear Filters"
            </button>
        </form>
    }
}
