//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::ClientConfig;
use crate::pages::board::BoardPage;
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;

/// Provides the config, session, and UI contexts, then renders the board.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    leptos::logging::log!("event board using API at {}", config.api_base_url);

    let session = RwSignal::new(Session::load(&BrowserStorage));
    let ui = RwSignal::new(UiState::default());

    provide_context(config);
    provide_context(session);
    provide_context(ui);

    view! {
        <Title text="Event Board"/>
        <BoardPage/>
    }
}
