//! Page header with the session controls.

use leptos::prelude::*;

use crate::pages::board_flows::BoardHandle;
use crate::state::ui::AuthPanel;

#[component]
pub fn SiteHeader(handle: BoardHandle) -> impl IntoView {
    let session = handle.session;

    view! {
        <header class="site-header">
            <h1 class="site-header__title">"Event Board"</h1>
            <nav class="site-header__nav">
                <Show
                    when=move || session.with(|s| s.is_authenticated())
                    fallback=move || {
                        view! {
                            <button class="btn" on:click=move |_| handle.show_auth_panel(AuthPanel::Register)>
                                "Register"
                            </button>
                            <button class="btn" on:click=move |_| handle.show_auth_panel(AuthPanel::Login)>
                                "Login"
                            </button>
                        }
                    }
                >
                    <span class="site-header__welcome">
                        {move || session.with(|s| s.welcome().unwrap_or_default())}
                    </span>
                    <button class="btn btn--secondary" on:click=move |_| handle.logout()>
                        "Logout"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
