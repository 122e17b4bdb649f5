//! Register and login panels shown to anonymous visitors.

use leptos::prelude::*;

use crate::components::flash_message::FlashMessage;
use crate::pages::board_flows::BoardHandle;
use crate::state::flash::FlashTarget;
use crate::state::ui::AuthPanel;

#[component]
pub fn AuthSection(handle: BoardHandle) -> impl IntoView {
    let ui = handle.ui;
    let panel = move || ui.with(|u| u.auth_panel);

    view! {
        <section class="auth-section">
            <Show when=move || panel() == AuthPanel::Register>
                <RegisterForm handle=handle />
            </Show>
            <Show when=move || panel() == AuthPanel::Login>
                <LoginForm handle=handle />
            </Show>
            <FlashMessage flash=handle.flash target=FlashTarget::Register />
            <FlashMessage flash=handle.flash target=FlashTarget::Login />
        </section>
    }
}

#[component]
fn RegisterForm(handle: BoardHandle) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        handle.register(username.get(), email.get(), password.get());
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Register"</h2>
            <input
                class="auth-form__input"
                type="text"
                placeholder="Username"
                required
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                class="auth-form__input"
                type="email"
                placeholder="Email"
                required
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="auth-form__input"
                type="password"
                placeholder="Password"
                required
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit">"Register"</button>
        </form>
    }
}

#[component]
fn LoginForm(handle: BoardHandle) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        handle.login(username.get(), password.get());
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Login"</h2>
            <input
                class="auth-form__input"
                type="text"
                placeholder="Username"
                required
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                class="auth-form__input"
                type="password"
                placeholder="Password"
                required
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit">"Login"</button>
        </form>
    }
}
