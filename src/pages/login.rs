//! Login page: username-or-email + password.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::LoginRequest;
use crate::state::session::{SessionState, establish_session};

/// Login form. On success the session is established (and persisted)
/// and the user lands on the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username_or_email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Required-field check before any network traffic.
        if username_or_email.get().trim().is_empty() || password.get().is_empty() {
            error.set(Some("Username and password are required".to_owned()));
            return;
        }

        let req = LoginRequest {
            username_or_email: username_or_email.get().trim().to_owned(),
            password: password.get(),
        };
        error.set(None);
        pending.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&req).await {
                Ok(resp) => {
                    establish_session(session, resp);
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1>"Sign in"</h1>
                <form class="auth-page__form" on:submit=on_submit>
                    <label class="auth-page__label">
                        "Username or Email"
                        <input
                            class="auth-page__input"
                            type="text"
                            required
                            prop:value=move || username_or_email.get()
                            on:input=move |ev| username_or_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-page__label">
                        "Password"
                        <input
                            class="auth-page__input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-page__switch">
                    "Don't have an account? " <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
