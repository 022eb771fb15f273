//! Signup page. On success the user is sent to the login screen to
//! sign in with the new credentials.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::SignupRequest;

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if username.get().trim().is_empty()
            || email.get().trim().is_empty()
            || password.get().is_empty()
        {
            error.set(Some("Username, email, and password are required".to_owned()));
            return;
        }

        let req = SignupRequest {
            username: username.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            name: non_blank(name.get()),
            first_name: non_blank(first_name.get()),
            last_name: non_blank(last_name.get()),
            phone_number: non_blank(phone_number.get()),
        };
        error.set(None);
        pending.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::signup(&req).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(e) => error.set(Some(e.to_string())),
            }
            pending.set(false);
        });
    };

    let text_field = move |label: &'static str, value: RwSignal<String>, required: bool| {
        view! {
            <label class="auth-page__label">
                {label}
                <input
                    class="auth-page__input"
                    type="text"
                    required=required
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1>"Create account"</h1>
                <form class="auth-page__form" on:submit=on_submit>
                    <div class="auth-page__row">
                        {text_field("First name", first_name, false)}
                        {text_field("Last name", last_name, false)}
                    </div>
                    {text_field("Display name", name, false)}
                    {text_field("Username", username, true)}
                    <label class="auth-page__label">
                        "Email"
                        <input
                            class="auth-page__input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    {text_field("Phone", phone_number, false)}
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
                        {move || if pending.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-page__switch">
                    "Already have an account? " <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
