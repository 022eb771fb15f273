//! Dashboard page composing the expense and category sections.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::category_section::CategorySection;
use crate::components::expense_section::ExpenseSection;
use crate::net::api;
use crate::state::session::{SessionState, expire_session};
use crate::util::storage;

/// Dashboard page — welcome header, logout, and the two CRUD sections.
/// Redirects to `/login` whenever the session is anonymous, which also
/// covers teardown after a 401 from any request on this page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let profile_error = RwSignal::new(None::<String>);

    // Redirect to login if not authenticated. Reruns on session change,
    // so a 401-triggered teardown lands here exactly once.
    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Revalidate the persisted session against /users/me on mount. A
    // 401 means the stored token is stale; anything else keeps the
    // cached user and surfaces the failure under the header.
    Effect::new(move || {
        let Some(token) = session.with_untracked(|s| s.token.clone()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::fetch_me(&token).await {
                Ok(user) => {
                    storage::store_user(&user);
                    profile_error.set(None);
                    session.update(|s| {
                        s.user = Some(user);
                        s.loading = false;
                    });
                }
                Err(e) if e.is_auth() => expire_session(session),
                Err(e) => {
                    profile_error.set(Some(e.to_string()));
                    session.update(|s| s.loading = false);
                }
            }
        });
    });

    let welcome = move || {
        session.with(|s| match s.display_name() {
            Some(name) => format!("Welcome, {name}"),
            None => "Welcome".to_owned(),
        })
    };

    let on_logout = move |_| {
        // The redirect effect above handles the navigation.
        expire_session(session);
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{welcome}</h1>
                <button class="btn" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <Show when=move || profile_error.get().is_some()>
                <p class="dashboard-page__error">
                    {move || profile_error.get().unwrap_or_default()}
                </p>
            </Show>

            <div class="dashboard-page__sections">
                <ExpenseSection/>
                <CategorySection/>
            </div>
        </div>
    }
}
