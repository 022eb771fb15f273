//! Category list + draft form.
//!
//! One page of categories is shown at a time with the draft form above
//! it. The form is blank (create mode) or mirrors a selected row (edit
//! mode); after any successful mutation the draft resets and the list
//! reloads. On a failed reload the previous rows stay visible with the
//! error alongside.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination::Pagination;
use crate::net::api;
use crate::net::query::ListQuery;
use crate::net::types::{Category, CategoryType};
use crate::state::category_form::CategoryDraft;
use crate::state::latest::Latest;
use crate::state::pager::Pager;
use crate::state::session::{SessionState, expire_session};

#[component]
pub fn CategorySection() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let items = RwSignal::new(Vec::<Category>::new());
    let pager = RwSignal::new(Pager::default());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let latest = RwSignal::new(Latest::default());

    let form = RwSignal::new(CategoryDraft::default());
    let form_error = RwSignal::new(None::<String>);
    let pending_delete = RwSignal::new(None::<Category>);

    let load = move || {
        let Some(token) = session.with_untracked(|s| s.token.clone()) else {
            return;
        };
        let p = pager.get_untracked();
        let query = ListQuery::new(p.page, p.size, "name,asc")
            .filter("type", CategoryType::Expense.as_str());
        let ticket = latest.try_update(Latest::issue).unwrap_or_default();
        loading.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            let result = api::fetch_categories(&token, &query).await;
            // A newer request owns the view now; drop this response.
            if !latest.get_untracked().is_current(ticket) {
                return;
            }
            loading.set(false);
            match result {
                Ok(page) => {
                    items.set(page.content);
                    pager.update(|pg| pg.apply(page.total_pages));
                }
                Err(e) if e.is_auth() => expire_session(session),
                // Previous rows stay in place on failure.
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    // Refetch whenever the page index or size changes (and on mount).
    // The memo keeps total_pages updates from retriggering the load.
    let page_key = Memo::new(move |_| pager.with(|p| (p.page, p.size)));
    Effect::new(move || {
        page_key.track();
        load();
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = form.get_untracked();
        let payload = match draft.validate() {
            Ok(p) => p,
            Err(msg) => {
                form_error.set(Some(msg));
                return;
            }
        };
        let Some(token) = session.with_untracked(|s| s.token.clone()) else {
            return;
        };
        form_error.set(None);

        leptos::task::spawn_local(async move {
            let result = match draft.id {
                Some(id) => api::update_category(&token, id, &payload).await.map(|_| ()),
                None => api::create_category(&token, &payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    form.set(CategoryDraft::default());
                    load();
                }
                Err(e) if e.is_auth() => expire_session(session),
                // Keep the draft so the user can fix and retry.
                Err(e) => form_error.set(Some(e.to_string())),
            }
        });
    };

    let on_reset = move |_| {
        form.set(CategoryDraft::default());
        form_error.set(None);
    };

    let on_cancel_delete = Callback::new(move |()| pending_delete.set(None));
    let on_confirm_delete = Callback::new(move |()| {
        let Some(category) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let Some(token) = session.with_untracked(|s| s.token.clone()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_category(&token, category.id).await {
                Ok(()) => load(),
                Err(e) if e.is_auth() => expire_session(session),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    let rows = move || {
        items
            .get()
            .into_iter()
            .map(|category| {
                let edit_target = category.clone();
                let delete_target = category.clone();
                view! {
                    <tr>
                        <td>{category.name.clone()}</td>
                        <td>{category.description.clone().unwrap_or_default()}</td>
                        <td>{category.icon_name.clone().unwrap_or_default()}</td>
                        <td>{category.color_code.clone().unwrap_or_default()}</td>
                        <td class="table__actions">
                            <button
                                class="btn btn--link"
                                on:click=move |_| {
                                    form.set(CategoryDraft::edit(&edit_target));
                                    form_error.set(None);
                                }
                            >
                                "Edit"
                            </button>
                            <button
                                class="btn btn--link btn--danger"
                                on:click=move |_| pending_delete.set(Some(delete_target.clone()))
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="section">
            <h2>"Categories"</h2>

            <form class="section__form" on:submit=on_submit>
                <input
                    class="section__input"
                    type="text"
                    placeholder="Name"
                    required
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    class="section__input"
                    type="text"
                    placeholder="Description"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                />
                <input
                    class="section__input"
                    type="text"
                    placeholder="Icon"
                    prop:value=move || form.with(|f| f.icon_name.clone())
                    on:input=move |ev| form.update(|f| f.icon_name = event_target_value(&ev))
                />
                <input
                    class="section__input"
                    type="text"
                    placeholder="#Color"
                    prop:value=move || form.with(|f| f.color_code.clone())
                    on:input=move |ev| form.update(|f| f.color_code = event_target_value(&ev))
                />
                <div class="section__form-actions">
                    <button class="btn btn--primary" type="submit">
                        {move || if form.with(CategoryDraft::is_editing) { "Update" } else { "Add" }}
                    </button>
                    <Show when=move || form.with(CategoryDraft::is_editing)>
                        <button class="btn" type="button" on:click=on_reset>
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>
            <Show when=move || form_error.get().is_some()>
                <p class="section__error">{move || form_error.get().unwrap_or_default()}</p>
            </Show>

            {move || {
                if loading.get() && items.with(Vec::is_empty) {
                    view! { <p>"Loading..."</p> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <p class="section__error">{message}</p> }.into_any()
                } else {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Description"</th>
                                    <th>"Icon"</th>
                                    <th>"Color"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>{rows()}</tbody>
                        </table>
                    }
                        .into_any()
                }
            }}

            <Pagination pager=pager/>

            {move || {
                pending_delete
                    .get()
                    .map(|category| {
                        view! {
                            <ConfirmDialog
                                message=format!("Delete category \"{}\"?", category.name)
                                on_cancel=on_cancel_delete
                                on_confirm=on_confirm_delete
                            />
                        }
                    })
            }}
        </section>
    }
}
