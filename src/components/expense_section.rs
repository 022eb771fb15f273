//! Expense list + draft form with date-range and category filters.
//!
//! Same list/form reconciliation as the category section, plus filter
//! state: changing any filter (or the page size) resets the page index
//! to 0 before the refetch, so the view never requests a page past the
//! end of a narrowed result set.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination::Pagination;
use crate::net::api;
use crate::net::query::ListQuery;
use crate::net::types::{Category, CategoryType, Expense};
use crate::state::expense_form::ExpenseDraft;
use crate::state::latest::Latest;
use crate::state::pager::Pager;
use crate::state::session::{SessionState, expire_session};
use crate::util::format;

/// Date-range and category filters for the expense list. Blank fields
/// are omitted from the request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ExpenseFilters {
    start_date: String,
    end_date: String,
    category_id: String,
}

#[component]
pub fn ExpenseSection() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let items = RwSignal::new(Vec::<Expense>::new());
    let pager = RwSignal::new(Pager::default());
    let filters = RwSignal::new(ExpenseFilters::default());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let latest = RwSignal::new(Latest::default());

    // Category options for the filter and form selects; fetched once.
    let categories = RwSignal::new(Vec::<Category>::new());

    let form = RwSignal::new(ExpenseDraft::blank(format::today_iso()));
    let form_error = RwSignal::new(None::<String>);
    let pending_delete = RwSignal::new(None::<Expense>);

    let load = move || {
        let Some(token) = session.with_untracked(|s| s.token.clone()) else {
            return;
        };
        let p = pager.get_untracked();
        let f = filters.get_untracked();
        let query = ListQuery::new(p.page, p.size, "expenseDate,desc")
            .filter_opt("startDate", Some(f.start_date))
            .filter_opt("endDate", Some(f.end_date))
            .filter_opt("categoryId", Some(f.category_id));
        let ticket = latest.try_update(Latest::issue).unwrap_or_default();
        loading.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            let result = api::fetch_expenses(&token, &query).await;
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
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    // Refetch on page, size, or filter changes (and on mount).
    let page_key = Memo::new(move |_| (pager.with(|p| (p.page, p.size)), filters.get()));
    Effect::new(move || {
        page_key.track();
        load();
    });

    // One-shot category options load. A 401 here tears the session
    // down like any other endpoint; other failures only degrade the
    // selects, so they are logged and otherwise ignored.
    Effect::new(move || {
        let Some(token) = session.with_untracked(|s| s.token.clone()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let query = ListQuery::new(0, 100, "name,asc")
                .filter("type", CategoryType::Expense.as_str());
            match api::fetch_categories(&token, &query).await {
                Ok(page) => categories.set(page.content),
                Err(e) if e.is_auth() => expire_session(session),
                Err(e) => leptos::logging::warn!("category options load failed: {e}"),
            }
        });
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
                Some(id) => api::update_expense(&token, id, &payload).await.map(|_| ()),
                None => api::create_expense(&token, &payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    form.set(ExpenseDraft::blank(format::today_iso()));
                    load();
                }
                Err(e) if e.is_auth() => expire_session(session),
                Err(e) => form_error.set(Some(e.to_string())),
            }
        });
    };

    let on_reset = move |_| {
        form.set(ExpenseDraft::blank(format::today_iso()));
        form_error.set(None);
    };

    let on_clear_filters = move |_| {
        filters.set(ExpenseFilters::default());
        pager.update(Pager::reset_page);
    };

    let on_cancel_delete = Callback::new(move |()| pending_delete.set(None));
    let on_confirm_delete = Callback::new(move |()| {
        let Some(expense) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let Some(token) = session.with_untracked(|s| s.token.clone()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_expense(&token, expense.id).await {
                Ok(()) => load(),
                Err(e) if e.is_auth() => expire_session(session),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    let category_options = move || {
        categories
            .get()
            .into_iter()
            .map(|c| view! { <option value=c.id.to_string()>{c.name.clone()}</option> })
            .collect::<Vec<_>>()
    };

    let rows = move || {
        items
            .get()
            .into_iter()
            .map(|expense| {
                let edit_target = expense.clone();
                let delete_target = expense.clone();
                view! {
                    <tr>
                        <td>{expense.expense_date.clone()}</td>
                        <td>{expense.title.clone()}</td>
                        <td>{expense.category_name.clone().unwrap_or_default()}</td>
                        <td>{format::money(expense.amount)}</td>
                        <td>{expense.description.clone().unwrap_or_default()}</td>
                        <td class="table__actions">
                            <button
                                class="btn btn--link"
                                on:click=move |_| {
                                    form.set(ExpenseDraft::edit(&edit_target));
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
            <h2>"Expenses"</h2>

            <div class="section__filters">
                <input
                    class="section__input"
                    type="date"
                    prop:value=move || filters.with(|f| f.start_date.clone())
                    on:input=move |ev| {
                        filters.update(|f| f.start_date = event_target_value(&ev));
                        pager.update(Pager::reset_page);
                    }
                />
                <input
                    class="section__input"
                    type="date"
                    prop:value=move || filters.with(|f| f.end_date.clone())
                    on:input=move |ev| {
                        filters.update(|f| f.end_date = event_target_value(&ev));
                        pager.update(Pager::reset_page);
                    }
                />
                <select
                    class="section__input"
                    prop:value=move || filters.with(|f| f.category_id.clone())
                    on:change=move |ev| {
                        filters.update(|f| f.category_id = event_target_value(&ev));
                        pager.update(Pager::reset_page);
                    }
                >
                    <option value="">"All Categories"</option>
                    {category_options}
                </select>
                <button class="btn" on:click=on_clear_filters>
                    "Clear"
                </button>
            </div>

            <form class="section__form" on:submit=on_submit>
                <input
                    class="section__input"
                    type="text"
                    placeholder="Title"
                    required
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
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
                    type="number"
                    step="0.01"
                    placeholder="Amount"
                    required
                    prop:value=move || form.with(|f| f.amount.clone())
                    on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
                />
                <input
                    class="section__input"
                    type="date"
                    required
                    prop:value=move || form.with(|f| f.expense_date.clone())
                    on:input=move |ev| form.update(|f| f.expense_date = event_target_value(&ev))
                />
                <select
                    class="section__input"
                    required
                    prop:value=move || form.with(|f| f.category_id.clone())
                    on:change=move |ev| form.update(|f| f.category_id = event_target_value(&ev))
                >
                    <option value="" disabled>
                        "Select Category"
                    </option>
                    {category_options}
                </select>
                <div class="section__form-actions">
                    <button class="btn btn--primary" type="submit">
                        {move || if form.with(ExpenseDraft::is_editing) { "Update" } else { "Add" }}
                    </button>
                    <Show when=move || form.with(ExpenseDraft::is_editing)>
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
                                    <th>"Date"</th>
                                    <th>"Title"</th>
                                    <th>"Category"</th>
                                    <th>"Amount"</th>
                                    <th>"Description"</th>
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
                    .map(|expense| {
                        view! {
                            <ConfirmDialog
                                message=format!("Delete expense \"{}\"?", expense.title)
                                on_cancel=on_cancel_delete
                                on_confirm=on_confirm_delete
                            />
                        }
                    })
            }}
        </section>
    }
}
