//! Prev/Next pagination footer with a page-size selector.

use leptos::prelude::*;

use crate::state::pager::{PAGE_SIZES, Pager};

/// Pagination controls bound to a shared [`Pager`] signal. The owning
/// section watches the pager's page/size and refetches on change.
#[component]
pub fn Pagination(pager: RwSignal<Pager>) -> impl IntoView {
    let on_size = move |ev: leptos::ev::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<i64>() {
            pager.update(|p| p.set_size(size));
        }
    };

    view! {
        <div class="pagination">
            <button
                class="btn"
                disabled=move || !pager.get().can_prev()
                on:click=move |_| pager.update(Pager::prev)
            >
                "Prev"
            </button>
            <span class="pagination__label">{move || pager.get().label()}</span>
            <button
                class="btn"
                disabled=move || !pager.get().can_next()
                on:click=move |_| pager.update(Pager::next)
            >
                "Next"
            </button>
            <select class="pagination__size" on:change=on_size>
                {PAGE_SIZES
                    .into_iter()
                    .map(|s| {
                        view! {
                            <option value=s.to_string() selected=move || pager.get().size == s>
                                {format!("{s} / page")}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}
