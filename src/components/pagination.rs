//! Page selector for the public lesson feed.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Number of pages needed for `total` items at `limit` per page, never
/// less than one.
pub fn total_pages(total: i64, limit: u32) -> u32 {
    if total <= 0 || limit == 0 {
        return 1;
    }
    let limit = i64::from(limit);
    u32::try_from((total + limit - 1) / limit).unwrap_or(u32::MAX)
}

/// Numbered page buttons with previous/next controls.
#[component]
pub fn Pagination(
    current: RwSignal<u32>,
    #[prop(into)] pages: Signal<u32>,
    on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <nav class="pagination">
            <button
                class="pagination__btn"
                disabled=move || current.get() <= 1
                on:click=move |_| {
                    let page = current.get().saturating_sub(1).max(1);
                    on_select.run(page);
                }
            >
                "Prev"
            </button>
            {move || {
                (1..=pages.get())
                    .map(|page| {
                        let active = move || current.get() == page;
                        view! {
                            <button
                                class="pagination__btn"
                                class=("pagination__btn--active", active)
                                on:click=move |_| on_select.run(page)
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                class="pagination__btn"
                disabled=move || current.get() >= pages.get()
                on:click=move |_| {
                    let page = (current.get() + 1).min(pages.get());
                    on_select.run(page);
                }
            >
                "Next"
            </button>
        </nav>
    }
}
