//! Paginator Component
//!
//! Prev / numbered / Next controls. Hidden while everything fits on one
//! page. Requests outside the valid range are clamped by the controller,
//! the disabled flags here are purely cosmetic.

use leptos::prelude::*;

use crate::controller::StoriesController;
use crate::state::PAGE_SIZE;

/// Pagination appears only once the collection spills past one page
fn spans_multiple_pages(total: u32) -> bool {
    total > PAGE_SIZE
}

#[component]
pub fn Paginator(ctrl: StoriesController) -> impl IntoView {
    let page = move || ctrl.collection.with(|s| s.page_index);
    let pages = move || ctrl.collection.with(|s| s.page_count());
    let total = move || ctrl.collection.with(|s| s.total);

    view! {
        <Show when=move || spans_multiple_pages(total())>
            <div class="paginator">
                <button
                    disabled=move || page() == 1
                    on:click=move |_| ctrl.set_page_index(page().saturating_sub(1))
                >
                    "Prev"
                </button>

                {move || {
                    (1..=pages())
                        .map(|n| {
                            view! {
                                <button
                                    class=move || {
                                        if page() == n { "page-btn active" } else { "page-btn" }
                                    }
                                    on:click=move |_| ctrl.set_page_index(n)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect_view()
                }}

                <button
                    disabled=move || page() == pages()
                    on:click=move |_| ctrl.set_page_index(page() + 1)
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
