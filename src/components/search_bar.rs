//! Search Bar Component
//!
//! Title search input with a clear button while non-empty. Every edit goes
//! through `set_search_term`, which also snaps the view back to page 1.

use leptos::prelude::*;

use crate::controller::StoriesController;

#[component]
pub fn SearchBar(ctrl: StoriesController) -> impl IntoView {
    let term = move || ctrl.collection.with(|s| s.search_term.clone());

    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="Search by title..."
                prop:value=term
                on:input=move |ev| {
                    ctrl.set_search_term(event_target_value(&ev));
                }
            />
            <Show when=move || !term().is_empty()>
                <button
                    type="button"
                    class="search-clear"
                    on:click=move |_| ctrl.set_search_term(String::new())
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
