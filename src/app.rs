//! Copi Frontend App
//!
//! Root component: builds the API client and the stories controller, issues
//! the initial load, and lays out the header, search, list, dialog and
//! pagination. One controller per mounted view.

use leptos::prelude::*;

use crate::api::Api;
use crate::components::{Paginator, SearchBar, StoryCard, StoryModal};
use crate::controller::StoriesController;
use crate::state::LoadState;

/// Base URL of the posts service. Overridable at build time, otherwise the
/// app assumes it is served from the same origin under `/api`.
fn api_base() -> String {
    if let Some(url) = option_env!("COPI_API_URL") {
        return url.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{}/api", origin))
        .unwrap_or_else(|| "/api".to_string())
}

#[component]
pub fn App() -> impl IntoView {
    let ctrl = StoriesController::new(Api::new(api_base()));

    // Initial load on mount; everything after this is an explicit
    // controller call from a component.
    Effect::new(move |_| {
        ctrl.refresh();
    });

    let load_state = move || ctrl.collection.with(|s| s.load_state.clone());
    let stories = move || ctrl.collection.with(|s| s.items.clone());
    let searching = move || ctrl.collection.with(|s| !s.search_term.is_empty());

    let empty_message = move || {
        if searching() {
            "No coffee stories match your search."
        } else {
            "No coffee stories have been posted yet."
        }
    };

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"COPI"</h1>
                <button class="share-btn" on:click=move |_| ctrl.open_create()>
                    "Share Story"
                </button>
            </header>

            <SearchBar ctrl=ctrl />

            // A failed load keeps the last-good page visible underneath
            // the error, stale-but-visible over blanking the view
            {move || {
                ctrl.collection.with(|s| match &s.load_state {
                    LoadState::Failed(msg) => {
                        Some(view! { <p class="placeholder error">{msg.clone()}</p> })
                    }
                    _ => None,
                })
            }}

            {move || {
                if stories().is_empty() {
                    match load_state() {
                        // the banner above already covers this case
                        LoadState::Failed(_) => ().into_any(),
                        LoadState::Idle | LoadState::Loading => {
                            view! { <p class="placeholder">"Loading..."</p> }.into_any()
                        }
                        LoadState::Ready => {
                            view! { <p class="placeholder">{empty_message()}</p> }.into_any()
                        }
                    }
                } else {
                    view! {
                        <div class="story-list">
                            <For
                                each=stories
                                // updated_at is part of the key so an edited
                                // story's card is rebuilt, not memoized by id
                                key=|story| (story.id, story.updated_at.clone())
                                children=move |story| view! { <StoryCard story=story ctrl=ctrl /> }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}

            <StoryModal ctrl=ctrl />

            <Paginator ctrl=ctrl />
        </div>
    }
}
