//! Story Card Component
//!
//! One story with its date line, expandable content and a per-card
//! ellipsis menu holding the Edit/Delete actions. While the menu is open a
//! document-wide click listener dismisses it on any click outside; the
//! listener is released when the menu closes or the card is removed.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::controller::StoriesController;
use crate::format::format_date;
use crate::models::Story;

/// Content longer than this is truncated behind a More/Less toggle
const PREVIEW_CHARS: usize = 200;

/// Document-wide click listener, detached again on drop
struct DocumentClickListener {
    closure: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl DocumentClickListener {
    fn attach(handler: impl FnMut(web_sys::MouseEvent) + 'static) -> Option<Self> {
        let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(handler);
        let doc = web_sys::window()?.document()?;
        doc.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { closure })
    }
}

impl Drop for DocumentClickListener {
    fn drop(&mut self) {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            let _ = doc
                .remove_event_listener_with_callback("click", self.closure.as_ref().unchecked_ref());
        }
    }
}

#[component]
pub fn StoryCard(story: Story, ctrl: StoriesController) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (expanded, set_expanded) = signal(false);
    let menu_ref = NodeRef::<leptos::html::Div>::new();

    // Held only while the menu is open; dropping it (on close, or when the
    // card's arena is disposed on unmount) detaches the document listener.
    let doc_listener: StoredValue<Option<DocumentClickListener>, LocalStorage> =
        StoredValue::new_local(None);

    Effect::new(move |_| {
        if menu_open.get() {
            doc_listener.set_value(DocumentClickListener::attach(move |ev| {
                let inside = menu_ref
                    .get_untracked()
                    .zip(ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()))
                    .map(|(menu, node)| menu.contains(Some(&node)))
                    .unwrap_or(false);
                if !inside {
                    set_menu_open.set(false);
                }
            }));
        } else {
            doc_listener.set_value(None);
        }
    });

    let date_line = if let Some(updated) = &story.updated_at {
        format!("Updated: {}", format_date(updated))
    } else {
        format!("Posted: {}", format_date(&story.created_at))
    };

    let story_id = story.id;
    let story_for_edit = story.clone();
    let content = story.content.clone();
    let is_long = content.chars().count() > PREVIEW_CHARS;
    let preview: String = if is_long {
        let short: String = content.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", short)
    } else {
        content.clone()
    };

    view! {
        <div class="story-card">
            <div
                class="story-menu-toggle"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_menu_open.update(|open| *open = !*open);
                }
            >
                "⋯"
                <Show when=move || menu_open.get()>
                    <div class="story-menu" node_ref=menu_ref>
                        <button
                            on:click={
                                let story = story_for_edit.clone();
                                move |ev| {
                                    // keep the click from re-toggling the menu
                                    ev.stop_propagation();
                                    set_menu_open.set(false);
                                    ctrl.open_edit(&story);
                                }
                            }
                        >
                            "Edit"
                        </button>
                        <button
                            class="danger"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_menu_open.set(false);
                                ctrl.delete_story(story_id);
                            }
                        >
                            "Delete"
                        </button>
                    </div>
                </Show>
            </div>

            <h2 class="story-title">{story.title.clone()}</h2>
            <p class="story-date">{date_line}</p>

            <p class="story-content">
                {move || if expanded.get() { content.clone() } else { preview.clone() }}
            </p>

            <Show when=move || is_long>
                <button
                    class="expand-btn"
                    on:click=move |_| set_expanded.update(|e| *e = !*e)
                >
                    {move || if expanded.get() { "Less" } else { "More" }}
                </button>
            </Show>
        </div>
    }
}
