//! Story Modal Component
//!
//! Create/edit dialog rendering the controller's DraftForm. Field edits go
//! straight back to the controller; validation messages and the
//! non-blocking submit error come from it. The dialog's DOM is keyed on the
//! form being open, field values update fine-grained so typing keeps focus.

use leptos::prelude::*;

use crate::controller::StoriesController;
use crate::draft::{DraftMode, Field};

#[component]
pub fn StoryModal(ctrl: StoriesController) -> impl IntoView {
    let open = move || ctrl.draft.with(|d| d.is_some());
    let is_edit = move || {
        ctrl.draft
            .with(|d| matches!(d.as_ref().map(|f| f.mode), Some(DraftMode::Edit(_))))
    };
    let title = move || {
        ctrl.draft
            .with(|d| d.as_ref().map(|f| f.title.clone()).unwrap_or_default())
    };
    let content = move || {
        ctrl.draft
            .with(|d| d.as_ref().map(|f| f.content.clone()).unwrap_or_default())
    };
    let title_error =
        move || ctrl.draft.with(|d| d.as_ref().and_then(|f| f.errors.title.clone()));
    let content_error =
        move || ctrl.draft.with(|d| d.as_ref().and_then(|f| f.errors.content.clone()));

    view! {
        <Show when=open>
            <div class="modal-backdrop">
                <form
                    class="modal"
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        ctrl.submit_draft();
                    }
                >
                    <h2>
                        {move || {
                            if is_edit() { "Edit Your Coffee Story" } else { "Share Your Coffee Story" }
                        }}
                    </h2>

                    <label>"Favorite Coffee"</label>
                    <input
                        type="text"
                        placeholder="e.g., Spanish Latte"
                        prop:value=title
                        on:input=move |ev| {
                            ctrl.update_draft(Field::Title, event_target_value(&ev));
                        }
                    />
                    {move || title_error().map(|msg| view! { <p class="field-error">{msg}</p> })}

                    <label>"Your Story"</label>
                    <textarea
                        rows=4
                        placeholder="How does coffee help you cope?"
                        prop:value=content
                        on:input=move |ev| {
                            ctrl.update_draft(Field::Content, event_target_value(&ev));
                        }
                    ></textarea>
                    {move || content_error().map(|msg| view! { <p class="field-error">{msg}</p> })}

                    {move || {
                        ctrl.mutation_error
                            .get()
                            .map(|msg| view! { <p class="submit-error">{msg}</p> })
                    }}

                    <div class="modal-actions">
                        <button type="button" on:click=move |_| ctrl.close_draft()>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary">
                            {move || if is_edit() { "Update" } else { "Post" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
