//! Stories Controller
//!
//! Owns the collection snapshot and the draft form, and is the only writer
//! of either. Presentation components call these operations and render the
//! exposed signals; they hold no synchronization logic of their own.
//!
//! Search and page changes are explicit calls that synchronously update the
//! state machine and then schedule the fetch, rather than an effect watching
//! signal mutation. The state machine's sequence numbers keep a slow
//! response from clobbering a newer one.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Api;
use crate::draft::{DraftForm, DraftMode, Field};
use crate::models::{NewStory, Story, StoryPatch};
use crate::state::{CollectionState, RequestKey, Settled, PAGE_SIZE};

#[derive(Clone, Copy)]
pub struct StoriesController {
    /// Read-only snapshot for the list, search bar and paginator
    pub collection: RwSignal<CollectionState>,
    /// Open create/edit dialog, `None` while closed
    pub draft: RwSignal<Option<DraftForm>>,
    /// Non-blocking error from the last create/update/delete attempt
    pub mutation_error: RwSignal<Option<String>>,
    api: StoredValue<Api, LocalStorage>,
}

impl StoriesController {
    pub fn new(api: Api) -> Self {
        Self {
            collection: RwSignal::new(CollectionState::new()),
            draft: RwSignal::new(None),
            mutation_error: RwSignal::new(None),
            api: StoredValue::new_local(api),
        }
    }

    /// Re-request the current (search, page) pair. Used for the initial
    /// load and after every successful mutation, so it always issues a
    /// fresh request: a list already in flight for the same key predates
    /// the mutation and must be superseded, not reused.
    pub fn refresh(&self) {
        let mut state = self.collection.write();
        let key = state.current_key();
        let seq = state.begin_forced(key.clone());
        drop(state);
        self.fetch(seq, key);
    }

    pub fn set_search_term(&self, term: String) {
        let key = self.collection.write().set_search_term(term);
        self.load(key);
    }

    pub fn set_page_index(&self, n: u32) {
        let key = self.collection.write().set_page_index(n);
        self.load(key);
    }

    fn load(&self, key: RequestKey) {
        // None: an identical request is already in flight, reuse it
        let Some(seq) = self.collection.write().begin(key.clone()) else {
            return;
        };
        self.fetch(seq, key);
    }

    fn fetch(&self, seq: u64, key: RequestKey) {
        let ctrl = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            let result = api.list(&key.search, PAGE_SIZE, key.offset()).await;
            if let Err(err) = &result {
                web_sys::console::error_1(&format!("[STORIES] list failed: {}", err).into());
            }
            let settled = ctrl.collection.write().commit(seq, result);
            if let Settled::Refetch(next) = settled {
                ctrl.load(next);
            }
        });
    }

    // ========================
    // Draft Form
    // ========================

    pub fn open_create(&self) {
        self.mutation_error.set(None);
        self.draft.set(Some(DraftForm::create()));
    }

    pub fn open_edit(&self, story: &Story) {
        self.mutation_error.set(None);
        self.draft.set(Some(DraftForm::edit(story)));
    }

    pub fn close_draft(&self) {
        self.draft.set(None);
        self.mutation_error.set(None);
    }

    pub fn update_draft(&self, field: Field, value: String) {
        self.draft.update(|draft| {
            if let Some(form) = draft {
                form.set_field(field, value);
            }
        });
    }

    /// Validate and submit the open draft. Validation failure shows field
    /// errors without touching the network; a failed request leaves the
    /// dialog open with its values so the user can retry.
    pub fn submit_draft(&self) {
        let Some(mut form) = self.draft.get_untracked() else {
            return;
        };
        if !form.validate() {
            self.draft.set(Some(form));
            return;
        }
        let ctrl = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            let now = Utc::now().to_rfc3339();
            let result = match form.mode {
                DraftMode::Create => {
                    api.create(&NewStory {
                        title: &form.title,
                        content: &form.content,
                        created_at: now,
                    })
                    .await
                    .map(|_| ())
                }
                DraftMode::Edit(id) => {
                    api.update(
                        id,
                        &StoryPatch {
                            title: &form.title,
                            content: &form.content,
                            updated_at: now,
                        },
                    )
                    .await
                    .map(|_| ())
                }
            };
            match result {
                Ok(()) => {
                    ctrl.close_draft();
                    // Refresh the current key so the user's position is kept
                    ctrl.refresh();
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[STORIES] submit failed: {}", err).into(),
                    );
                    ctrl.mutation_error.set(Some(err.to_string()));
                }
            }
        });
    }

    pub fn delete_story(&self, id: u32) {
        let ctrl = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            match api.delete(id).await {
                Ok(()) => {
                    // An empty last page is stepped back by the commit path
                    ctrl.refresh();
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[STORIES] delete failed: {}", err).into(),
                    );
                    ctrl.mutation_error.set(Some(err.to_string()));
                }
            }
        });
    }
}
