//! Draft Form
//!
//! Transient create/edit buffer, alive only while the story dialog is open.
//! Validation happens once, at submit; field edits are pure mutations.

use crate::models::Story;

/// Which field of the form is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

/// Create a new story, or edit the one with the given id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Edit(u32),
}

/// Per-field validation messages, both populated in one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraftForm {
    pub mode: DraftMode,
    pub title: String,
    pub content: String,
    pub errors: FieldErrors,
}

impl DraftForm {
    /// Empty form for a new story
    pub fn create() -> Self {
        Self {
            mode: DraftMode::Create,
            title: String::new(),
            content: String::new(),
            errors: FieldErrors::default(),
        }
    }

    /// Form prefilled from an existing story
    pub fn edit(story: &Story) -> Self {
        Self {
            mode: DraftMode::Edit(story.id),
            title: story.title.clone(),
            content: story.content.clone(),
            errors: FieldErrors::default(),
        }
    }

    /// Pure field mutation; no validation until submit
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Content => self.content = value,
        }
    }

    /// Validate both fields at once. Returns true when the form may be
    /// submitted; otherwise `errors` carries a message per invalid field.
    pub fn validate(&mut self) -> bool {
        self.errors = FieldErrors {
            title: self
                .title
                .trim()
                .is_empty()
                .then(|| "Favorite coffee is required.".to_string()),
            content: self
                .content
                .trim()
                .is_empty()
                .then(|| "Your story is required.".to_string()),
        };
        self.errors.is_empty()
    }
}
