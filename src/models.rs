//! Frontend Models
//!
//! Data structures matching the remote posts service.

use serde::{Deserialize, Serialize};

/// A coffee story as the service returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: u32,
    pub title: String,
    pub content: String,
    /// ISO-8601 UTC, set at creation
    pub created_at: String,
    /// ISO-8601 UTC, present only once the story has been edited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// One page of the filtered collection plus the total match count
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoryPage {
    pub posts: Vec<Story>,
    pub total: u32,
}

// ========================
// Request Payload Structs
// ========================

/// POST /posts body
#[derive(Debug, Serialize)]
pub struct NewStory<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub created_at: String,
}

/// PATCH /posts/{id} body. `created_at` is server-owned and never resent.
#[derive(Debug, Serialize)]
pub struct StoryPatch<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_without_updated_at_deserializes_to_none() {
        let json = r#"{"id":1,"title":"Latte","content":"...","created_at":"2024-01-05T15:45:00Z"}"#;
        let story: Story = serde_json::from_str(json).expect("deserialize");
        assert_eq!(story.id, 1);
        assert!(story.updated_at.is_none());
    }

    #[test]
    fn story_page_carries_total() {
        let json = r#"{"posts":[],"total":7}"#;
        let page: StoryPage = serde_json::from_str(json).expect("deserialize");
        assert!(page.posts.is_empty());
        assert_eq!(page.total, 7);
    }

    #[test]
    fn patch_body_has_no_created_at() {
        let patch = StoryPatch {
            title: "Latte",
            content: "updated",
            updated_at: "2024-02-01T10:00:00Z".into(),
        };
        let json = serde_json::to_string(&patch).expect("serialize");
        assert!(!json.contains("created_at"));
        assert!(json.contains("updated_at"));
    }
}
