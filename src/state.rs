//! Collection State Machine
//!
//! Pure core of the story browser: search term, page index, total count and
//! the current result page, kept mutually consistent across loads and
//! mutations. Every outgoing list request is tagged with a monotonically
//! increasing sequence number; a completion whose sequence number is no
//! longer the latest is discarded, so a slow response can never overwrite
//! the result of a request issued after it.
//!
//! Nothing here touches the network or Leptos. The controller drives this
//! machine and performs the actual fetches.

use crate::error::ApiError;
use crate::models::{Story, StoryPage};

/// Stories shown per page
pub const PAGE_SIZE: u32 = 3;

/// Lifecycle of the current list request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Identity of one list request: what to search for and which page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestKey {
    pub search: String,
    pub page: u32,
}

impl RequestKey {
    pub fn offset(&self) -> u32 {
        (self.page - 1) * PAGE_SIZE
    }
}

/// Outcome of committing a completed list request
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    /// Result applied to the view
    Applied,
    /// A newer request was issued while this one was in flight; dropped
    Stale,
    /// The page came back empty with a lower page available; the caller
    /// must issue this follow-up request
    Refetch(RequestKey),
}

/// The controller's externally visible collection snapshot
#[derive(Debug, Clone)]
pub struct CollectionState {
    pub items: Vec<Story>,
    pub search_term: String,
    pub page_index: u32,
    pub total: u32,
    pub load_state: LoadState,
    latest_seq: u64,
    in_flight: Option<(u64, RequestKey)>,
}

impl Default for CollectionState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_term: String::new(),
            page_index: 1,
            total: 0,
            load_state: LoadState::Idle,
            latest_seq: 0,
            in_flight: None,
        }
    }
}

impl CollectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages the current total spans, never less than one
    pub fn page_count(&self) -> u32 {
        self.total.div_ceil(PAGE_SIZE).max(1)
    }

    /// Key for the currently selected (search, page) pair
    pub fn current_key(&self) -> RequestKey {
        RequestKey {
            search: self.search_term.clone(),
            page: self.page_index,
        }
    }

    /// A new search always starts on the first page
    pub fn set_search_term(&mut self, term: impl Into<String>) -> RequestKey {
        self.search_term = term.into();
        self.page_index = 1;
        self.current_key()
    }

    /// Out-of-range navigation is clamped, never rejected
    pub fn set_page_index(&mut self, n: u32) -> RequestKey {
        self.page_index = n.clamp(1, self.page_count());
        self.current_key()
    }

    /// Register an outgoing list request. Returns its sequence number, or
    /// `None` when an identical request is already in flight and should be
    /// reused rather than duplicated.
    pub fn begin(&mut self, key: RequestKey) -> Option<u64> {
        if self.load_state == LoadState::Loading {
            if let Some((_, in_flight)) = &self.in_flight {
                if *in_flight == key {
                    return None;
                }
            }
        }
        Some(self.begin_forced(key))
    }

    /// Like [`begin`](Self::begin), but never reuses an in-flight request.
    /// A refresh after a create/update/delete goes through here: the data
    /// changed on the server, so a list already in flight for the same key
    /// predates the mutation and must be superseded, not reused.
    pub fn begin_forced(&mut self, key: RequestKey) -> u64 {
        self.latest_seq += 1;
        self.load_state = LoadState::Loading;
        self.in_flight = Some((self.latest_seq, key));
        self.latest_seq
    }

    /// Apply a completed list request. Stale completions are dropped; a
    /// failure keeps the last known good `items`/`total` visible.
    pub fn commit(&mut self, seq: u64, result: Result<StoryPage, ApiError>) -> Settled {
        if seq != self.latest_seq {
            return Settled::Stale;
        }
        self.in_flight = None;
        match result {
            Ok(page) => {
                self.total = page.total;
                if page.posts.is_empty() && self.page_index > 1 {
                    // The sole item of the last page was deleted; step back
                    // instead of showing an empty page. Previous items stay
                    // visible while the follow-up request runs.
                    self.page_index = (self.page_index - 1).min(self.page_count());
                    Settled::Refetch(self.current_key())
                } else {
                    self.items = page.posts;
                    self.load_state = LoadState::Ready;
                    Settled::Applied
                }
            }
            Err(err) => {
                self.load_state = LoadState::Failed(err.to_string());
                Settled::Applied
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: u32, title: &str) -> Story {
        Story {
            id,
            title: title.to_string(),
            content: "body".to_string(),
            created_at: "2024-01-05T15:45:00Z".to_string(),
            updated_at: None,
        }
    }

    fn page(posts: Vec<Story>, total: u32) -> StoryPage {
        StoryPage { posts, total }
    }

    #[test]
    fn offset_is_zero_based_page_times_page_size() {
        let key = RequestKey {
            search: String::new(),
            page: 3,
        };
        assert_eq!(key.offset(), 6);
    }

    #[test]
    fn successful_load_replaces_items_and_total() {
        let mut state = CollectionState::new();
        let seq = state.begin(state.current_key()).expect("first request");
        assert_eq!(state.load_state, LoadState::Loading);

        let settled = state.commit(seq, Ok(page(vec![story(1, "Latte")], 1)));

        assert_eq!(settled, Settled::Applied);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.total, 1);
        assert_eq!(state.load_state, LoadState::Ready);
    }

    #[test]
    fn new_search_resets_page_to_first() {
        let mut state = CollectionState::new();
        state.total = 9;
        state.page_index = 3;

        let key = state.set_search_term("latte");

        assert_eq!(state.page_index, 1);
        assert_eq!(key.page, 1);
        assert_eq!(key.search, "latte");
    }

    #[test]
    fn page_navigation_is_clamped_into_range() {
        let mut state = CollectionState::new();
        state.total = 7; // 3 pages at PAGE_SIZE = 3

        assert_eq!(state.set_page_index(9).page, 3);
        assert_eq!(state.set_page_index(0).page, 1);
        assert_eq!(state.set_page_index(2).page, 2);
    }

    #[test]
    fn empty_collection_still_has_one_page() {
        let state = CollectionState::new();
        assert_eq!(state.page_count(), 1);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = CollectionState::new();
        let key1 = state.set_search_term("k1");
        let seq1 = state.begin(key1).expect("first request");
        let key2 = state.set_search_term("k2");
        let seq2 = state.begin(key2).expect("superseding request");

        // k1 completes after k2 was issued: dropped
        let settled = state.commit(seq1, Ok(page(vec![story(1, "old")], 1)));
        assert_eq!(settled, Settled::Stale);
        assert!(state.items.is_empty());

        // k2 completes: applied
        let settled = state.commit(seq2, Ok(page(vec![story(2, "new")], 1)));
        assert_eq!(settled, Settled::Applied);
        assert_eq!(state.items[0].id, 2);
    }

    #[test]
    fn in_flight_request_for_same_key_is_reused() {
        let mut state = CollectionState::new();
        let key = state.current_key();
        assert!(state.begin(key.clone()).is_some());
        assert!(state.begin(key).is_none());
    }

    #[test]
    fn request_for_different_key_supersedes_in_flight_one() {
        let mut state = CollectionState::new();
        let key = state.current_key();
        let seq1 = state.begin(key).expect("first request");
        state.total = 7;
        let key = state.set_page_index(2);
        let seq2 = state.begin(key).expect("different key is not deduplicated");
        assert!(seq2 > seq1);
    }

    #[test]
    fn refresh_after_delete_supersedes_in_flight_list_for_same_key() {
        let mut state = CollectionState::new();
        let key = state.current_key();
        let seq1 = state.begin(key.clone()).expect("list request");

        // The delete finished while that list was still in flight; its
        // refresh targets the same key but must supersede, not be reused
        let seq2 = state.begin_forced(key);
        assert!(seq2 > seq1);

        // The pre-delete response arrives late and is dropped
        let settled = state.commit(seq1, Ok(page(vec![story(5, "deleted")], 1)));
        assert_eq!(settled, Settled::Stale);
        assert!(state.items.is_empty());

        // The post-delete refresh is what lands
        let settled = state.commit(seq2, Ok(page(vec![], 0)));
        assert_eq!(settled, Settled::Applied);
        assert!(state.items.is_empty());
        assert_eq!(state.total, 0);
        assert_eq!(state.load_state, LoadState::Ready);
    }

    #[test]
    fn failure_preserves_last_known_good_view() {
        let mut state = CollectionState::new();
        let seq = state.begin(state.current_key()).expect("request");
        state.commit(seq, Ok(page(vec![story(1, "Latte")], 4)));

        let key = state.set_page_index(2);
        let seq = state.begin(key).expect("request");
        let settled = state.commit(seq, Err(ApiError::Service { status: 500 }));

        assert_eq!(settled, Settled::Applied);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.total, 4);
        assert!(matches!(state.load_state, LoadState::Failed(_)));
    }

    #[test]
    fn deleting_sole_item_on_last_page_steps_back_one_page() {
        let mut state = CollectionState::new();
        state.total = 7;
        state.page_index = 3;

        // Post-delete refresh of page 3 comes back empty with total = 6
        let seq = state.begin(state.current_key()).expect("refresh");
        let settled = state.commit(seq, Ok(page(vec![], 6)));

        match settled {
            Settled::Refetch(key) => assert_eq!(key.page, 2),
            other => panic!("expected refetch, got {:?}", other),
        }
        assert_eq!(state.page_index, 2);
    }

    #[test]
    fn empty_first_page_is_applied_as_is() {
        let mut state = CollectionState::new();
        let seq = state.begin(state.current_key()).expect("request");
        let settled = state.commit(seq, Ok(page(vec![], 0)));

        assert_eq!(settled, Settled::Applied);
        assert!(state.items.is_empty());
        assert_eq!(state.load_state, LoadState::Ready);
    }

    #[test]
    fn page_never_exceeds_page_size() {
        // The request asks for exactly PAGE_SIZE items; a well-behaved
        // server never returns more, and the key arithmetic guarantees
        // consecutive non-overlapping windows.
        let first = RequestKey {
            search: String::new(),
            page: 1,
        };
        let second = RequestKey {
            search: String::new(),
            page: 2,
        };
        assert_eq!(second.offset() - first.offset(), PAGE_SIZE);
    }
}
