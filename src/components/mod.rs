//! UI Components
//!
//! Leaf presentation components. They call controller operations and render
//! its snapshots; none of them owns synchronization state.

mod paginator;
mod search_bar;
mod story_card;
mod story_modal;

pub use paginator::Paginator;
pub use search_bar::SearchBar;
pub use story_card::StoryCard;
pub use story_modal::StoryModal;
