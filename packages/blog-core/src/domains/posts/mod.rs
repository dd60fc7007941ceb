//! Post domain - posts, discovery and authoring

pub mod activities;
pub mod models;

// Re-export activities
pub use activities::{
    can_edit, displayed_likes, feed_heading, reading_time, search_posts, split_featured,
    CategoryFilter, PostDraft, PostQuery, QueryParams, SortMode,
};

// Re-export models
pub use models::{Category, Post};
