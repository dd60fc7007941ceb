pub mod core;
pub mod create_post;
pub mod search;

pub use self::core::{can_edit, displayed_likes, feed_heading, reading_time, split_featured};
pub use create_post::PostDraft;
pub use search::{search_posts, CategoryFilter, PostQuery, QueryParams, SortMode};
