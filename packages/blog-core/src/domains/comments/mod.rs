//! Comment domain - threaded comments attached to posts
//!
//! Each post owns one `CommentForest`; the forest is the only writer of its
//! comments.

pub mod models;

pub use models::{Comment, CommentForest, CommentThread, Flatten, Walk};
