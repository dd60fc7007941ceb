// Inkwell Blog - Core
//
// Post discovery (filter, match, sort) and threaded comments for the blog
// front-end, over an in-memory store seeded with sample data.
//
// Domains live under domains/*; the store and seed data live in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use common::{BlogError, CommentId, MemberId, PostId, Result};
pub use config::*;
pub use kernel::BlogStore;
