//! Command implementations

pub mod comments;
pub mod posts;
pub mod stats;
