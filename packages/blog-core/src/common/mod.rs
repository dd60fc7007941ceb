// Common types and utilities shared across the domains

pub mod entity_ids;
pub mod error;
pub mod id;
pub mod utils;

pub use entity_ids::*;
pub use error::{BlogError, Result};
pub use id::{Id, V4, V7};
