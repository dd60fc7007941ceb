pub mod post;

pub use post::{Category, Post};
