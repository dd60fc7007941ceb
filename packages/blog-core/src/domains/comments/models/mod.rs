pub mod comment;
pub mod forest;

pub use comment::Comment;
pub use forest::{CommentForest, CommentThread, Flatten, Walk};
