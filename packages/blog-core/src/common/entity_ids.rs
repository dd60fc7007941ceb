//! Typed ID definitions for blog entities.
//!
//! ```rust
//! use blog_core::common::{MemberId, PostId};
//!
//! let author: MemberId = MemberId::new();
//! let post: PostId = PostId::new();
//! // let wrong: PostId = author; // compile error
//! # let _ = (author, post);
//! ```

pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Member entities (authors, commenters, admins).
pub struct Member;

/// Marker type for Post entities.
pub struct Post;

/// Marker type for Comment entities.
pub struct Comment;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Member entities.
pub type MemberId = Id<Member>;

/// Typed ID for Post entities.
pub type PostId = Id<Post>;

/// Typed ID for Comment entities.
pub type CommentId = Id<Comment>;
