//! Typed errors for the blog core.
//!
//! Every failure is local and synchronous. Nothing here is transient, so
//! callers should surface these directly instead of retrying.

use thiserror::Error;

use super::entity_ids::{CommentId, MemberId, PostId};

/// Errors returned by store, query and comment operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlogError {
    /// A query or parameter could not be interpreted (unknown sort mode,
    /// unknown category, ...).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The referenced post does not exist in the store.
    #[error("post not found: {0}")]
    PostNotFound(PostId),

    /// The referenced parent comment does not exist in the post's forest.
    #[error("comment not found: {0}")]
    CommentNotFound(CommentId),

    /// The referenced member does not exist in the store.
    #[error("member not found: {0}")]
    MemberNotFound(MemberId),

    /// The write would break tree ownership: a parent from another post's
    /// forest, a forest addressed with the wrong post id, or a reused id.
    #[error("integrity violation: {0}")]
    Integrity(String),

    /// Input failed a content rule (blank comment, missing title, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The acting member may not modify this post.
    #[error("member {member_id} may not modify post {post_id}")]
    PermissionDenied { member_id: MemberId, post_id: PostId },
}

impl BlogError {
    /// True for the not-found family (post, comment or member).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BlogError::PostNotFound(_) | BlogError::CommentNotFound(_) | BlogError::MemberNotFound(_)
        )
    }
}

/// Result type for blog core operations.
pub type Result<T> = std::result::Result<T, BlogError>;
