use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{CommentId, MemberId, PostId};

/// A single comment or reply.
///
/// Replies are not stored inline: the owning [`CommentForest`] keeps the
/// child ids, so a `Comment` is a flat, immutable record once appended.
///
/// [`CommentForest`]: super::forest::CommentForest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub author_id: MemberId,
    pub post_id: PostId,
    /// `None` for top-level comments.
    pub parent_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}
