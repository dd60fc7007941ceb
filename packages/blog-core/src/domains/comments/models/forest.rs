//! Per-post comment forest.
//!
//! Comments live in a flat arena keyed by id. Each node holds the ids of its
//! replies in insertion order, and the forest holds the ids of its top-level
//! comments. A node can only be attached under a parent that is already in
//! the arena, and new ids are always fresh, so no comment can become its own
//! ancestor.
//!
//! `append` is the only writer. It validates everything before touching the
//! arena, so a failed append leaves the forest exactly as it was.
//! Deserialization replays every stored comment through the same checks.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::comment::Comment;
use crate::common::{BlogError, CommentId, MemberId, PostId, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CommentNode {
    comment: Comment,
    children: Vec<CommentId>,
}

/// All comment trees attached to one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ForestSnapshot")]
pub struct CommentForest {
    post_id: PostId,
    nodes: HashMap<CommentId, CommentNode>,
    roots: Vec<CommentId>,
}

impl CommentForest {
    /// Create an empty forest owned by `post_id`.
    pub fn new(post_id: PostId) -> Self {
        Self {
            post_id,
            nodes: HashMap::new(),
            roots: Vec::new(),
        }
    }

    /// The post that owns this forest.
    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn contains(&self, id: CommentId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.nodes.get(&id).map(|n| &n.comment)
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Append a comment stamped with the current time.
    ///
    /// See [`CommentForest::append_at`].
    pub fn append(
        &mut self,
        post_id: PostId,
        content: &str,
        author_id: MemberId,
        parent_id: Option<CommentId>,
    ) -> Result<Comment> {
        self.append_at(post_id, content, author_id, parent_id, Utc::now())
    }

    /// Append a comment with an explicit creation time.
    ///
    /// - `post_id` must be the forest's own post, else `Integrity`.
    /// - `content` must not be blank, else `Validation`.
    /// - `parent_id`, when given, must exist in this forest, else
    ///   `CommentNotFound`.
    ///
    /// The new comment goes to the end of its parent's replies (or of the
    /// top-level list).
    pub fn append_at(
        &mut self,
        post_id: PostId,
        content: &str,
        author_id: MemberId,
        parent_id: Option<CommentId>,
        created_at: DateTime<Utc>,
    ) -> Result<Comment> {
        let comment = Comment {
            id: CommentId::new(),
            content: content.to_string(),
            author_id,
            post_id,
            parent_id,
            created_at,
        };
        self.insert(comment.clone())?;
        Ok(comment)
    }

    /// Insert a fully-formed comment, e.g. from seed data or a snapshot.
    ///
    /// Same rules as `append_at`, plus the id must not already be in use.
    /// Parents must be inserted before their replies.
    pub fn insert(&mut self, comment: Comment) -> Result<()> {
        if comment.post_id != self.post_id {
            warn!(
                forest = %self.post_id,
                requested = %comment.post_id,
                "Rejected comment addressed to another post"
            );
            return Err(BlogError::Integrity(format!(
                "comment forest of post {} cannot hold a comment for post {}",
                self.post_id, comment.post_id
            )));
        }
        if comment.content.trim().is_empty() {
            return Err(BlogError::Validation(
                "comment content must not be blank".to_string(),
            ));
        }
        if self.nodes.contains_key(&comment.id) {
            return Err(BlogError::Integrity(format!(
                "comment id {} is already in use",
                comment.id
            )));
        }
        if let Some(parent_id) = comment.parent_id {
            if !self.nodes.contains_key(&parent_id) {
                warn!(post_id = %self.post_id, parent_id = %parent_id, "Reply target not found");
                return Err(BlogError::CommentNotFound(parent_id));
            }
        }

        // All checks passed; from here on nothing can fail.
        match comment.parent_id {
            Some(parent_id) => {
                if let Some(parent) = self.nodes.get_mut(&parent_id) {
                    parent.children.push(comment.id);
                }
            }
            None => self.roots.push(comment.id),
        }

        debug!(
            post_id = %self.post_id,
            comment_id = %comment.id,
            parent_id = ?comment.parent_id,
            "Comment appended"
        );

        self.nodes.insert(
            comment.id,
            CommentNode {
                comment,
                children: Vec::new(),
            },
        );
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Top-level comments in insertion order.
    pub fn top_level(&self) -> impl Iterator<Item = &Comment> + '_ {
        self.roots.iter().filter_map(|id| self.get(*id))
    }

    /// Number of top-level comments (replies not counted).
    ///
    /// This is the count the trending sort uses.
    pub fn top_level_count(&self) -> usize {
        self.roots.len()
    }

    /// Direct replies of `id`, in insertion order. `None` if `id` is unknown.
    pub fn replies(&self, id: CommentId) -> Option<impl Iterator<Item = &Comment> + '_> {
        let node = self.nodes.get(&id)?;
        Some(node.children.iter().filter_map(|child| self.get(*child)))
    }

    /// Number of direct replies of `id`. `None` if `id` is unknown.
    pub fn child_count(&self, id: CommentId) -> Option<usize> {
        self.nodes.get(&id).map(|n| n.children.len())
    }

    /// Total comments at every depth, by full traversal from the roots.
    pub fn count_all(&self) -> usize {
        let total = self.walk().count();
        debug_assert_eq!(total, self.nodes.len());
        total
    }

    /// Size of the subtree rooted at `id`, the root included.
    /// `None` if `id` is unknown.
    pub fn count_subtree(&self, id: CommentId) -> Option<usize> {
        self.walk_from(id).map(Iterator::count)
    }

    /// Depth-first pre-order traversal of the whole forest.
    ///
    /// Lazy and finite. Calling `flatten` again starts a fresh traversal; a
    /// clone resumes independently from the point it was taken.
    pub fn flatten(&self) -> Flatten<'_> {
        Flatten(self.walk())
    }

    /// Pre-order traversal of the subtree rooted at `id`.
    pub fn flatten_subtree(&self, id: CommentId) -> Option<Flatten<'_>> {
        self.walk_from(id).map(Flatten)
    }

    /// Pre-order traversal yielding `(depth, comment)`, depth 0 = top-level.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            forest: self,
            stack: self.roots.iter().rev().map(|id| (0, *id)).collect(),
        }
    }

    fn walk_from(&self, id: CommentId) -> Option<Walk<'_>> {
        if !self.nodes.contains_key(&id) {
            return None;
        }
        Some(Walk {
            forest: self,
            stack: vec![(0, id)],
        })
    }

    /// Borrowed nested views of the top-level threads, for display.
    pub fn threads(&self) -> impl Iterator<Item = CommentThread<'_>> + '_ {
        self.roots.iter().map(move |id| CommentThread {
            forest: self,
            id: *id,
        })
    }

    /// Nested view rooted at `id`.
    pub fn thread(&self, id: CommentId) -> Option<CommentThread<'_>> {
        self.contains(id).then_some(CommentThread { forest: self, id })
    }
}

/// Serialized shape of a forest, checked before it becomes one.
#[derive(Deserialize)]
struct ForestSnapshot {
    post_id: PostId,
    nodes: HashMap<CommentId, CommentNode>,
    roots: Vec<CommentId>,
}

impl TryFrom<ForestSnapshot> for CommentForest {
    type Error = BlogError;

    /// Rebuild through `insert` in pre-order, so parents land before replies
    /// and sibling order is kept. Cycles, shared or orphaned nodes, unknown
    /// ids and mismatched parent links are rejected.
    fn try_from(snapshot: ForestSnapshot) -> Result<Self> {
        let ForestSnapshot {
            post_id,
            mut nodes,
            roots,
        } = snapshot;
        let total = nodes.len();
        let mut forest = CommentForest::new(post_id);
        let mut seen = HashSet::with_capacity(total);
        let mut stack: Vec<(Option<CommentId>, CommentId)> =
            roots.iter().rev().map(|id| (None, *id)).collect();

        while let Some((parent_id, id)) = stack.pop() {
            if !seen.insert(id) {
                return Err(BlogError::Integrity(format!(
                    "comment {} is reachable more than once",
                    id
                )));
            }
            let node = nodes.remove(&id).ok_or(BlogError::CommentNotFound(id))?;
            if node.comment.id != id {
                return Err(BlogError::Integrity(format!(
                    "comment {} is stored under id {}",
                    node.comment.id, id
                )));
            }
            if node.comment.parent_id != parent_id {
                return Err(BlogError::Integrity(format!(
                    "comment {} is listed under {:?} but names parent {:?}",
                    id, parent_id, node.comment.parent_id
                )));
            }
            stack.extend(node.children.iter().rev().map(|child| (Some(id), *child)));
            forest.insert(node.comment)?;
        }

        if !nodes.is_empty() {
            return Err(BlogError::Integrity(format!(
                "{} of {} comments are not reachable from a top-level comment",
                nodes.len(),
                total
            )));
        }
        Ok(forest)
    }
}

/// Pre-order walk over a forest or subtree, yielding `(depth, comment)`.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    forest: &'a CommentForest,
    stack: Vec<(usize, CommentId)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Comment);

    fn next(&mut self) -> Option<Self::Item> {
        let forest = self.forest;
        let (depth, id) = self.stack.pop()?;
        let node = forest.nodes.get(&id)?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, *child)));
        Some((depth, &node.comment))
    }
}

/// Pre-order traversal yielding comments only.
#[derive(Debug, Clone)]
pub struct Flatten<'a>(Walk<'a>);

impl<'a> Iterator for Flatten<'a> {
    type Item = &'a Comment;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, comment)| comment)
    }
}

/// A comment together with a handle on its replies.
#[derive(Debug, Clone, Copy)]
pub struct CommentThread<'a> {
    forest: &'a CommentForest,
    id: CommentId,
}

impl<'a> CommentThread<'a> {
    pub fn comment(&self) -> &'a Comment {
        let forest = self.forest;
        &forest.nodes[&self.id].comment
    }

    pub fn replies(&self) -> impl Iterator<Item = CommentThread<'a>> + 'a {
        let forest = self.forest;
        forest.nodes[&self.id]
            .children
            .iter()
            .map(move |id| CommentThread { forest, id: *id })
    }

    /// Total comments in this thread, the root included.
    pub fn count(&self) -> usize {
        self.forest.count_subtree(self.id).unwrap_or(0)
    }
}

impl Serialize for CommentThread<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let comment = self.comment();
        let replies: Vec<CommentThread<'_>> = self.replies().collect();
        let mut s = serializer.serialize_struct("CommentThread", 7)?;
        s.serialize_field("id", &comment.id)?;
        s.serialize_field("content", &comment.content)?;
        s.serialize_field("author_id", &comment.author_id)?;
        s.serialize_field("post_id", &comment.post_id)?;
        s.serialize_field("parent_id", &comment.parent_id)?;
        s.serialize_field("created_at", &comment.created_at)?;
        s.serialize_field("replies", &replies)?;
        s.end()
    }
}
