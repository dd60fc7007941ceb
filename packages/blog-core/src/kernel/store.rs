//! In-memory blog store.
//!
//! Holds members and posts (each post owning its comment forest) in
//! insertion order, which is the order relevance ranking preserves.
//!
//! Single writer: every mutation takes `&mut self`. There is no locking and
//! no persistence; data is lost when the store is dropped.

use chrono::Utc;
use tracing::{info, warn};

use crate::common::{BlogError, CommentId, MemberId, PostId, Result};
use crate::config::Config;
use crate::domains::comments::Comment;
use crate::domains::member::Member;
use crate::domains::posts::{can_edit, search_posts, Post, PostDraft, PostQuery};

/// Members, posts and their comment forests.
#[derive(Debug, Clone)]
pub struct BlogStore {
    members: Vec<Member>,
    posts: Vec<Post>,
    excerpt_length: usize,
}

impl Default for BlogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlogStore {
    /// Create an empty store with default settings.
    pub fn new() -> Self {
        Self::with_excerpt_length(Config::default().excerpt_length)
    }

    pub fn with_excerpt_length(excerpt_length: usize) -> Self {
        Self {
            members: Vec::new(),
            posts: Vec::new(),
            excerpt_length,
        }
    }

    /// Build a store from configuration, seeding sample data if enabled.
    pub fn from_config(config: &Config) -> Result<Self> {
        if config.seed_mock_data {
            let mut store = Self::seeded()?;
            store.excerpt_length = config.excerpt_length;
            Ok(store)
        } else {
            Ok(Self::with_excerpt_length(config.excerpt_length))
        }
    }

    // -----------------------------------------------------------------------
    // Members
    // -----------------------------------------------------------------------

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn member_by_username(&self, username: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.username == username)
    }

    /// Register a member. Ids and usernames must be unique.
    pub fn add_member(&mut self, member: Member) -> Result<MemberId> {
        if self.member(member.id).is_some() {
            return Err(BlogError::Integrity(format!(
                "member id {} is already in use",
                member.id
            )));
        }
        if self.member_by_username(&member.username).is_some() {
            return Err(BlogError::Validation(format!(
                "username {} is taken",
                member.username
            )));
        }
        let id = member.id;
        info!(member_id = %id, username = %member.username, "Member added");
        self.members.push(member);
        Ok(id)
    }

    fn require_member(&self, id: MemberId) -> Result<&Member> {
        self.member(id).ok_or(BlogError::MemberNotFound(id))
    }

    // -----------------------------------------------------------------------
    // Posts
    // -----------------------------------------------------------------------

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn post_index(&self, id: PostId) -> Result<usize> {
        self.posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(BlogError::PostNotFound(id))
    }

    /// Run a discovery query over every post in store order.
    pub fn search(&self, query: &PostQuery) -> Vec<&Post> {
        search_posts(&self.posts, query)
    }

    /// Insert a fully-formed post, e.g. from seed data.
    ///
    /// The author must exist, the id must be unused and the post's comment
    /// forest must belong to it.
    pub fn insert_post(&mut self, post: Post) -> Result<PostId> {
        self.require_member(post.author_id)?;
        if self.post(post.id).is_some() {
            return Err(BlogError::Integrity(format!(
                "post id {} is already in use",
                post.id
            )));
        }
        if post.comments.post_id() != post.id {
            return Err(BlogError::Integrity(format!(
                "post {} carries the comment forest of post {}",
                post.id,
                post.comments.post_id()
            )));
        }
        let id = post.id;
        self.posts.push(post);
        Ok(id)
    }

    /// Create a post from an editor draft.
    pub fn create_post(&mut self, author_id: MemberId, draft: PostDraft) -> Result<PostId> {
        self.require_member(author_id)?;
        let post = draft.into_post(author_id, self.excerpt_length, Utc::now())?;
        let id = post.id;
        info!(post_id = %id, title = %post.title, published = post.published, "Post created");
        self.posts.push(post);
        Ok(id)
    }

    /// Replace a post's editable fields. Only the author or an admin may edit.
    pub fn update_post(&mut self, editor_id: MemberId, post_id: PostId, draft: PostDraft) -> Result<()> {
        let index = self.post_index(post_id)?;
        self.authorize(editor_id, index)?;

        let excerpt_length = self.excerpt_length;
        draft.apply_to(&mut self.posts[index], excerpt_length, Utc::now())?;
        info!(post_id = %post_id, editor_id = %editor_id, "Post updated");
        Ok(())
    }

    /// Remove a post and its comments. Only the author or an admin may delete.
    pub fn delete_post(&mut self, editor_id: MemberId, post_id: PostId) -> Result<Post> {
        let index = self.post_index(post_id)?;
        self.authorize(editor_id, index)?;

        let post = self.posts.remove(index);
        info!(post_id = %post_id, editor_id = %editor_id, "Post deleted");
        Ok(post)
    }

    fn authorize(&self, editor_id: MemberId, index: usize) -> Result<()> {
        let editor = self.require_member(editor_id)?;
        let post = &self.posts[index];
        if can_edit(editor, post) {
            Ok(())
        } else {
            warn!(post_id = %post.id, editor_id = %editor_id, "Edit refused");
            Err(BlogError::PermissionDenied {
                member_id: editor_id,
                post_id: post.id,
            })
        }
    }

    // -----------------------------------------------------------------------
    // Comments
    // -----------------------------------------------------------------------

    /// Append a comment (or a reply when `parent_id` is given) to a post.
    ///
    /// Fails with `PostNotFound`/`MemberNotFound` for unknown ids, with
    /// `Integrity` when the parent lives in another post's forest, and with
    /// `CommentNotFound` when the parent exists nowhere. The store is
    /// unchanged on failure.
    pub fn append_comment(
        &mut self,
        post_id: PostId,
        content: &str,
        author_id: MemberId,
        parent_id: Option<CommentId>,
    ) -> Result<Comment> {
        let index = self.post_index(post_id)?;
        self.require_member(author_id)?;

        if let Some(parent_id) = parent_id {
            if !self.posts[index].comments.contains(parent_id) {
                if let Some(owner) = self.posts.iter().find(|p| p.comments.contains(parent_id)) {
                    warn!(
                        post_id = %post_id,
                        parent_id = %parent_id,
                        owner = %owner.id,
                        "Reply target belongs to another post"
                    );
                    return Err(BlogError::Integrity(format!(
                        "comment {} belongs to post {}, not {}",
                        parent_id, owner.id, post_id
                    )));
                }
            }
        }

        let comment = self.posts[index]
            .comments
            .append(post_id, content, author_id, parent_id)?;
        info!(
            post_id = %post_id,
            comment_id = %comment.id,
            is_reply = comment.is_reply(),
            "Comment added"
        );
        Ok(comment)
    }
}
