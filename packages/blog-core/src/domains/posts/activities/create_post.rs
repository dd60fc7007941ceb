//! Post authoring - turning editor form input into posts

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::common::utils::{generate_excerpt, parse_tags};
use crate::common::{BlogError, MemberId, PostId, Result};
use crate::domains::comments::CommentForest;
use crate::domains::posts::models::{Category, Post};

/// Form input for creating or editing a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct PostDraft {
    pub title: String,
    /// Rich-text body (HTML).
    pub content: String,
    /// Left blank, an excerpt is generated from the body.
    pub excerpt: String,
    pub category: Option<Category>,
    /// Comma-separated, as typed into the tag field.
    pub tags: String,
    pub cover_image: Option<String>,
    pub published: bool,
}

impl PostDraft {
    fn validate(&self) -> Result<Category> {
        if self.title.trim().is_empty() {
            return Err(BlogError::Validation("post title must not be blank".to_string()));
        }
        self.category
            .ok_or_else(|| BlogError::Validation("post category is required".to_string()))
    }

    fn excerpt_or_generated(&self, excerpt_length: usize) -> String {
        if self.excerpt.trim().is_empty() {
            generate_excerpt(&self.content, excerpt_length)
        } else {
            self.excerpt.clone()
        }
    }

    /// Build a new post authored by `author_id`, with no likes or comments.
    pub fn into_post(
        self,
        author_id: MemberId,
        excerpt_length: usize,
        now: DateTime<Utc>,
    ) -> Result<Post> {
        let category = self.validate()?;
        let id = PostId::new();

        Ok(Post {
            id,
            excerpt: self.excerpt_or_generated(excerpt_length),
            title: self.title,
            content: self.content,
            cover_image: self.cover_image.filter(|url| !url.trim().is_empty()),
            author_id,
            category,
            tags: parse_tags(&self.tags),
            likes: 0,
            liked_by: BTreeSet::new(),
            comments: CommentForest::new(id),
            published: self.published,
            created_at: now,
            updated_at: now,
        })
    }

    /// Overwrite the editable fields of `post`.
    ///
    /// Author, likes, comments and `created_at` are untouched; `updated_at`
    /// becomes `now`. Nothing changes if validation fails.
    pub fn apply_to(self, post: &mut Post, excerpt_length: usize, now: DateTime<Utc>) -> Result<()> {
        let category = self.validate()?;

        post.excerpt = self.excerpt_or_generated(excerpt_length);
        post.title = self.title;
        post.content = self.content;
        post.cover_image = self.cover_image.filter(|url| !url.trim().is_empty());
        post.category = category;
        post.tags = parse_tags(&self.tags);
        post.published = self.published;
        post.updated_at = now;
        Ok(())
    }

    /// Pre-fill a draft from an existing post, for the edit form.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            category: Some(post.category),
            tags: post.tags.join(", "),
            cover_image: post.cover_image.clone(),
            published: post.published,
        }
    }
}
