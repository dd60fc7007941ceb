//! Post discovery: publication filter, text match, tag and category filters,
//! then an optional stable sort.
//!
//! The pipeline never mutates its input and never fails. Malformed queries
//! are rejected earlier, when a `PostQuery` is built from raw parameters.

use serde::{Deserialize, Serialize};
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::common::utils::{contains_lowercase, strip_html};
use crate::common::{BlogError, Result};
use crate::domains::posts::models::{Category, Post};

// =============================================================================
// Query types
// =============================================================================

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Newest first.
    #[serde(alias = "date")]
    Latest,
    /// Most likes first.
    #[serde(alias = "popularity")]
    Popular,
    /// Most top-level comments first.
    Trending,
    /// Filtered order, untouched.
    #[default]
    Relevance,
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Latest => write!(f, "latest"),
            SortMode::Popular => write!(f, "popular"),
            SortMode::Trending => write!(f, "trending"),
            SortMode::Relevance => write!(f, "relevance"),
        }
    }
}

/// `date` and `popularity` are the search page's names for latest/popular.
impl std::str::FromStr for SortMode {
    type Err = BlogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "latest" | "date" => Ok(SortMode::Latest),
            "popular" | "popularity" => Ok(SortMode::Popular),
            "trending" => Ok(SortMode::Trending),
            "relevance" => Ok(SortMode::Relevance),
            _ => Err(BlogError::Configuration(format!("Invalid sort mode: {}", s))),
        }
    }
}

/// Category restriction. `All` is the "all" sentinel.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = BlogError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// A validated discovery query.
#[derive(Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
pub struct PostQuery {
    /// Free text, matched case-insensitively as a substring. Empty = no filter.
    #[builder(default, setter(into))]
    pub text: String,
    /// Exact, case-insensitive tag match. `None` or empty = no filter.
    #[builder(default, setter(into, strip_option))]
    pub tag: Option<String>,
    #[builder(default, setter(into))]
    pub category: CategoryFilter,
    #[builder(default)]
    pub sort: SortMode,
}

/// Raw query parameters as they arrive from a URL or search bar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryParams {
    pub q: Option<String>,
    pub tag: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

impl QueryParams {
    /// Validate into a `PostQuery`.
    ///
    /// Blank values count as absent. A missing sort falls back to
    /// `default_sort`; an unknown sort or category is a configuration error.
    pub fn into_query(self, default_sort: SortMode) -> Result<PostQuery> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        let category = match present(self.category) {
            Some(raw) => raw.trim().parse()?,
            None => CategoryFilter::All,
        };
        let sort = match present(self.sort) {
            Some(raw) => raw.trim().parse()?,
            None => default_sort,
        };

        Ok(PostQuery {
            text: present(self.q).unwrap_or_default(),
            tag: present(self.tag),
            category,
            sort,
        })
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Run a query over `posts`, returning matching posts in result order.
///
/// The result is always a subsequence of `posts` before sorting, and every
/// sort is stable, so ties keep their original relative order.
pub fn search_posts<'a>(posts: &'a [Post], query: &PostQuery) -> Vec<&'a Post> {
    let text = query.text.to_lowercase();
    let tag = query
        .tag
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    let mut results: Vec<&Post> = posts
        .iter()
        .filter(|post| post.published)
        .filter(|post| text.is_empty() || matches_text(post, &text))
        .filter(|post| tag.as_deref().map_or(true, |t| has_tag(post, t)))
        .filter(|post| query.category.matches(post.category))
        .collect();

    match query.sort {
        SortMode::Latest => results.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Popular => results.sort_by(|a, b| b.likes.cmp(&a.likes)),
        SortMode::Trending => results.sort_by(|a, b| {
            b.top_level_comment_count()
                .cmp(&a.top_level_comment_count())
        }),
        SortMode::Relevance => {}
    }

    debug!(
        text = %query.text,
        tag = ?query.tag,
        category = ?query.category,
        sort = %query.sort,
        scanned = posts.len(),
        matched = results.len(),
        "Post search complete"
    );

    results
}

/// Title, stripped body, excerpt or any tag contains `needle` (lowercase).
fn matches_text(post: &Post, needle: &str) -> bool {
    contains_lowercase(&post.title, needle)
        || contains_lowercase(&strip_html(&post.content), needle)
        || contains_lowercase(&post.excerpt, needle)
        || post.tags.iter().any(|t| contains_lowercase(t, needle))
}

/// Some tag equals `tag` (lowercase), whole-string.
fn has_tag(post: &Post, tag: &str) -> bool {
    post.tags.iter().any(|t| t.to_lowercase() == tag)
}
