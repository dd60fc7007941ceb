use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{BlogError, MemberId, PostId, Result};
use crate::domains::comments::CommentForest;

/// A blog post together with its comment forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Rich-text body as produced by the editor (HTML).
    pub content: String,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub author_id: MemberId,
    pub category: Category,
    /// Tags as entered. Duplicates may occur; matching treats them as a set.
    pub tags: Vec<String>,
    /// Like counter. Not derived from `liked_by` and not kept in sync with it.
    pub likes: u32,
    pub liked_by: BTreeSet<MemberId>,
    pub comments: CommentForest,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Top-level comments only. Used by the trending sort.
    pub fn top_level_comment_count(&self) -> usize {
        self.comments.top_level_count()
    }

    /// Comments at every depth.
    pub fn total_comment_count(&self) -> usize {
        self.comments.count_all()
    }

    pub fn is_liked_by(&self, member_id: MemberId) -> bool {
        self.liked_by.contains(&member_id)
    }

    /// Tags with case-insensitive duplicates removed, first spelling kept.
    pub fn unique_tags(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.tags
            .iter()
            .filter(|t| seen.insert(t.to_lowercase()))
            .map(String::as_str)
            .collect()
    }
}

// =============================================================================
// Category
// =============================================================================

/// The fixed set of post categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technology,
    Design,
    Lifestyle,
    Business,
    Travel,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Technology,
        Category::Design,
        Category::Lifestyle,
        Category::Business,
        Category::Travel,
    ];

    /// Display name, e.g. "Technology".
    pub fn name(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Design => "Design",
            Category::Lifestyle => "Lifestyle",
            Category::Business => "Business",
            Category::Travel => "Travel",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Design => "design",
            Category::Lifestyle => "lifestyle",
            Category::Business => "business",
            Category::Travel => "travel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Technology => "Latest tech trends and news",
            Category::Design => "UI/UX and creative design",
            Category::Lifestyle => "Life tips and experiences",
            Category::Business => "Entrepreneurship and business insights",
            Category::Travel => "Travel guides and experiences",
        }
    }

    /// Badge color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Technology => "#3B82F6",
            Category::Design => "#8B5CF6",
            Category::Lifestyle => "#10B981",
            Category::Business => "#F59E0B",
            Category::Travel => "#EF4444",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the display name ("Technology") or the slug ("technology").
impl std::str::FromStr for Category {
    type Err = BlogError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s || c.slug() == s)
            .ok_or_else(|| BlogError::Configuration(format!("Invalid category: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_name_and_slug() {
        assert_eq!("Design".parse::<Category>().unwrap(), Category::Design);
        assert_eq!("travel".parse::<Category>().unwrap(), Category::Travel);
    }

    #[test]
    fn test_category_rejects_unknown() {
        let err = "Cooking".parse::<Category>().unwrap_err();
        assert!(matches!(err, BlogError::Configuration(_)));
    }

    #[test]
    fn test_category_display_is_name() {
        assert_eq!(Category::Technology.to_string(), "Technology");
        assert_eq!(Category::Business.color(), "#F59E0B");
    }
}
