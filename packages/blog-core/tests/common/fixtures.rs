//! Test fixtures for building posts and stores.
//!
//! Posts are assembled directly from the model types so tests control ids,
//! dates and comment counts exactly.

use std::collections::BTreeSet;

use blog_core::common::{MemberId, PostId};
use blog_core::domains::comments::CommentForest;
use blog_core::domains::member::{Member, MemberRole};
use blog_core::domains::posts::{Category, Post};
use blog_core::BlogStore;
use chrono::{DateTime, TimeZone, Utc};
use typed_builder::TypedBuilder;

pub const TEST_AUTHOR: MemberId = MemberId::from_u128(100);
pub const TEST_ADMIN: MemberId = MemberId::from_u128(101);

/// Midnight UTC on the given day of January 2024.
pub fn jan(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
}

pub fn tags(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|t| t.to_string()).collect()
}

/// Post description for tests. Unset fields get neutral values.
#[derive(TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct TestPost {
    #[builder(default = PostId::new())]
    pub id: PostId,
    #[builder(default = "Untitled".to_string())]
    pub title: String,
    #[builder(default)]
    pub content: String,
    #[builder(default)]
    pub excerpt: String,
    #[builder(default = Category::Technology)]
    pub category: Category,
    #[builder(default)]
    pub tags: Vec<String>,
    #[builder(default)]
    pub likes: u32,
    /// Number of top-level comments to attach.
    #[builder(default)]
    pub comments: usize,
    #[builder(default = true)]
    pub published: bool,
    #[builder(default = jan(1))]
    pub created_at: DateTime<Utc>,
}

impl TestPost {
    pub fn into_post(self) -> Post {
        let mut forest = CommentForest::new(self.id);
        for i in 0..self.comments {
            forest
                .append_at(self.id, &format!("comment {}", i), TEST_AUTHOR, None, self.created_at)
                .unwrap();
        }

        Post {
            id: self.id,
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            cover_image: None,
            author_id: TEST_AUTHOR,
            category: self.category,
            tags: self.tags,
            likes: self.likes,
            liked_by: BTreeSet::new(),
            comments: forest,
            published: self.published,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

pub fn test_author() -> Member {
    Member::builder()
        .id(TEST_AUTHOR)
        .username("test_author")
        .email("author@example.com")
        .display_name("Test Author")
        .build()
}

pub fn test_admin() -> Member {
    Member::builder()
        .id(TEST_ADMIN)
        .username("test_admin")
        .email("admin@example.com")
        .display_name("Test Admin")
        .role(MemberRole::Admin)
        .build()
}

/// A store holding the test author, the test admin and `posts` in order.
pub fn store_with(posts: Vec<Post>) -> BlogStore {
    let mut store = BlogStore::new();
    store.add_member(test_author()).unwrap();
    store.add_member(test_admin()).unwrap();
    for post in posts {
        store.insert_post(post).unwrap();
    }
    store
}

/// Posts A, B, C: A and B published, C a draft.
///
/// A: Technology, 5 likes, 2 comments, Jan 10.
/// B: Design, 18 likes, no comments, Jan 8.
pub fn abc_posts() -> (Post, Post, Post) {
    let a = TestPost::builder()
        .title("A")
        .category(Category::Technology)
        .likes(5u32)
        .comments(2usize)
        .created_at(jan(10))
        .build()
        .into_post();
    let b = TestPost::builder()
        .title("B")
        .category(Category::Design)
        .likes(18u32)
        .created_at(jan(8))
        .build()
        .into_post();
    let c = TestPost::builder()
        .title("C")
        .likes(99u32)
        .published(false)
        .build()
        .into_post();
    (a, b, c)
}

pub fn ids(posts: &[&Post]) -> Vec<PostId> {
    posts.iter().map(|p| p.id).collect()
}
