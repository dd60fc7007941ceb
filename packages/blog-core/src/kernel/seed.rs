//! Sample data set: two members, three published posts and a two-comment
//! thread on the first post.
//!
//! Ids are fixed so the same post can be addressed across runs
//! (`00000000-0000-0000-0000-000000000001` and so on).

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::common::{BlogError, CommentId, MemberId, PostId, Result};
use crate::domains::comments::{Comment, CommentForest};
use crate::domains::member::Member;
use crate::domains::posts::{Category, Post};
use crate::kernel::BlogStore;

pub const JOHN_DOE: MemberId = MemberId::from_u128(1);
pub const JANE_SMITH: MemberId = MemberId::from_u128(2);

pub const WEB_TRENDS_POST: PostId = PostId::from_u128(1);
pub const ACCESSIBILITY_POST: PostId = PostId::from_u128(2);
pub const HOME_OFFICE_POST: PostId = PostId::from_u128(3);

pub const FIRST_COMMENT: CommentId = CommentId::from_u128(1);
pub const SECOND_COMMENT: CommentId = CommentId::from_u128(2);

const WEB_TRENDS_BODY: &str = "<h2>Introduction</h2>
<p>Web development keeps moving quickly. New tools and frameworks show up every few months, and a handful of them are changing how web applications get built this year.</p>
<h3>1. AI-Powered Development Tools</h3>
<p>Code completion, test generation and review assistants are now part of many everyday workflows.</p>
<h3>2. Web Assembly (WASM) Adoption</h3>
<p>WebAssembly brings near-native speed to the browser for code written in Rust, C++ and Go.</p>
<h3>3. Progressive Web Apps (PWAs)</h3>
<p>PWAs narrow the gap between web and native apps while keeping the reach of a plain URL.</p>
<p>More on each of these in upcoming posts.</p>";

const ACCESSIBILITY_BODY: &str = "<h2>Why Accessibility Matters</h2>
<p>Accessible sites work for everyone, including people with disabilities. It is a legal requirement in many places and simply good practice everywhere else.</p>
<h3>Key Principles of Accessible Design</h3>
<ul>
<li><strong>Perceivable:</strong> information can be presented in ways users can perceive</li>
<li><strong>Operable:</strong> every control can be used by every user</li>
<li><strong>Understandable:</strong> content and controls behave predictably</li>
<li><strong>Robust:</strong> assistive technologies can interpret the markup</li>
</ul>
<h3>Practical Implementation Tips</h3>
<p>Start with semantic HTML, check color contrast, write alternative text for images and test with a screen reader.</p>";

const HOME_OFFICE_BODY: &str = "<h2>Creating Your Ideal Workspace</h2>
<p>Working from home goes better with a space set up for focus.</p>
<h3>Essential Equipment</h3>
<p>A good chair, decent lighting and a reliable connection come first.</p>
<h3>Organizing Your Space</h3>
<p>Keep the desk clear and pick storage that fits the way you work.</p>
<h3>Maintaining Work-Life Balance</h3>
<p>A dedicated room or corner makes it easier to stop working at the end of the day.</p>";

/// Midnight UTC on the given day.
fn day(year: i32, month: u32, date: u32) -> Result<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, date)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            BlogError::Configuration(format!("invalid seed date {}-{}-{}", year, month, date))
        })
}

fn members() -> Result<Vec<Member>> {
    Ok(vec![
        Member::builder()
            .id(JOHN_DOE)
            .username("john_doe")
            .email("john@example.com")
            .display_name("John Doe")
            .avatar(Some(
                "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150"
                    .to_string(),
            ))
            .bio(Some("Tech enthusiast and blogger".to_string()))
            .created_at(day(2024, 1, 1)?)
            .build(),
        Member::builder()
            .id(JANE_SMITH)
            .username("jane_smith")
            .email("jane@example.com")
            .display_name("Jane Smith")
            .avatar(Some(
                "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150"
                    .to_string(),
            ))
            .bio(Some("UX Designer and creative writer".to_string()))
            .created_at(day(2024, 1, 5)?)
            .build(),
    ])
}

struct SeedPost {
    id: PostId,
    title: &'static str,
    content: &'static str,
    excerpt: &'static str,
    cover_image: &'static str,
    author_id: MemberId,
    category: Category,
    tags: &'static [&'static str],
    likes: u32,
    liked_by: &'static [MemberId],
    created_at: DateTime<Utc>,
}

impl SeedPost {
    fn into_post(self) -> Post {
        Post {
            id: self.id,
            title: self.title.to_string(),
            content: self.content.to_string(),
            excerpt: self.excerpt.to_string(),
            cover_image: Some(self.cover_image.to_string()),
            author_id: self.author_id,
            category: self.category,
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            likes: self.likes,
            liked_by: self.liked_by.iter().copied().collect::<BTreeSet<_>>(),
            comments: CommentForest::new(self.id),
            published: true,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

fn posts() -> Result<Vec<Post>> {
    let mut web_trends = SeedPost {
        id: WEB_TRENDS_POST,
        title: "The Future of Web Development: Trends to Watch in 2024",
        content: WEB_TRENDS_BODY,
        excerpt: "Explore the cutting-edge trends shaping web development in 2024, from AI-powered tools to WebAssembly adoption.",
        cover_image: "https://images.pexels.com/photos/11035380/pexels-photo-11035380.jpeg?auto=compress&cs=tinysrgb&w=800",
        author_id: JOHN_DOE,
        category: Category::Technology,
        tags: &["web development", "AI", "WebAssembly", "PWA"],
        likes: 24,
        liked_by: &[JANE_SMITH],
        created_at: day(2024, 1, 10)?,
    }
    .into_post();

    web_trends.comments.insert(Comment {
        id: FIRST_COMMENT,
        content: "Great article! Very insightful.".to_string(),
        author_id: JANE_SMITH,
        post_id: WEB_TRENDS_POST,
        parent_id: None,
        created_at: day(2024, 1, 15)?,
    })?;
    web_trends.comments.insert(Comment {
        id: SECOND_COMMENT,
        content: "Thanks for sharing this. Looking forward to more content like this.".to_string(),
        author_id: JOHN_DOE,
        post_id: WEB_TRENDS_POST,
        parent_id: None,
        created_at: day(2024, 1, 16)?,
    })?;

    let accessibility = SeedPost {
        id: ACCESSIBILITY_POST,
        title: "Designing for Accessibility: A Comprehensive Guide",
        content: ACCESSIBILITY_BODY,
        excerpt: "Learn how to create inclusive web experiences through thoughtful accessibility design principles and practical implementation strategies.",
        cover_image: "https://images.pexels.com/photos/7688336/pexels-photo-7688336.jpeg?auto=compress&cs=tinysrgb&w=800",
        author_id: JANE_SMITH,
        category: Category::Design,
        tags: &["accessibility", "UX", "inclusive design"],
        likes: 18,
        liked_by: &[JOHN_DOE],
        created_at: day(2024, 1, 8)?,
    }
    .into_post();

    let home_office = SeedPost {
        id: HOME_OFFICE_POST,
        title: "Remote Work: Building a Productive Home Office",
        content: HOME_OFFICE_BODY,
        excerpt: "Discover practical tips for creating a productive and comfortable home office that supports remote work success.",
        cover_image: "https://images.pexels.com/photos/4491461/pexels-photo-4491461.jpeg?auto=compress&cs=tinysrgb&w=800",
        author_id: JOHN_DOE,
        category: Category::Lifestyle,
        tags: &["remote work", "productivity", "home office"],
        likes: 12,
        liked_by: &[],
        created_at: day(2024, 1, 5)?,
    }
    .into_post();

    Ok(vec![web_trends, accessibility, home_office])
}

impl BlogStore {
    /// A store loaded with the sample members, posts and comments.
    pub fn seeded() -> Result<Self> {
        let mut store = Self::new();
        for member in members()? {
            store.add_member(member)?;
        }
        for post in posts()? {
            store.insert_post(post)?;
        }
        debug!(
            members = store.members().len(),
            posts = store.posts().len(),
            "Seeded sample data"
        );
        Ok(store)
    }
}
