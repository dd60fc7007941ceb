//! Property tests for discovery ordering and comment traversal.

mod common;

use std::collections::HashSet;

use crate::common::*;
use blog_core::common::{CommentId, PostId};
use blog_core::domains::comments::CommentForest;
use blog_core::domains::posts::{search_posts, Category, CategoryFilter, Post, PostQuery, SortMode};
use proptest::prelude::*;

const TAGS: [&str; 3] = ["rust", "design", "travel"];

fn arb_post() -> impl Strategy<Value = Post> {
    (
        any::<bool>(),
        0..Category::ALL.len(),
        0u32..5,
        0usize..3,
        1u32..29,
        0..TAGS.len(),
    )
        .prop_map(|(published, category, likes, comments, day, tag)| {
            TestPost::builder()
                .published(published)
                .category(Category::ALL[category])
                .likes(likes)
                .comments(comments)
                .created_at(jan(day))
                .tags(tags(&[TAGS[tag]]))
                .build()
                .into_post()
        })
}

fn arb_query() -> impl Strategy<Value = PostQuery> {
    (
        proptest::option::of(0..Category::ALL.len()),
        proptest::option::of(0..TAGS.len()),
        prop_oneof![
            Just(SortMode::Latest),
            Just(SortMode::Popular),
            Just(SortMode::Trending),
            Just(SortMode::Relevance),
        ],
    )
        .prop_map(|(category, tag, sort)| PostQuery {
            text: String::new(),
            tag: tag.map(|t| TAGS[t].to_uppercase()),
            category: category
                .map(|c| CategoryFilter::from(Category::ALL[c]))
                .unwrap_or_default(),
            sort,
        })
}

/// Position of each post id in the input.
fn positions(posts: &[Post]) -> Vec<PostId> {
    posts.iter().map(|p| p.id).collect()
}

fn sort_key(post: &Post, sort: SortMode) -> i64 {
    match sort {
        SortMode::Latest => post.created_at.timestamp(),
        SortMode::Popular => i64::from(post.likes),
        SortMode::Trending => post.top_level_comment_count() as i64,
        SortMode::Relevance => 0,
    }
}

proptest! {
    #[test]
    fn results_pass_every_filter(posts in prop::collection::vec(arb_post(), 0..20), query in arb_query()) {
        let results = search_posts(&posts, &query);

        for post in &results {
            prop_assert!(post.published);
            prop_assert!(query.category.matches(post.category));
            if let Some(tag) = &query.tag {
                prop_assert!(post.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)));
            }
        }

        let expected = posts
            .iter()
            .filter(|p| p.published)
            .filter(|p| query.category.matches(p.category))
            .filter(|p| query.tag.as_ref().map_or(true, |tag| p.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))))
            .count();
        prop_assert_eq!(results.len(), expected);
    }

    #[test]
    fn sorts_are_stable_descending(posts in prop::collection::vec(arb_post(), 0..20), query in arb_query()) {
        let order = positions(&posts);
        let index = |id: PostId| order.iter().position(|p| *p == id).unwrap();
        let results = search_posts(&posts, &query);

        for pair in results.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (ka, kb) = (sort_key(a, query.sort), sort_key(b, query.sort));
            prop_assert!(ka >= kb);
            if ka == kb {
                prop_assert!(index(a.id) < index(b.id));
            }
        }
    }

    #[test]
    fn relevance_is_a_subsequence(posts in prop::collection::vec(arb_post(), 0..20), mut query in arb_query()) {
        query.sort = SortMode::Relevance;
        let order = positions(&posts);
        let results = search_posts(&posts, &query);

        let indices: Vec<usize> = results
            .iter()
            .map(|p| order.iter().position(|id| *id == p.id).unwrap())
            .collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn flatten_visits_every_comment_once(parents in prop::collection::vec(proptest::option::of(any::<prop::sample::Index>()), 0..60)) {
        let post_id = PostId::new();
        let mut forest = CommentForest::new(post_id);
        let mut appended: Vec<CommentId> = Vec::new();

        for (i, parent) in parents.iter().enumerate() {
            let parent_id = match parent {
                Some(index) if !appended.is_empty() => Some(appended[index.index(appended.len())]),
                _ => None,
            };
            let comment = forest
                .append(post_id, &format!("c{}", i), TEST_AUTHOR, parent_id)
                .unwrap();
            appended.push(comment.id);
        }

        let visited: Vec<CommentId> = forest.flatten().map(|c| c.id).collect();
        let unique: HashSet<CommentId> = visited.iter().copied().collect();

        prop_assert_eq!(visited.len(), forest.count_all());
        prop_assert_eq!(visited.len(), appended.len());
        prop_assert_eq!(unique.len(), appended.len());

        let roots = parents.iter().enumerate().filter(|(i, p)| p.is_none() || *i == 0).count();
        prop_assert_eq!(forest.top_level_count(), roots);
    }
}
