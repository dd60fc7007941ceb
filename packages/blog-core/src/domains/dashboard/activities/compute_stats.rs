use serde::Serialize;
use tracing::debug;

use crate::domains::comments::Comment;
use crate::domains::dashboard::models::DashboardStats;
use crate::domains::posts::Post;
use crate::kernel::BlogStore;

/// Count posts, members, comments and likes across the whole store.
///
/// Drafts are included in every total except `published_posts`.
pub fn compute_dashboard_stats(store: &BlogStore) -> DashboardStats {
    let posts = store.posts();

    let stats = DashboardStats {
        total_posts: posts.len(),
        published_posts: posts.iter().filter(|p| p.published).count(),
        total_members: store.members().len(),
        top_level_comments: posts.iter().map(Post::top_level_comment_count).sum(),
        total_comments: posts.iter().map(Post::total_comment_count).sum(),
        total_likes: posts.iter().map(|p| u64::from(p.likes)).sum(),
    };

    debug!(?stats, "Computed dashboard stats");
    stats
}

/// Posts with the most likes, drafts included.
///
/// Stable: posts with equal likes keep their store order.
pub fn popular_posts(posts: &[Post], limit: usize) -> Vec<&Post> {
    let mut ranked: Vec<&Post> = posts.iter().collect();
    ranked.sort_by(|a, b| b.likes.cmp(&a.likes));
    ranked.truncate(limit);
    ranked
}

/// The first `limit` posts in store order, drafts included.
pub fn recent_posts(posts: &[Post], limit: usize) -> &[Post] {
    &posts[..limit.min(posts.len())]
}

/// A comment together with the title of the post it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct PostComment<'a> {
    pub post_title: &'a str,
    pub depth: usize,
    pub comment: &'a Comment,
}

/// Every comment in the store: posts in store order, each post's forest in
/// depth-first pre-order.
pub fn all_comments(store: &BlogStore) -> Vec<PostComment<'_>> {
    store
        .posts()
        .iter()
        .flat_map(|post| {
            post.comments.walk().map(move |(depth, comment)| PostComment {
                post_title: &post.title,
                depth,
                comment,
            })
        })
        .collect()
}
