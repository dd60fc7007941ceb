//! Read-side helpers shared by the post views

use crate::common::utils::reading_time_minutes;
use crate::domains::member::Member;
use crate::domains::posts::activities::search::SortMode;
use crate::domains::posts::models::Post;

/// Authors may edit their own posts; admins may edit any post.
pub fn can_edit(member: &Member, post: &Post) -> bool {
    member.id == post.author_id || member.is_admin()
}

/// Like count as shown to a viewer.
///
/// The like button is a visual toggle: it adds one to the stored counter
/// while active and is never written back, so `likes` and `liked_by` stay
/// independent.
pub fn displayed_likes(post: &Post, liked_by_viewer: bool) -> u32 {
    post.likes + u32::from(liked_by_viewer)
}

/// Estimated minutes to read the post body.
pub fn reading_time(post: &Post, words_per_minute: usize) -> usize {
    reading_time_minutes(&post.content, words_per_minute)
}

/// Split a feed into its featured head and the remaining posts.
///
/// This is a presentation policy of the home page; the discovery engine
/// itself only returns one ordered list.
pub fn split_featured<'r, 'a>(results: &'r [&'a Post]) -> (Option<&'a Post>, &'r [&'a Post]) {
    match results.split_first() {
        Some((first, rest)) => (Some(*first), rest),
        None => (None, &[]),
    }
}

/// Heading of the feed section below the featured post.
pub fn feed_heading(sort: SortMode) -> &'static str {
    match sort {
        SortMode::Latest => "Latest Articles",
        SortMode::Popular => "Popular Articles",
        SortMode::Trending => "Trending Articles",
        SortMode::Relevance => "Articles",
    }
}
