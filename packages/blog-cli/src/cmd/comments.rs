//! Comment thread commands

use anyhow::{Context, Result};
use blog_core::common::{CommentId, PostId};
use colored::Colorize;
use tracing::info;

use crate::context::{parse_id, AppContext};

/// Print a post's comment threads, replies indented under their parent.
pub fn show(ctx: &AppContext, post_id: PostId) -> Result<()> {
    let post = ctx
        .store
        .post(post_id)
        .with_context(|| format!("Post {} not found", post_id))?;

    ctx.print_header(&format!(
        "Comments ({}) on \"{}\"",
        post.total_comment_count(),
        post.title
    ));

    if post.comments.is_empty() {
        println!("No comments yet. Be the first to share your thoughts!");
        return Ok(());
    }

    for (depth, comment) in post.comments.walk() {
        let indent = "  ".repeat(depth);
        println!(
            "{}{} {} {}",
            indent,
            ctx.author_name(comment.author_id).bold(),
            comment.created_at.format("%b %-d, %Y").to_string().dimmed(),
            format!("({})", comment.id).dimmed()
        );
        println!("{}  {}", indent, comment.content);
    }
    Ok(())
}

/// Append a comment (or a reply with `parent`) and print the updated thread.
pub fn reply(
    ctx: &mut AppContext,
    post_id: PostId,
    author: &str,
    content: &str,
    parent: Option<&str>,
) -> Result<()> {
    let author_id = ctx.member_by_username(author)?.id;
    let parent_id: Option<CommentId> = parent.map(parse_id).transpose()?;

    let comment = ctx
        .store
        .append_comment(post_id, content, author_id, parent_id)?;
    info!(comment_id = %comment.id, "Reply stored for this session");

    ctx.print_success(&format!(
        "{} added {}",
        author,
        if comment.is_reply() { "a reply" } else { "a comment" }
    ));
    show(ctx, post_id)
}
