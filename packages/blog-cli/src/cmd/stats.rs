//! Admin dashboard command

use anyhow::{Context, Result};
use blog_core::domains::dashboard::{
    all_comments, compute_dashboard_stats, popular_posts, recent_posts,
};
use blog_core::domains::posts::Post;
use colored::Colorize;

use crate::context::AppContext;

pub fn run(ctx: &AppContext, json: bool) -> Result<()> {
    let stats = compute_dashboard_stats(&ctx.store);

    if json {
        let out = serde_json::to_string_pretty(&stats).context("Failed to encode stats")?;
        println!("{}", out);
        return Ok(());
    }

    ctx.print_header("Dashboard");
    println!("{:<16} {}", "Total posts", stats.total_posts);
    println!("{:<16} {}", "Published", stats.published_posts);
    println!("{:<16} {}", "Members", stats.total_members);
    println!("{:<16} {}", "Comments", stats.top_level_comments);
    println!("{:<16} {}", "Replies", stats.replies());
    println!("{:<16} {}", "Total likes", stats.total_likes);

    ctx.print_header("Recent posts");
    for post in recent_posts(ctx.store.posts(), ctx.config.popular_limit) {
        println!(
            "{} {} ({})",
            post.title,
            post.created_at.format("%b %d, %Y").to_string().dimmed(),
            publication_status(post)
        );
    }

    ctx.print_header("Popular posts");
    for (rank, post) in popular_posts(ctx.store.posts(), ctx.config.popular_limit)
        .into_iter()
        .enumerate()
    {
        println!(
            "{:>2}. {} ({} likes, {})",
            rank + 1,
            post.title,
            post.likes,
            publication_status(post)
        );
    }

    ctx.print_header("Members");
    for member in ctx.store.members() {
        let role = if member.is_admin() {
            member.role.to_string().magenta()
        } else {
            member.role.to_string().normal()
        };
        println!(
            "{} @{} <{}> {} joined {}",
            member.display_name.bold(),
            member.username,
            member.email,
            role,
            member.created_at.format("%b %d, %Y")
        );
    }

    ctx.print_header("All comments");
    let comments = all_comments(&ctx.store);
    if comments.is_empty() {
        println!("No comments yet.");
    }
    for entry in comments {
        println!(
            "{}{} on {}: {}",
            "  ".repeat(entry.depth),
            ctx.author_name(entry.comment.author_id).bold(),
            entry.post_title.italic(),
            entry.comment.content
        );
    }
    Ok(())
}

fn publication_status(post: &Post) -> colored::ColoredString {
    if post.published {
        "published".green()
    } else {
        "draft".yellow()
    }
}
