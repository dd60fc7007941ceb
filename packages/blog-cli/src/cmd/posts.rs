//! Search and feed commands

use anyhow::{Context, Result};
use blog_core::domains::posts::{
    displayed_likes, feed_heading, reading_time, split_featured, Post, QueryParams, SortMode,
};
use colored::Colorize;

use crate::context::AppContext;

/// Search published posts and print them in result order.
pub fn search(ctx: &AppContext, params: QueryParams, json: bool) -> Result<()> {
    let query = params.into_query(SortMode::Relevance)?;
    let results = ctx.store.search(&query);

    if json {
        let out = serde_json::to_string_pretty(&results).context("Failed to encode results")?;
        println!("{}", out);
        return Ok(());
    }

    let title = if query.text.is_empty() {
        "Search".to_string()
    } else {
        format!("Search results for \"{}\"", query.text)
    };
    ctx.print_header(&title);
    ctx.print_info(&format!(
        "{} post{} found, sorted by {}",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        query.sort
    ));

    if results.is_empty() {
        println!("No posts found. Try adjusting your search terms or filters.");
    }
    for post in results {
        print_post(ctx, post);
    }
    Ok(())
}

/// Home feed: newest first by default, first result featured.
pub fn feed(ctx: &AppContext, params: QueryParams) -> Result<()> {
    let query = params.into_query(SortMode::Latest)?;
    let results = ctx.store.search(&query);
    let (featured, rest) = split_featured(&results);

    match featured {
        Some(post) => {
            ctx.print_header("Featured");
            print_post(ctx, post);
        }
        None => {
            println!("No posts yet.");
            return Ok(());
        }
    }

    if !rest.is_empty() {
        ctx.print_header(feed_heading(query.sort));
        for post in rest {
            print_post(ctx, post);
        }
    }
    Ok(())
}

fn print_post(ctx: &AppContext, post: &Post) {
    println!();
    println!("{}  {}", post.title.bold(), format!("[{}]", post.category).blue());
    println!(
        "  {} | {} | {} likes | {} comments | {} min read",
        ctx.author_name(post.author_id),
        post.created_at.format("%b %-d, %Y"),
        displayed_likes(post, false),
        post.total_comment_count(),
        reading_time(post, ctx.config.words_per_minute)
    );
    println!("  {}", post.excerpt.dimmed());
    if !post.tags.is_empty() {
        let tags: Vec<String> = post.unique_tags().iter().map(|t| format!("#{}", t)).collect();
        println!("  {}", tags.join(" ").cyan());
    }
    println!("  id: {}", post.id);
}
