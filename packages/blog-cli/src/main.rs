//! Inkwell blog command line
//!
//! Works against an in-memory store built at startup (seeded with the sample
//! data unless BLOG_SEED_MOCK_DATA=false). Writes last for the process only.

use anyhow::Result;
use blog_core::domains::posts::QueryParams;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cmd;
mod context;

use context::{parse_id, AppContext};

#[derive(Parser)]
#[command(name = "blog")]
#[command(about = "Browse, search and comment on the Inkwell blog")]
#[command(version)]
struct Cli {
    /// Suppress headers and status lines
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search published posts
    Search {
        /// Free text matched against title, body, excerpt and tags
        #[arg(long)]
        q: Option<String>,

        /// Exact tag, case-insensitive
        #[arg(long)]
        tag: Option<String>,

        /// Category name or slug, or "all"
        #[arg(long)]
        category: Option<String>,

        /// latest, popular, trending or relevance (also: date, popularity)
        #[arg(long)]
        sort: Option<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the home feed with its featured post
    Feed {
        /// Category name or slug, or "all"
        #[arg(long)]
        category: Option<String>,

        /// Sort mode (defaults to latest)
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show admin dashboard figures
    Stats {
        /// Print totals as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a post's comment threads
    Comments {
        /// Post id (full UUID, or the sample data number)
        post_id: String,
    },

    /// Add a comment or reply to a post
    Reply {
        /// Post id (full UUID, or the sample data number)
        post_id: String,

        /// Username of the commenting member
        #[arg(long)]
        author: String,

        /// Comment text
        #[arg(long)]
        content: String,

        /// Comment to reply to
        #[arg(long)]
        parent: Option<String>,
    },
}

fn main() -> ExitCode {
    // Initialize logging. stdout is kept for command output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,blog_core=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = AppContext::new(cli.quiet)?;

    match cli.command {
        Commands::Search {
            q,
            tag,
            category,
            sort,
            json,
        } => cmd::posts::search(
            &ctx,
            QueryParams {
                q,
                tag,
                category,
                sort,
            },
            json,
        ),
        Commands::Feed { category, sort } => cmd::posts::feed(
            &ctx,
            QueryParams {
                category,
                sort,
                ..Default::default()
            },
        ),
        Commands::Stats { json } => cmd::stats::run(&ctx, json),
        Commands::Comments { post_id } => cmd::comments::show(&ctx, parse_id(&post_id)?),
        Commands::Reply {
            post_id,
            author,
            content,
            parent,
        } => cmd::comments::reply(
            &mut ctx,
            parse_id(&post_id)?,
            &author,
            &content,
            parent.as_deref(),
        ),
    }
}
