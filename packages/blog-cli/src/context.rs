//! Application context with shared state and output helpers

use anyhow::{Context, Result};
use blog_core::common::Id;
use blog_core::domains::member::Member;
use blog_core::{BlogStore, Config, MemberId};
use colored::Colorize;

/// Application context passed to all commands
pub struct AppContext {
    pub config: Config,
    pub store: BlogStore,
    pub quiet: bool,
}

impl AppContext {
    pub fn new(quiet: bool) -> Result<Self> {
        let config = Config::from_env().context("Failed to load configuration")?;
        let store = BlogStore::from_config(&config).context("Failed to build blog store")?;
        Ok(Self {
            config,
            store,
            quiet,
        })
    }

    /// Display name of a member, or a placeholder for unknown ids.
    pub fn author_name(&self, id: MemberId) -> String {
        self.store
            .member(id)
            .map(|m| m.display_name.clone())
            .unwrap_or_else(|| format!("unknown ({})", id.short()))
    }

    pub fn member_by_username(&self, username: &str) -> Result<&Member> {
        self.store
            .member_by_username(username)
            .with_context(|| format!("No member named '{}'", username))
    }

    pub fn print_header(&self, msg: &str) {
        if !self.quiet {
            println!();
            println!("{}", msg.bold());
        }
    }

    pub fn print_success(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.green());
        }
    }

    pub fn print_info(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.cyan());
        }
    }
}

/// Parse an id given either in full UUID form or as the small integer used
/// by the sample data ("1" for `00000000-0000-0000-0000-000000000001`).
pub fn parse_id<T>(raw: &str) -> Result<Id<T>> {
    let raw = raw.trim();
    match raw.parse::<u128>() {
        Ok(n) => Ok(Id::from_u128(n)),
        Err(_) => Id::parse(raw).with_context(|| format!("'{}' is not a valid id", raw)),
    }
}
