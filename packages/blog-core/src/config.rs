use anyhow::{ensure, Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Characters kept when an excerpt is generated from the body.
    pub excerpt_length: usize,
    /// Reading speed used for the "min read" estimate.
    pub words_per_minute: usize,
    /// Number of posts in the dashboard's popular list.
    pub popular_limit: usize,
    /// Start from the sample data set instead of an empty store.
    pub seed_mock_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            excerpt_length: 200,
            words_per_minute: 200,
            popular_limit: 5,
            seed_mock_data: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Missing keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            excerpt_length: match lookup("BLOG_EXCERPT_LENGTH") {
                Some(v) => v
                    .parse()
                    .context("BLOG_EXCERPT_LENGTH must be a valid number")?,
                None => defaults.excerpt_length,
            },
            words_per_minute: match lookup("BLOG_WORDS_PER_MINUTE") {
                Some(v) => v
                    .parse()
                    .context("BLOG_WORDS_PER_MINUTE must be a valid number")?,
                None => defaults.words_per_minute,
            },
            popular_limit: match lookup("BLOG_POPULAR_LIMIT") {
                Some(v) => v
                    .parse()
                    .context("BLOG_POPULAR_LIMIT must be a valid number")?,
                None => defaults.popular_limit,
            },
            seed_mock_data: match lookup("BLOG_SEED_MOCK_DATA") {
                Some(v) => v
                    .parse()
                    .context("BLOG_SEED_MOCK_DATA must be true or false")?,
                None => defaults.seed_mock_data,
            },
        };

        ensure!(config.words_per_minute > 0, "BLOG_WORDS_PER_MINUTE must be positive");
        Ok(config)
    }
}
