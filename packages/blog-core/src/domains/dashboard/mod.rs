//! Dashboard domain - aggregate figures for the admin view

pub mod activities;
pub mod models;

pub use activities::{
    all_comments, compute_dashboard_stats, popular_posts, recent_posts, PostComment,
};
pub use models::DashboardStats;
