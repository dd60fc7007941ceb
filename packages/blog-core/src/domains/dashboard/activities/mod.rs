pub mod compute_stats;

pub use compute_stats::{
    all_comments, compute_dashboard_stats, popular_posts, recent_posts, PostComment,
};
