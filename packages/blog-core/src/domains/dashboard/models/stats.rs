use serde::{Deserialize, Serialize};

/// Totals shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_posts: usize,
    pub published_posts: usize,
    pub total_members: usize,
    /// Top-level comments only; this is the figure the dashboard card shows.
    pub top_level_comments: usize,
    /// Comments at every depth.
    pub total_comments: usize,
    pub total_likes: u64,
}

impl DashboardStats {
    /// Zero when the totals are inconsistent, e.g. hand-built or deserialized.
    pub fn draft_posts(&self) -> usize {
        self.total_posts.saturating_sub(self.published_posts)
    }

    pub fn replies(&self) -> usize {
        self.total_comments.saturating_sub(self.top_level_comments)
    }
}
