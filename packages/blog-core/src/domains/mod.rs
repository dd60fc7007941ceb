// Business domains
pub mod comments;
pub mod dashboard;
pub mod member;
pub mod posts;
