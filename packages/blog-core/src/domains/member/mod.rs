//! Member domain - authors, commenters and admins

pub mod models;

pub use models::member::{Member, MemberRole};
