use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::common::{BlogError, MemberId, Result};

/// A registered member. Authors posts and comments; admins may edit any post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct Member {
    #[builder(default)]
    pub id: MemberId,
    pub username: String,
    pub email: String,
    pub display_name: String,
    #[builder(default)]
    pub avatar: Option<String>,
    #[builder(default)]
    pub bio: Option<String>,
    #[builder(default)]
    pub role: MemberRole,
    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
}

impl Member {
    pub fn is_admin(&self) -> bool {
        self.role == MemberRole::Admin
    }

    /// Avatar URL, falling back to a generated initials avatar.
    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(url) => url.clone(),
            None => format!(
                "https://ui-avatars.com/api/?name={}&background=3B82F6&color=fff",
                self.display_name.replace(' ', "+")
            ),
        }
    }
}

/// Member role
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    #[default]
    User,
    Admin,
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberRole::User => write!(f, "user"),
            MemberRole::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for MemberRole {
    type Err = BlogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "user" => Ok(MemberRole::User),
            "admin" => Ok(MemberRole::Admin),
            _ => Err(BlogError::Configuration(format!("Invalid member role: {}", s))),
        }
    }
}
