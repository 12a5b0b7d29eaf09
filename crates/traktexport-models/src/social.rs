use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Follow {
    pub followed_at: DateTime<Utc>,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub comment_id: u64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub likes: u64,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraktList {
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub likes: u64,
    pub username: String,
}

/// Something the user liked: a comment or a list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "media_type", content = "media_data", rename_all = "lowercase")]
pub enum LikedItem {
    Comment(Comment),
    List(TraktList),
}

impl LikedItem {
    pub fn media_type(&self) -> &'static str {
        match self {
            LikedItem::Comment(_) => "comment",
            LikedItem::List(_) => "list",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Like {
    pub liked_at: DateTime<Utc>,
    #[serde(flatten)]
    pub item: LikedItem,
}

impl Like {
    pub fn media_type(&self) -> &'static str {
        self.item.media_type()
    }
}
