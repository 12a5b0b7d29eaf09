use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::media::Media;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rating {
    pub rated_at: DateTime<Utc>,
    pub rating: u8, // Trakt format (1-10 integer)
    #[serde(flatten)]
    pub media: Media,
}

impl Rating {
    pub fn media_type(&self) -> &'static str {
        self.media.media_type()
    }
}
