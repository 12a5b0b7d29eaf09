use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::media::{Episode, Media, Movie};

/// Only movies and episodes can be scrobbled
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "media_type", content = "media_data", rename_all = "lowercase")]
pub enum HistoryMedia {
    Movie(Movie),
    Episode(Episode),
}

impl TryFrom<Media> for HistoryMedia {
    type Error = Media;

    fn try_from(media: Media) -> Result<Self, Self::Error> {
        match media {
            Media::Movie(movie) => Ok(HistoryMedia::Movie(movie)),
            Media::Episode(episode) => Ok(HistoryMedia::Episode(episode)),
            other => Err(other),
        }
    }
}

/// A single scrobble
///
/// `history_id` is assigned by Trakt and unique across the whole account,
/// so two entries with the same id are the same watch event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub history_id: u64,
    pub watched_at: DateTime<Utc>,
    pub action: String, // "scrobble", "checkin" or "watch"
    #[serde(flatten)]
    pub media: HistoryMedia,
}

impl HistoryEntry {
    pub fn media_type(&self) -> &'static str {
        match self.media {
            HistoryMedia::Movie(_) => "movie",
            HistoryMedia::Episode(_) => "episode",
        }
    }

    pub fn display_title(&self) -> String {
        match &self.media {
            HistoryMedia::Movie(m) => m.title.clone(),
            HistoryMedia::Episode(e) => e.display_title(),
        }
    }
}
