use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::media::{Media, Movie, Show};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "media_type", content = "media_data", rename_all = "lowercase")]
pub enum WatchlistMedia {
    Movie(Movie),
    Show(Show),
}

impl TryFrom<Media> for WatchlistMedia {
    type Error = Media;

    fn try_from(media: Media) -> Result<Self, Self::Error> {
        match media {
            Media::Movie(movie) => Ok(WatchlistMedia::Movie(movie)),
            Media::Show(show) => Ok(WatchlistMedia::Show(show)),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchlistEntry {
    pub listed_at: DateTime<Utc>,
    pub listed_at_id: u64, // Trakt's id for the watchlist row, not the media item
    #[serde(flatten)]
    pub media: WatchlistMedia,
}

impl WatchlistEntry {
    pub fn media_type(&self) -> &'static str {
        match self.media {
            WatchlistMedia::Movie(_) => "movie",
            WatchlistMedia::Show(_) => "show",
        }
    }
}
