use serde::{Deserialize, Serialize};
use crate::site_ids::SiteIds;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub year: Option<u32>, // Trakt sends null for unreleased titles
    pub ids: SiteIds,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Show {
    pub title: String,
    pub year: Option<u32>,
    pub ids: SiteIds,
}

/// A season always carries its own copy of the parent show
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Season {
    pub number: u32,
    pub ids: SiteIds,
    pub show: Show,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Episode {
    pub title: Option<String>,
    pub season: u32,
    pub episode: u32,
    pub ids: SiteIds,
    pub show: Show,
}

/// Any of the four media kinds Trakt can attach to a rating
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "media_type", content = "media_data", rename_all = "lowercase")]
pub enum Media {
    Movie(Movie),
    Show(Show),
    Season(Season),
    Episode(Episode),
}

impl Media {
    /// The discriminator Trakt uses for this kind
    pub fn media_type(&self) -> &'static str {
        match self {
            Media::Movie(_) => "movie",
            Media::Show(_) => "show",
            Media::Season(_) => "season",
            Media::Episode(_) => "episode",
        }
    }
}

impl Episode {
    /// Human-readable label, e.g. "Breaking Bad S01E01: Pilot"
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => format!(
                "{} S{:02}E{:02}: {}",
                self.show.title, self.season, self.episode, title
            ),
            None => format!("{} S{:02}E{:02}", self.show.title, self.season, self.episode),
        }
    }
}
