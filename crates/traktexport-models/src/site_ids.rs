use serde::{Deserialize, Serialize};

/// Cross-reference identifiers attached to every Trakt media item
///
/// `trakt_id` is the only identifier Trakt guarantees. Every other ID is
/// passed through as-is and is `None` when the service did not send one
/// (never zero or an empty string).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteIds {
    pub trakt_id: u64,
    pub trakt_slug: Option<String>,
    pub imdb_id: Option<String>,
    pub tmdb_id: Option<u64>,
    pub tvdb_id: Option<u64>,
    pub tvrage_id: Option<u64>,
}

impl SiteIds {
    /// Create a SiteIds with only the Trakt ID set
    pub fn new(trakt_id: u64) -> Self {
        Self {
            trakt_id,
            trakt_slug: None,
            imdb_id: None,
            tmdb_id: None,
            tvdb_id: None,
            tvrage_id: None,
        }
    }
}

