use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::history::HistoryEntry;
use crate::rating::Rating;
use crate::social::{Follow, Like};
use crate::watchlist::WatchlistEntry;

/// Which shape a raw export document has
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Full,
    Partial,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Full => "full",
            ExportKind::Partial => "partial",
        }
    }
}

/// History-only snapshot, typically from a capped-page fetch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartialExport {
    pub history: Vec<HistoryEntry>,
}

/// Complete account snapshot
///
/// Everything except `history` is a point-in-time copy of the account.
/// `stats` and `settings` are kept exactly as Trakt sent them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FullExport {
    pub username: String,
    pub followers: Vec<Follow>,
    pub following: Vec<Follow>,
    pub likes: Vec<Like>,
    pub stats: Map<String, Value>,
    pub settings: Map<String, Value>,
    pub watchlist: Vec<WatchlistEntry>,
    pub ratings: Vec<Rating>,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TraktExport {
    Full(FullExport),
    Partial(PartialExport),
}

impl TraktExport {
    pub fn kind(&self) -> ExportKind {
        match self {
            TraktExport::Full(_) => ExportKind::Full,
            TraktExport::Partial(_) => ExportKind::Partial,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        match self {
            TraktExport::Full(full) => &full.history,
            TraktExport::Partial(partial) => &partial.history,
        }
    }

    pub fn as_full(&self) -> Option<&FullExport> {
        match self {
            TraktExport::Full(full) => Some(full),
            TraktExport::Partial(_) => None,
        }
    }
}

impl From<FullExport> for TraktExport {
    fn from(full: FullExport) -> Self {
        TraktExport::Full(full)
    }
}

impl From<PartialExport> for TraktExport {
    fn from(partial: PartialExport) -> Self {
        TraktExport::Partial(partial)
    }
}
