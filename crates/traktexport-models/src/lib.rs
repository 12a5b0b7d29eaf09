pub mod export;
pub mod history;
pub mod media;
pub mod rating;
pub mod site_ids;
pub mod social;
pub mod watchlist;

pub use export::{ExportKind, FullExport, PartialExport, TraktExport};
pub use history::{HistoryEntry, HistoryMedia};
pub use media::{Episode, Media, Movie, Season, Show};
pub use rating::Rating;
pub use site_ids::SiteIds;
pub use social::{Comment, Follow, LikedItem, Like, TraktList};
pub use watchlist::{WatchlistEntry, WatchlistMedia};
