//! Maps Trakt's loosely-typed JSON into the typed models
//!
//! Every parser works on borrowed `serde_json::Value`s. List sections are
//! exposed as lazy iterators so callers decide whether to collect.

mod datetime;
mod entities;
mod export;
mod fields;
mod ids;
mod media;

pub use datetime::{format_trakt_datetime, parse_trakt_datetime};
pub use entities::{
    parse_comment, parse_follow, parse_followers, parse_history, parse_history_entry, parse_like,
    parse_likes, parse_rating, parse_ratings, parse_trakt_list, parse_watchlist,
    parse_watchlist_entry,
};
pub use export::{
    classify_export, parse_export, parse_export_file, parse_export_reader, parse_export_str,
    parse_full_export, parse_partial_export,
};
pub use ids::parse_ids;
pub use media::{parse_episode, parse_media, parse_movie, parse_season, parse_show, MediaKind};
