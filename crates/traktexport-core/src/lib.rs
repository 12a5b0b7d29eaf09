pub mod error;
pub mod merge;
pub mod parse;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::{MergeError, ParseError};
pub use merge::{merge_exports, merge_history, read_and_merge_exports};
pub use parse::{
    classify_export, format_trakt_datetime, parse_export, parse_export_file, parse_export_reader,
    parse_export_str, parse_ids, parse_trakt_datetime, MediaKind,
};
