use std::path::PathBuf;
use thiserror::Error;

/// Fatal problems with an export document
///
/// Unknown `type` discriminators on list elements are not errors: those
/// elements are logged and skipped so one new Trakt media kind does not make
/// a whole export unreadable.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed timestamp {value:?}")]
    MalformedTimestamp { value: String },

    #[error("missing required field '{field}' in {context}")]
    MissingRequiredField {
        field: &'static str,
        context: &'static str,
    },

    #[error("field '{field}' in {context} is not {expected}")]
    InvalidFieldType {
        field: &'static str,
        expected: &'static str,
        context: &'static str,
    },

    #[error("{context} is not a JSON object")]
    NotAnObject { context: &'static str },

    #[error("unrecognized export type {value:?}, expected \"full\" or \"partial\"")]
    UnrecognizedExportType { value: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read export: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("no full export to merge into ({partial_count} partial exports given)")]
    NoFullExportAvailable { partial_count: usize },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}
