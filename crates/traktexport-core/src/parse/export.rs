use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use traktexport_models::{ExportKind, FullExport, PartialExport, TraktExport};
use crate::error::ParseError;
use super::entities::{parse_followers, parse_history, parse_likes, parse_ratings, parse_watchlist};
use super::fields::{array, as_object, object, string, Object};

/// Documents without an explicit `type` and fewer keys than this are partial
const FULL_EXPORT_MIN_KEYS: usize = 4;

/// Decide whether a raw document is a full or a partial export
///
/// An explicit top-level `type` wins. Older exports carried no tag, so those
/// are classified by how many top-level keys they have.
pub fn classify_export(doc: &Object) -> Result<ExportKind, ParseError> {
    match doc.get("type") {
        Some(Value::String(tag)) => match tag.as_str() {
            "full" => Ok(ExportKind::Full),
            "partial" => Ok(ExportKind::Partial),
            other => Err(ParseError::UnrecognizedExportType { value: other.to_string() }),
        },
        Some(other) => Err(ParseError::UnrecognizedExportType { value: other.to_string() }),
        None if doc.len() < FULL_EXPORT_MIN_KEYS => Ok(ExportKind::Partial),
        None => Ok(ExportKind::Full),
    }
}

pub fn parse_partial_export(doc: &Object) -> Result<PartialExport, ParseError> {
    Ok(PartialExport {
        history: parse_history(array(doc, "history", "partial export")?).collect::<Result<_, _>>()?,
    })
}

pub fn parse_full_export(doc: &Object) -> Result<FullExport, ParseError> {
    const CONTEXT: &str = "full export";

    Ok(FullExport {
        username: string(doc, "username", CONTEXT)?,
        followers: parse_followers(array(doc, "followers", CONTEXT)?).collect::<Result<_, _>>()?,
        following: parse_followers(array(doc, "following", CONTEXT)?).collect::<Result<_, _>>()?,
        likes: parse_likes(array(doc, "likes", CONTEXT)?).collect::<Result<_, _>>()?,
        stats: object(doc, "stats", CONTEXT)?.clone(),
        settings: object(doc, "settings", CONTEXT)?.clone(),
        watchlist: parse_watchlist(array(doc, "watchlist", CONTEXT)?).collect::<Result<_, _>>()?,
        ratings: parse_ratings(array(doc, "ratings", CONTEXT)?).collect::<Result<_, _>>()?,
        history: parse_history(array(doc, "history", CONTEXT)?).collect::<Result<_, _>>()?,
    })
}

/// Parse an export document into the typed model
///
/// Accepts the raw Trakt shape written by `export`/`partial_export` as well
/// as the serialized typed model written by `merge` and `inspect`. When
/// neither fits, the error from the raw parse is returned.
pub fn parse_export(value: &Value) -> Result<TraktExport, ParseError> {
    let doc = as_object(value, "export document")?;
    let kind = classify_export(doc)?;
    debug!(kind = kind.as_str(), keys = doc.len(), "Parsing export document");

    let raw = match kind {
        ExportKind::Full => parse_full_export(doc).map(TraktExport::Full),
        ExportKind::Partial => parse_partial_export(doc).map(TraktExport::Partial),
    };
    raw.or_else(|err| match parse_typed_export(doc, kind) {
        Some(export) => {
            debug!(kind = kind.as_str(), "Export document is already in typed form");
            Ok(export)
        }
        None => Err(err),
    })
}

fn parse_typed_export(doc: &Object, kind: ExportKind) -> Option<TraktExport> {
    let value = Value::Object(doc.clone());
    match kind {
        ExportKind::Full => serde_json::from_value::<FullExport>(value).ok().map(TraktExport::Full),
        ExportKind::Partial => serde_json::from_value::<PartialExport>(value)
            .ok()
            .map(TraktExport::Partial),
    }
}

pub fn parse_export_str(s: &str) -> Result<TraktExport, ParseError> {
    let value: Value = serde_json::from_str(s)?;
    parse_export(&value)
}

pub fn parse_export_reader<R: Read>(reader: R) -> Result<TraktExport, ParseError> {
    let value: Value = serde_json::from_reader(std::io::BufReader::new(reader))?;
    parse_export(&value)
}

pub fn parse_export_file(path: &Path) -> Result<TraktExport, ParseError> {
    let file = std::fs::File::open(path)?;
    parse_export_reader(file)
}
