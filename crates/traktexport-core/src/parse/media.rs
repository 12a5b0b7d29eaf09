use serde_json::Value;
use tracing::{debug, warn};
use traktexport_models::{Episode, Media, Movie, Season, Show};
use crate::error::ParseError;
use super::fields::{
    as_object, field, nullable_string, nullable_uint, str_ref, string, uint, Object,
};
use super::ids::parse_ids;

/// The media discriminators Trakt puts in a list element's `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Movie,
    Show,
    Season,
    Episode,
}

impl MediaKind {
    pub const ALL: [MediaKind; 4] =
        [MediaKind::Movie, MediaKind::Show, MediaKind::Season, MediaKind::Episode];

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "movie" => Some(MediaKind::Movie),
            "show" => Some(MediaKind::Show),
            "season" => Some(MediaKind::Season),
            "episode" => Some(MediaKind::Episode),
            _ => None,
        }
    }

    /// Also the key holding the media payload on the list element
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Show => "show",
            MediaKind::Season => "season",
            MediaKind::Episode => "episode",
        }
    }
}

pub fn parse_movie(value: &Value) -> Result<Movie, ParseError> {
    let obj = as_object(value, "movie")?;
    Ok(Movie {
        title: string(obj, "title", "movie")?,
        year: nullable_uint(obj, "year", "movie")?,
        ids: parse_ids(field(obj, "ids", "movie")?)?,
    })
}

pub fn parse_show(value: &Value) -> Result<Show, ParseError> {
    let obj = as_object(value, "show")?;
    Ok(Show {
        title: string(obj, "title", "show")?,
        year: nullable_uint(obj, "year", "show")?,
        ids: parse_ids(field(obj, "ids", "show")?)?,
    })
}

pub fn parse_season(value: &Value, show: &Value) -> Result<Season, ParseError> {
    let obj = as_object(value, "season")?;
    Ok(Season {
        number: uint(obj, "number", "season")?,
        ids: parse_ids(field(obj, "ids", "season")?)?,
        show: parse_show(show)?,
    })
}

/// Episode payloads carry the episode number as `number`
pub fn parse_episode(value: &Value, show: &Value) -> Result<Episode, ParseError> {
    let obj = as_object(value, "episode")?;
    Ok(Episode {
        title: nullable_string(obj, "title", "episode")?,
        season: uint(obj, "season", "episode")?,
        episode: uint(obj, "number", "episode")?,
        ids: parse_ids(field(obj, "ids", "episode")?)?,
        show: parse_show(show)?,
    })
}

/// Dispatch a list element on its `type` field
///
/// The payload is read from the key named after the type; seasons and
/// episodes also read the sibling `show` object. Returns `Ok(None)` (after
/// logging) when the type is unknown or not in `accepted`.
pub fn parse_media(
    item: &Object,
    accepted: &[MediaKind],
    context: &'static str,
) -> Result<Option<Media>, ParseError> {
    let tag = str_ref(item, "type", context)?;
    let kind = match MediaKind::from_tag(tag) {
        Some(kind) if accepted.contains(&kind) => kind,
        _ => {
            warn!(parser = context, media_type = tag, "No case to parse, skipping item");
            let skipped = Value::Object(item.clone());
            debug!(parser = context, item = %skipped, "Skipped item");
            return Ok(None);
        }
    };

    let data = field(item, kind.as_str(), context)?;
    let media = match kind {
        MediaKind::Movie => Media::Movie(parse_movie(data)?),
        MediaKind::Show => Media::Show(parse_show(data)?),
        MediaKind::Season => Media::Season(parse_season(data, field(item, "show", context)?)?),
        MediaKind::Episode => Media::Episode(parse_episode(data, field(item, "show", context)?)?),
    };
    Ok(Some(media))
}
