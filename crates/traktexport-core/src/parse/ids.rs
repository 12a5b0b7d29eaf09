use serde_json::Value;
use traktexport_models::SiteIds;
use crate::error::ParseError;
use super::fields::{as_object, optional_string, optional_uint, uint};

const CONTEXT: &str = "ids";

/// Resolve a Trakt `ids` object into [`SiteIds`]
///
/// Only `trakt` is required. Absent or `null` optional IDs become `None`.
pub fn parse_ids(value: &Value) -> Result<SiteIds, ParseError> {
    let obj = as_object(value, CONTEXT)?;
    Ok(SiteIds {
        trakt_id: uint(obj, "trakt", CONTEXT)?,
        trakt_slug: optional_string(obj, "slug", CONTEXT)?,
        imdb_id: optional_string(obj, "imdb", CONTEXT)?,
        tmdb_id: optional_uint(obj, "tmdb", CONTEXT)?,
        tvdb_id: optional_uint(obj, "tvdb", CONTEXT)?,
        tvrage_id: optional_uint(obj, "tvrage", CONTEXT)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_all_ids() {
        let ids = parse_ids(&json!({
            "trakt": 1390,
            "slug": "game-of-thrones",
            "tvdb": 121361,
            "imdb": "tt0944947",
            "tmdb": 1399,
            "tvrage": 24493
        }))
        .unwrap();

        assert_eq!(ids.trakt_id, 1390);
        assert_eq!(ids.trakt_slug.as_deref(), Some("game-of-thrones"));
        assert_eq!(ids.imdb_id.as_deref(), Some("tt0944947"));
        assert_eq!(ids.tmdb_id, Some(1399));
        assert_eq!(ids.tvdb_id, Some(121361));
        assert_eq!(ids.tvrage_id, Some(24493));
    }

    #[test]
    fn test_absent_ids_are_none_not_zero() {
        let ids = parse_ids(&json!({ "trakt": 7, "imdb": null, "tvrage": null })).unwrap();
        assert_eq!(ids, SiteIds::new(7));
    }

    #[test]
    fn test_trakt_id_is_required() {
        let err = parse_ids(&json!({ "slug": "x", "imdb": "tt1" })).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingRequiredField { field: "trakt", context: "ids" }
        ));
    }
}
