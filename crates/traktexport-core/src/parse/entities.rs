use serde_json::Value;
use tracing::{debug, warn};
use traktexport_models::{
    Comment, Follow, HistoryEntry, HistoryMedia, Like, LikedItem, Rating, TraktList, WatchlistEntry,
    WatchlistMedia,
};
use crate::error::ParseError;
use super::fields::{as_object, field, nullable_string, str_ref, string, timestamp, uint, username};
use super::media::{parse_media, MediaKind};

const WATCHLIST_KINDS: [MediaKind; 2] = [MediaKind::Movie, MediaKind::Show];
const HISTORY_KINDS: [MediaKind; 2] = [MediaKind::Movie, MediaKind::Episode];

pub fn parse_follow(value: &Value) -> Result<Follow, ParseError> {
    let obj = as_object(value, "follow")?;
    Ok(Follow {
        followed_at: timestamp(obj, "followed_at", "follow")?,
        username: username(obj, "follow")?,
    })
}

pub fn parse_comment(value: &Value) -> Result<Comment, ParseError> {
    let obj = as_object(value, "comment")?;
    Ok(Comment {
        comment_id: uint(obj, "id", "comment")?,
        text: string(obj, "comment", "comment")?,
        created_at: timestamp(obj, "created_at", "comment")?,
        updated_at: timestamp(obj, "updated_at", "comment")?,
        likes: uint(obj, "likes", "comment")?,
        username: username(obj, "comment")?,
    })
}

pub fn parse_trakt_list(value: &Value) -> Result<TraktList, ParseError> {
    let obj = as_object(value, "list")?;
    Ok(TraktList {
        name: string(obj, "name", "list")?,
        description: nullable_string(obj, "description", "list")?,
        created_at: timestamp(obj, "created_at", "list")?,
        updated_at: timestamp(obj, "updated_at", "list")?,
        likes: uint(obj, "likes", "list")?,
        username: username(obj, "list")?,
    })
}

/// `Ok(None)` when the liked thing is neither a comment nor a list
pub fn parse_like(value: &Value) -> Result<Option<Like>, ParseError> {
    let obj = as_object(value, "like")?;
    let tag = str_ref(obj, "type", "like")?;
    let item = match tag {
        "comment" => LikedItem::Comment(parse_comment(field(obj, "comment", "like")?)?),
        "list" => LikedItem::List(parse_trakt_list(field(obj, "list", "like")?)?),
        _ => {
            warn!(parser = "like", media_type = tag, "No case to parse, skipping item");
            debug!(parser = "like", item = %value, "Skipped item");
            return Ok(None);
        }
    };

    Ok(Some(Like {
        liked_at: timestamp(obj, "liked_at", "like")?,
        item,
    }))
}

pub fn parse_watchlist_entry(value: &Value) -> Result<Option<WatchlistEntry>, ParseError> {
    let obj = as_object(value, "watchlist entry")?;
    let Some(media) = parse_media(obj, &WATCHLIST_KINDS, "watchlist entry")? else {
        return Ok(None);
    };
    let media = match WatchlistMedia::try_from(media) {
        Ok(media) => media,
        Err(other) => {
            warn!(
                parser = "watchlist entry",
                media_type = other.media_type(),
                "No case to parse, skipping item"
            );
            return Ok(None);
        }
    };

    Ok(Some(WatchlistEntry {
        listed_at: timestamp(obj, "listed_at", "watchlist entry")?,
        listed_at_id: uint(obj, "id", "watchlist entry")?,
        media,
    }))
}

pub fn parse_rating(value: &Value) -> Result<Option<Rating>, ParseError> {
    let obj = as_object(value, "rating")?;
    let Some(media) = parse_media(obj, &MediaKind::ALL, "rating")? else {
        return Ok(None);
    };

    Ok(Some(Rating {
        rated_at: timestamp(obj, "rated_at", "rating")?,
        rating: uint(obj, "rating", "rating")?,
        media,
    }))
}

pub fn parse_history_entry(value: &Value) -> Result<Option<HistoryEntry>, ParseError> {
    let obj = as_object(value, "history entry")?;
    let Some(media) = parse_media(obj, &HISTORY_KINDS, "history entry")? else {
        return Ok(None);
    };
    let media = match HistoryMedia::try_from(media) {
        Ok(media) => media,
        Err(other) => {
            warn!(
                parser = "history entry",
                media_type = other.media_type(),
                "No case to parse, skipping item"
            );
            return Ok(None);
        }
    };

    Ok(Some(HistoryEntry {
        history_id: uint(obj, "id", "history entry")?,
        watched_at: timestamp(obj, "watched_at", "history entry")?,
        action: string(obj, "action", "history entry")?,
        media,
    }))
}

// List parsers are lazy and keep input order. Skipped elements simply do not
// appear; the first hard error is yielded in place.

pub fn parse_followers(items: &[Value]) -> impl Iterator<Item = Result<Follow, ParseError>> + '_ {
    items.iter().map(parse_follow)
}

pub fn parse_likes(items: &[Value]) -> impl Iterator<Item = Result<Like, ParseError>> + '_ {
    items.iter().filter_map(|item| parse_like(item).transpose())
}

pub fn parse_watchlist(
    items: &[Value],
) -> impl Iterator<Item = Result<WatchlistEntry, ParseError>> + '_ {
    items.iter().filter_map(|item| parse_watchlist_entry(item).transpose())
}

pub fn parse_ratings(items: &[Value]) -> impl Iterator<Item = Result<Rating, ParseError>> + '_ {
    items.iter().filter_map(|item| parse_rating(item).transpose())
}

pub fn parse_history(
    items: &[Value],
) -> impl Iterator<Item = Result<HistoryEntry, ParseError>> + '_ {
    items.iter().filter_map(|item| parse_history_entry(item).transpose())
}
