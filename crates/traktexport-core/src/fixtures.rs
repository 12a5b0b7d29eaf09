//! Raw Trakt JSON builders shared by the unit tests

use serde_json::{json, Value};

pub fn show_json(trakt: u64, title: &str, year: Option<u32>) -> Value {
    json!({
        "title": title,
        "year": year,
        "ids": {
            "trakt": trakt,
            "slug": title.to_lowercase().replace(' ', "-"),
            "tvdb": null,
            "imdb": null,
            "tmdb": null,
            "tvrage": null
        }
    })
}

pub fn movie_item(trakt: u64, title: &str) -> Value {
    json!({
        "type": "movie",
        "movie": {
            "title": title,
            "year": 2008,
            "ids": {
                "trakt": trakt,
                "slug": title.to_lowercase().replace(' ', "-"),
                "imdb": "tt0441773",
                "tmdb": 9502
            }
        }
    })
}

pub fn show_item(trakt: u64, title: &str) -> Value {
    json!({ "type": "show", "show": show_json(trakt, title, Some(2011)) })
}

pub fn episode_item(trakt: u64, show_title: &str, season: u32, number: u32) -> Value {
    json!({
        "type": "episode",
        "episode": {
            "season": season,
            "number": number,
            "title": "Cat's in the Bag...",
            "ids": {
                "trakt": trakt,
                "tvdb": 349232,
                "imdb": "tt1054724",
                "tmdb": 62086,
                "tvrage": null
            }
        },
        "show": show_json(1388, show_title, Some(2008))
    })
}

pub fn follow_json(username: &str, followed_at: &str) -> Value {
    json!({
        "followed_at": followed_at,
        "user": { "username": username, "private": false, "name": username, "vip": false }
    })
}

pub fn history_movie(id: u64, watched_at: &str) -> Value {
    let mut item = movie_item(12601, "Kung Fu Panda");
    item["id"] = json!(id);
    item["watched_at"] = json!(watched_at);
    item["action"] = json!("scrobble");
    item
}

pub fn history_episode(id: u64, watched_at: &str) -> Value {
    let mut item = episode_item(73641, "Breaking Bad", 1, 2);
    item["id"] = json!(id);
    item["watched_at"] = json!(watched_at);
    item["action"] = json!("watch");
    item
}

pub fn full_export_json(username: &str, history: Vec<Value>) -> Value {
    let mut watchlist_item = movie_item(481, "The Matrix");
    watchlist_item["id"] = json!(9001);
    watchlist_item["listed_at"] = json!("2020-01-01T00:00:00.000Z");

    let mut rating = show_item(1390, "Game of Thrones");
    rating["rated_at"] = json!("2019-05-20T00:00:00.000Z");
    rating["rating"] = json!(6);

    json!({
        "type": "full",
        "username": username,
        "followers": [follow_json("follower", "2021-01-01T00:00:00.000Z")],
        "following": [
            follow_json("followed-a", "2021-01-02T00:00:00.000Z"),
            follow_json("followed-b", "2021-01-03T00:00:00.000Z")
        ],
        "settings": {
            "user": { "username": username },
            "account": { "timezone": "America/Los_Angeles" }
        },
        "likes": [],
        "profile": { "username": username },
        "comments": [],
        "lists": [],
        "ratings": [rating],
        "recommendations": [],
        "watchlist": [watchlist_item],
        "watched": [],
        "collection": [],
        "stats": {
            "movies": { "plays": 10 },
            "shows": { "watched": 2 },
            "episodes": { "plays": 30 }
        },
        "history": history
    })
}
