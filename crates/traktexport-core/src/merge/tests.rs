use super::*;
use crate::fixtures;
use crate::parse::{parse_export, parse_export_str};
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;
use traktexport_models::{ExportKind, PartialExport};

fn full_export(username: &str, history: Vec<Value>) -> TraktExport {
    parse_export(&fixtures::full_export_json(username, history)).unwrap()
}

fn partial_export(history: Vec<Value>) -> TraktExport {
    parse_export(&json!({ "type": "partial", "history": history })).unwrap()
}

/// `n` movie scrobbles with ids starting at `first_id`, one day apart
fn movie_history(first_id: u64, n: u64) -> Vec<Value> {
    (0..n)
        .map(|i| {
            let day = 1 + (first_id + i) % 28;
            fixtures::history_movie(first_id + i, &format!("2021-02-{:02}T12:00:00.000Z", day))
        })
        .collect()
}

fn ids(history: &[HistoryEntry]) -> Vec<u64> {
    history.iter().map(|h| h.history_id).collect()
}

fn assert_sorted_newest_first(history: &[HistoryEntry]) {
    for pair in history.windows(2) {
        assert!(
            pair[0].watched_at >= pair[1].watched_at,
            "history out of order: {} before {}",
            pair[0].watched_at,
            pair[1].watched_at
        );
    }
}

#[test]
fn test_merge_single_full_export_is_identity() {
    let a = full_export("sean", movie_history(1, 10));
    let merged = merge_exports(std::slice::from_ref(&a)).unwrap();
    let original = a.as_full().unwrap();

    assert_eq!(merged.username, original.username);
    assert_eq!(merged.followers, original.followers);
    assert_eq!(merged.following, original.following);
    assert_eq!(merged.stats, original.stats);
    assert_eq!(merged.settings, original.settings);
    assert_eq!(merged.ratings, original.ratings);
    assert_eq!(merged.watchlist, original.watchlist);

    let mut expected = original.history.clone();
    expected.sort_by(|a, b| b.watched_at.cmp(&a.watched_at));
    assert_eq!(merged.history, expected);
}

#[test]
fn test_merge_duplicate_exports_does_not_double_history() {
    let a = full_export("sean", movie_history(1, 12));
    let merged = merge_exports(&[a.clone(), a.clone()]).unwrap();
    assert_eq!(merged.history.len(), a.history().len());
}

#[test]
fn test_merge_output_is_sorted() {
    let exports = vec![
        full_export("sean", movie_history(1, 5)),
        partial_export(movie_history(20, 7)),
        full_export("sean", movie_history(3, 9)),
    ];
    let merged = merge_exports(&exports).unwrap();
    assert_sorted_newest_first(&merged.history);
}

#[test]
fn test_baseline_is_longest_full_export() {
    let mut short = fixtures::full_export_json("sean", movie_history(1, 10));
    short["stats"] = json!({ "marker": "short" });
    let mut long = fixtures::full_export_json("sean", movie_history(100, 50));
    long["stats"] = json!({ "marker": "long" });
    long["followers"] = json!([]);

    let exports = vec![parse_export(&long).unwrap(), parse_export(&short).unwrap()];
    let merged = merge_exports(&exports).unwrap();

    assert_eq!(merged.stats.get("marker"), Some(&json!("long")));
    assert!(merged.followers.is_empty());
    assert_eq!(merged.history.len(), 60);

    // order of inputs does not matter
    let reversed = vec![exports[1].clone(), exports[0].clone()];
    assert_eq!(merge_exports(&reversed).unwrap().stats.get("marker"), Some(&json!("long")));
}

#[test]
fn test_baseline_tie_goes_to_later_export() {
    let first = fixtures::full_export_json("first", movie_history(1, 3));
    let second = fixtures::full_export_json("second", movie_history(1, 3));

    let exports = [parse_export(&first).unwrap(), parse_export(&second).unwrap()];
    let merged = merge_exports(&exports).unwrap();
    assert_eq!(merged.username, "second");
}

#[test]
fn test_partial_export_contributes_history() {
    let h1 = fixtures::history_movie(1, "2021-01-01T00:00:00.000Z");
    let h2 = fixtures::history_episode(2, "2021-01-02T00:00:00.000Z");
    let h3 = fixtures::history_movie(3, "2021-01-03T00:00:00.000Z");

    let full = full_export("sean", vec![h1, h2.clone()]);
    let partial = partial_export(vec![h2, h3]);
    let merged = merge_exports(&[full.clone(), partial]).unwrap();

    assert_eq!(ids(&merged.history), vec![3, 2, 1]);
    assert_eq!(merged.ratings, full.as_full().unwrap().ratings);
    assert_eq!(merged.username, "sean");
}

#[test]
fn test_first_seen_duplicate_wins() {
    let mut original = fixtures::history_movie(7, "2021-01-01T00:00:00.000Z");
    original["action"] = json!("checkin");
    let mut later = fixtures::history_movie(7, "2021-01-01T00:00:00.000Z");
    later["action"] = json!("scrobble");

    let merged = merge_exports(&[
        partial_export(vec![original]),
        full_export("sean", vec![later]),
    ])
    .unwrap();

    assert_eq!(merged.history.len(), 1);
    assert_eq!(merged.history[0].action, "checkin");
}

#[test]
fn test_merge_is_idempotent() {
    let a = full_export("sean", movie_history(1, 8));
    let b = partial_export(movie_history(5, 8));
    let c = full_export("sean", movie_history(30, 4));

    let once = merge_exports(&[a.clone(), b.clone(), c.clone()]).unwrap();
    let twice = merge_exports(&[TraktExport::Full(once.clone()), a, b, c]).unwrap();

    assert_eq!(ids(&once.history), ids(&twice.history));
    assert_eq!(once, twice);
}

#[test]
fn test_merge_requires_full_export() {
    let result = merge_exports(&[partial_export(movie_history(1, 2)), partial_export(vec![])]);
    assert!(matches!(
        result,
        Err(MergeError::NoFullExportAvailable { partial_count: 2 })
    ));
    assert!(matches!(
        merge_exports(&[]),
        Err(MergeError::NoFullExportAvailable { partial_count: 0 })
    ));
}

#[test]
fn test_merge_does_not_modify_inputs() {
    let exports = vec![
        partial_export(movie_history(1, 3)),
        full_export("sean", movie_history(2, 3)),
    ];
    let before = exports.clone();
    merge_exports(&exports).unwrap();
    assert_eq!(exports, before);
}

#[test]
fn test_merge_history_of_partials_only() {
    let partial: PartialExport = PartialExport { history: vec![] };
    let exports = vec![TraktExport::Partial(partial), partial_export(movie_history(1, 2))];
    assert_eq!(merge_history(&exports).len(), 2);
}

#[test]
fn test_read_and_merge_exports() {
    let mut full_file = NamedTempFile::new().unwrap();
    write!(full_file, "{}", fixtures::full_export_json("sean", movie_history(1, 3))).unwrap();
    let mut partial_file = NamedTempFile::new().unwrap();
    write!(partial_file, "{}", json!({ "history": movie_history(3, 3) })).unwrap();

    let merged = read_and_merge_exports(&[full_file.path(), partial_file.path()]).unwrap();
    assert_eq!(merged.history.len(), 5);
    assert_eq!(TraktExport::Full(merged).kind(), ExportKind::Full);
}

#[test]
fn test_read_and_merge_reports_bad_file() {
    let mut bad = NamedTempFile::new().unwrap();
    write!(bad, "not json").unwrap();

    match read_and_merge_exports(&[bad.path()]) {
        Err(MergeError::Parse { path, .. }) => assert_eq!(path, bad.path()),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_merged_output_parses_back() {
    let a = full_export("sean", vec![
        fixtures::history_movie(1, "2021-01-01T00:00:00.000Z"),
        fixtures::history_episode(2, "2021-01-02T00:00:00.500Z"),
    ]);
    let b = partial_export(movie_history(10, 3));
    let merged = merge_exports(&[a, b]).unwrap();

    let tagged = serde_json::to_string(&TraktExport::Full(merged.clone())).unwrap();
    assert_eq!(parse_export_str(&tagged).unwrap(), TraktExport::Full(merged.clone()));

    let untagged = serde_json::to_string(&merged).unwrap();
    assert_eq!(parse_export_str(&untagged).unwrap(), TraktExport::Full(merged));
}

#[test]
fn test_remerge_merged_file_with_newer_partial() {
    let inputs = vec![
        full_export("sean", movie_history(1, 6)),
        partial_export(movie_history(4, 6)),
    ];
    let first = merge_exports(&inputs).unwrap();

    let mut merged_file = NamedTempFile::new().unwrap();
    let merged_text = serde_json::to_string(&TraktExport::Full(first.clone())).unwrap();
    write!(merged_file, "{}", merged_text).unwrap();
    let mut newer_file = NamedTempFile::new().unwrap();
    write!(newer_file, "{}", json!({ "type": "partial", "history": movie_history(8, 5) })).unwrap();

    let second = read_and_merge_exports(&[merged_file.path(), newer_file.path()]).unwrap();
    assert_eq!(ids(&second.history).len(), 12);
    assert_sorted_newest_first(&second.history);
    assert_eq!(second.username, first.username);
    assert_eq!(second.followers, first.followers);
    assert_eq!(second.stats, first.stats);

    // re-reading the merge on its own changes nothing
    let again = read_and_merge_exports(&[merged_file.path()]).unwrap();
    assert_eq!(again, first);
}
