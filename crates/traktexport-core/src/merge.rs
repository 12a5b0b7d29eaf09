use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};
use traktexport_models::{FullExport, HistoryEntry, TraktExport};
use crate::error::MergeError;
use crate::parse::parse_export_file;

/// Parse every file and merge them into one full export
pub fn read_and_merge_exports<P: AsRef<Path>>(paths: &[P]) -> Result<FullExport, MergeError> {
    let exports = paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            debug!("Reading export {}", path.display());
            parse_export_file(path).map_err(|source| MergeError::Parse {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    merge_exports(&exports)
}

/// Union of every history entry, first occurrence of each `history_id` wins,
/// sorted most recent first
///
/// The sort is stable, so entries watched at the same instant keep the
/// order in which they were first seen.
pub fn merge_history<'a, I>(exports: I) -> Vec<HistoryEntry>
where
    I: IntoIterator<Item = &'a TraktExport>,
{
    let mut emitted: HashSet<u64> = HashSet::new();
    let mut history: Vec<HistoryEntry> = exports
        .into_iter()
        .flat_map(TraktExport::history)
        .filter(|entry| emitted.insert(entry.history_id))
        .cloned()
        .collect();

    history.sort_by(|a, b| b.watched_at.cmp(&a.watched_at));
    history
}

/// Merge full and partial exports into one canonical full export
///
/// All non-history fields come from the full export with the longest history,
/// on the assumption that it is the most complete (and usually most recent)
/// snapshot. Ties go to the later export in `exports`. The inputs are not
/// modified.
pub fn merge_exports(exports: &[TraktExport]) -> Result<FullExport, MergeError> {
    let (full, partial): (Vec<&TraktExport>, Vec<&TraktExport>) =
        exports.iter().partition(|e| e.as_full().is_some());

    let baseline = full
        .iter()
        .filter_map(|e| e.as_full())
        .max_by_key(|e| e.history.len())
        .ok_or(MergeError::NoFullExportAvailable { partial_count: partial.len() })?;

    let history = merge_history(exports);
    let input_entries: usize = exports.iter().map(|e| e.history().len()).sum();
    info!(
        "Merged {} full and {} partial exports: {} history entries, {} duplicates dropped",
        full.len(),
        partial.len(),
        history.len(),
        input_entries - history.len()
    );
    debug!("Baseline export belongs to {}", baseline.username);

    Ok(FullExport {
        history,
        ..baseline.clone()
    })
}

#[cfg(test)]
mod tests;
