use color_eyre::Result;
use std::path::PathBuf;
use traktexport_core::read_and_merge_exports;
use traktexport_models::TraktExport;
use crate::output::Output;

/// Merge export files into one canonical full export on stdout
///
/// The document carries `"type": "full"` so it can be fed back into `merge`.
pub fn run_merge(files: &[PathBuf], output: &Output) -> Result<()> {
    let merged = read_and_merge_exports(files)?;
    let summary = format!(
        "Merged {} exports: {} history entries for {}",
        files.len(),
        merged.history.len(),
        merged.username
    );
    output.data(&TraktExport::Full(merged))?;
    output.success(summary);
    Ok(())
}
