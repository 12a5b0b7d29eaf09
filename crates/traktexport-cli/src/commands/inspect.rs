use crate::output::Output;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use std::path::Path;
use traktexport_core::{format_trakt_datetime, parse_export_file};
use traktexport_models::TraktExport;

pub fn run_inspect(path: &Path, output: &Output) -> Result<()> {
    let export = parse_export_file(path)
        .wrap_err_with(|| format!("Failed to parse {}", path.display()))?;

    if !output.is_human() {
        output.data(&export)?;
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(path.display().to_string()).add_attribute(comfy_table::Attribute::Bold),
        Cell::new(export.kind().as_str()).fg(comfy_table::Color::Cyan),
    ]);
    for (label, value) in summary_rows(&export) {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", table);

    if export.history().is_empty() {
        println!("{}", "No history entries".bright_black());
    }
    Ok(())
}

/// Label/value pairs describing an export
fn summary_rows(export: &TraktExport) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    if let Some(full) = export.as_full() {
        rows.push(("Username", full.username.clone()));
        rows.push(("Followers", full.followers.len().to_string()));
        rows.push(("Following", full.following.len().to_string()));
        rows.push(("Likes", full.likes.len().to_string()));
        rows.push(("Watchlist", full.watchlist.len().to_string()));
        rows.push(("Ratings", full.ratings.len().to_string()));
    }

    let history = export.history();
    rows.push(("History", history.len().to_string()));

    let newest = history.iter().max_by_key(|h| h.watched_at);
    let oldest = history.iter().min_by_key(|h| h.watched_at);
    if let (Some(newest), Some(oldest)) = (newest, oldest) {
        rows.push(("Newest watch", format_trakt_datetime(&newest.watched_at)));
        rows.push(("Last watched", newest.display_title()));
        rows.push(("Oldest watch", format_trakt_datetime(&oldest.watched_at)));
    }
    rows
}
