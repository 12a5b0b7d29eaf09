use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use crate::error::ParseError;

const DATETIME_FORMATS: [&str; 3] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a Trakt timestamp such as `2021-09-30T01:44:33.000Z`
///
/// The trailing `Z` is dropped and the naive value is labelled UTC as-is.
/// No local-time offset is ever applied.
pub fn parse_trakt_datetime(ds: &str) -> Result<DateTime<Utc>, ParseError> {
    let naive_str = ds.trim_end_matches('Z');

    let naive = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive_str, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(naive_str, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| ParseError::MalformedTimestamp { value: ds.to_string() })?;

    Ok(Utc.from_utc_datetime(&naive))
}

/// Format an instant the way Trakt sends it (millisecond precision, `Z` suffix)
pub fn format_trakt_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
