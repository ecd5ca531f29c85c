//! UTC normalization for user-supplied deadlines.
//!
//! ## Summary
//! Every instant that enters or leaves the service is a `DateTime<Utc>`.
//! Input without an offset is read as UTC, never as server-local time.
//! Instants are kept at microsecond precision so they survive a round trip
//! through any of the stores unchanged.

use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, Utc};

use crate::error::{CoreError, CoreResult};

const SUBSEC_DIGITS: u16 = 6;

/// Offset-qualified layouts, tried in order.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%#z",
];

/// Layouts without an offset; the value is taken to be UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Four-digit years only, as written and after conversion to UTC.
const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// ## Summary
/// Parses an ISO-8601-like date/time string into a UTC instant.
///
/// A trailing `Z` means `+00:00`. A value with no offset is treated as UTC.
/// Any other offset is converted to UTC. `T` or a single space may separate
/// date and time, and a bare date means midnight UTC.
///
/// ## Errors
/// Returns `CoreError::InvalidTimeFormat` if no accepted layout matches.
pub fn parse_to_utc(text: &str) -> CoreResult<DateTime<Utc>> {
    let normalized = normalize_input(text);

    let Some((written_year, instant)) = parse_layouts(&normalized) else {
        return Err(CoreError::InvalidTimeFormat(format!(
            "'{}' is not an ISO-8601 date/time",
            text.trim()
        )));
    };

    if !SUPPORTED_YEARS.contains(&written_year) || !SUPPORTED_YEARS.contains(&instant.year())
    {
        return Err(CoreError::InvalidTimeFormat(format!(
            "'{}' is outside the years 1 to 9999",
            text.trim()
        )));
    }

    Ok(instant)
}

/// Tries every accepted layout; yields the year as written plus the UTC instant.
fn parse_layouts(normalized: &str) -> Option<(i32, DateTime<Utc>)> {
    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(normalized, format) {
            return Some((
                parsed.year(),
                parsed.with_timezone(&Utc).trunc_subsecs(SUBSEC_DIGITS),
            ));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(normalized, format) {
            return Some((parsed.year(), parsed.and_utc().trunc_subsecs(SUBSEC_DIGITS)));
        }
    }

    NaiveDate::parse_from_str(normalized, DATE_FORMAT)
        .ok()
        .map(|date| (date.year(), date.and_time(chrono::NaiveTime::MIN).and_utc()))
}

/// Trims, maps a trailing `Z` to `+00:00`, and accepts a space separator.
fn normalize_input(text: &str) -> String {
    let trimmed = text.trim();

    let mut normalized = match trimmed.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => trimmed.to_string(),
    };

    if normalized.as_bytes().get(10) == Some(&b' ') {
        normalized.replace_range(10..11, "T");
    }

    normalized
}

/// ## Summary
/// Formats a UTC instant as ISO-8601 with a `Z` suffix.
///
/// Seconds are always present; fractional digits only when non-zero.
#[must_use]
pub fn format_utc(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Current instant at the precision the stores keep.
#[must_use]
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(SUBSEC_DIGITS)
}
