//! Creation timestamp parsing.

use crate::error::TimestampError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses an entity's creation time as UTC.
///
/// Accepts RFC 3339 with an offset, and naive ISO-8601 date-times (with
/// `T` or a space between date and time, optional fractional seconds, an
/// optional trailing `Z`) which are read as UTC. A bare date means midnight.
///
/// # Errors
///
/// Returns [`TimestampError::Missing`] for a blank string and
/// [`TimestampError::Unparsable`] for anything else that does not parse.
pub fn parse_created_at(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TimestampError::Missing);
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }

    let naive = trimmed
        .strip_suffix('Z')
        .or_else(|| trimmed.strip_suffix('z'))
        .unwrap_or(trimmed);

    if let Ok(ts) = naive.parse::<NaiveDateTime>() {
        return Ok(ts.and_utc());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(naive, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(ts.and_utc());
    }
    if let Some(midnight) = NaiveDate::parse_from_str(naive, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(TimestampError::Unparsable(raw.to_string()))
}
