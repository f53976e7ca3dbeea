//! Timestamp conversions shared by the decoder and the resolvers.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Layout of provider timestamps that carry no zone designator.
const NAIVE_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses a provider timestamp into a UTC instant.
///
/// Provider timestamps are always UTC. Accepts RFC 3339
/// (`2019-01-29T22:20:01.696871Z`) and the same layout without a zone
/// designator. An explicit offset is dropped and the wall-clock value kept as
/// UTC. Returns `None` for anything else, including surrounding whitespace.
#[must_use]
pub fn parse_utc_timestamp(s: &str) -> Option<DateTime<Utc>> {
    // chrono skips whitespace before numeric fields
    if s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace) {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local().and_utc());
    }
    NaiveDateTime::parse_from_str(s, NAIVE_LAYOUT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Expresses a UTC instant in the given exchange time zone.
#[must_use]
pub fn utc_to_exchange(dt: DateTime<Utc>, tz: Tz) -> DateTime<Tz> {
    dt.with_timezone(&tz)
}
