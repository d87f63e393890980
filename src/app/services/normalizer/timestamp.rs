//! Canonicalization of export timestamps to UTC
//!
//! Exports carry timestamps in whatever shape the originating tool chose.
//! Parsing tries a strict ISO-8601 read first, then a fixed, ordered list
//! of common export patterns, stopping at the first success. Values without
//! offset information are interpreted in a configurable fallback civil
//! timezone (with that zone's DST rules) before conversion to UTC. An
//! unparseable timestamp is absent output, never an error.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// Naive export patterns, tried in order after the ISO-8601 attempt
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%y %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a raw export timestamp to an ISO-8601 UTC string.
///
/// Behavior:
/// - empty input returns `None`
/// - explicit offset information (including a trailing `Z`) converts
///   directly to UTC
/// - naive values are interpreted in `assume_tz`, then converted; an
///   ambiguous civil time resolves to the earliest offset, a nonexistent
///   one (DST gap) is treated as unparseable
/// - output ends in `Z`, with fractional seconds only when non-zero
pub fn parse_timestamp_to_utc(ts_raw: &str, assume_tz: Tz) -> Option<String> {
    let s = ts_raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(format_utc(dt.with_timezone(&Utc)));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return resolve_naive(naive, assume_tz);
        }
    }

    // Bare dates appear in calendar-style exports; read them as midnight.
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return resolve_naive(date.and_hms_opt(0, 0, 0)?, assume_tz);
    }

    None
}

/// Interpret a naive timestamp in the fallback zone and convert to UTC
fn resolve_naive(naive: NaiveDateTime, assume_tz: Tz) -> Option<String> {
    let local = match assume_tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => return None,
    };
    Some(format_utc(local.with_timezone(&Utc)))
}

/// Format a UTC timestamp as ISO-8601 with a trailing `Z`
fn format_utc(dt: DateTime<Utc>) -> String {
    if dt.nanosecond() == 0 {
        dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
    }
}
