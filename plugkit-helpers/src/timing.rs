//! Site-timezone date/time helpers
//!
//! The site timezone is a fixed UTC offset resolved from a stored setting
//! with a caller-supplied fallback. Helpers degrade to `None` on invalid
//! input rather than erroring, except the 24-hour parser, which reports
//! what was wrong with the string.

use chrono::{DateTime, FixedOffset, NaiveTime, Utc};
use thiserror::Error;

/// Why a 24-hour time string failed to parse
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeFormatError {
    /// The string is not `HH:MM` (or `HH:MM:SS` where allowed).
    #[error("malformed 24-hour time: {0:?}")]
    Malformed(String),
    /// The fields parsed but exceed 23 hours or 59 minutes/seconds.
    #[error("24-hour time out of range: {0:?}")]
    OutOfRange(String),
}

/// Resolve the site's UTC offset from a stored setting.
///
/// Accepts `"UTC"`, `"Z"`, or `±HH:MM` offset strings; anything absent or
/// unparsable resolves to `fallback`.
pub fn site_offset(setting: Option<&str>, fallback: FixedOffset) -> FixedOffset {
    let Some(raw) = setting else {
        return fallback;
    };

    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("utc") || trimmed == "Z" {
        return FixedOffset::east_opt(0).unwrap_or(fallback);
    }

    trimmed.parse().unwrap_or(fallback)
}

/// The current time in the given site offset.
pub fn now_in(offset: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset)
}

/// Convert a UTC epoch timestamp to the site offset.
///
/// Zero is rejected the way the host treats an empty option value, and
/// out-of-range timestamps are `None`.
pub fn from_utc_timestamp(secs: i64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    if secs == 0 {
        return None;
    }
    Some(DateTime::<Utc>::from_timestamp(secs, 0)?.with_timezone(&offset))
}

/// Convert a UTC epoch timestamp to the site offset and render it with a
/// `strftime`-style format.
pub fn format_utc_timestamp(secs: i64, offset: FixedOffset, format: &str) -> Option<String> {
    Some(from_utc_timestamp(secs, offset)?.format(format).to_string())
}

/// The first instant (00:00:00) of the moment's day, in its offset.
pub fn start_of_day(moment: &DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    moment
        .date_naive()
        .and_hms_opt(0, 0, 0)?
        .and_local_timezone(*moment.offset())
        .single()
}

/// The last counted instant (23:59:59) of the moment's day, in its offset.
pub fn end_of_day(moment: &DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    moment
        .date_naive()
        .and_hms_opt(23, 59, 59)?
        .and_local_timezone(*moment.offset())
        .single()
}

/// Minutes from `start` to `end`, fractional when not whole.
///
/// `None` when `end` precedes `start`; equal instants are zero minutes.
pub fn minutes_between(
    start: &DateTime<FixedOffset>,
    end: &DateTime<FixedOffset>,
) -> Option<f64> {
    if start > end {
        return None;
    }
    Some(end.signed_duration_since(*start).num_seconds() as f64 / 60.0)
}

/// Minutes between two same-day `HH:MM` strings.
///
/// `None` when either string is invalid or `end` is not strictly after
/// `start` (the host treated a zero-minute span as no result).
pub fn minutes_between_times(start: &str, end: &str) -> Option<f64> {
    let start = parse_24h_time(start, false).ok()?;
    let end = parse_24h_time(end, false).ok()?;

    if end <= start {
        return None;
    }
    Some((end - start).num_seconds() as f64 / 60.0)
}

/// Validate a strict 24-hour time string: `17:30`, or `17:30:59` when
/// `allow_seconds` is set. Fields must be two digits.
pub fn is_valid_24_hour_time(text: &str, allow_seconds: bool) -> bool {
    parse_24h_time(text, allow_seconds).is_ok()
}

/// Parse a strict 24-hour time string into a [`NaiveTime`].
pub fn parse_24h_time(text: &str, allow_seconds: bool) -> Result<NaiveTime, TimeFormatError> {
    let bytes = text.as_bytes();
    let shaped = match bytes.len() {
        5 => fields_shaped(bytes),
        8 if allow_seconds => fields_shaped(bytes),
        _ => false,
    };
    if !shaped {
        return Err(TimeFormatError::Malformed(text.to_string()));
    }

    let hour = two_digits(bytes, 0);
    let minute = two_digits(bytes, 3);
    let second = if bytes.len() == 8 { two_digits(bytes, 6) } else { 0 };

    NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| TimeFormatError::OutOfRange(text.to_string()))
}

/// Digits at every field position, `:` at every separator position.
fn fields_shaped(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .enumerate()
        .all(|(at, &byte)| if at % 3 == 2 { byte == b':' } else { byte.is_ascii_digit() })
}

fn two_digits(bytes: &[u8], at: usize) -> u32 {
    (bytes[at] - b'0') as u32 * 10 + (bytes[at + 1] - b'0') as u32
}
