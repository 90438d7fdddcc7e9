//! Time utilities: timestamp parsing, UTC offsets, clock formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse an appointment timestamp.
///
/// RFC 3339 is the canonical form. Timestamps without an offset are read as
/// UTC. Anything else yields None so one bad record never aborts a whole view.
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    let utc = FixedOffset::east_opt(0)?;
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .and_then(|naive| utc.from_local_datetime(&naive).single())
}

/// Parse `+HH:MM` / `-HH:MM` / `Z` into a fixed offset.
pub fn parse_offset(s: &str) -> AppResult<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| AppError::InvalidOffset(s.to_string()));
    }

    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => return Err(AppError::InvalidOffset(s.to_string())),
    };

    let (h, m) = rest
        .split_once(':')
        .ok_or_else(|| AppError::InvalidOffset(s.to_string()))?;
    let h: i32 = h.parse().map_err(|_| AppError::InvalidOffset(s.to_string()))?;
    let m: i32 = m.parse().map_err(|_| AppError::InvalidOffset(s.to_string()))?;

    if !(0..=23).contains(&h) || !(0..=59).contains(&m) {
        return Err(AppError::InvalidOffset(s.to_string()));
    }

    FixedOffset::east_opt(sign * (h * 3600 + m * 60))
        .ok_or_else(|| AppError::InvalidOffset(s.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "12h")]
    H12,
}

/// Clock time of `dt` as seen from `zone`.
pub fn format_clock(dt: &DateTime<FixedOffset>, zone: &FixedOffset, fmt: TimeFormat) -> String {
    let local = dt.with_timezone(zone);
    match fmt {
        TimeFormat::H24 => format!("{:02}:{:02}", local.hour(), local.minute()),
        TimeFormat::H12 => {
            let (pm, h) = local.hour12();
            format!(
                "{}:{:02} {}",
                h,
                local.minute(),
                if pm { "PM" } else { "AM" }
            )
        }
    }
}
