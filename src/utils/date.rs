use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional CLI date, defaulting to today.
pub fn date_or_today(s: Option<&str>) -> AppResult<NaiveDate> {
    match s {
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
        None => Ok(today()),
    }
}

pub fn first_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

pub fn last_of_month(d: NaiveDate) -> NaiveDate {
    let first = first_of_month(d);
    first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(d)
}

pub fn add_days(d: NaiveDate, n: i64) -> NaiveDate {
    let shifted = if n >= 0 {
        d.checked_add_days(Days::new(n as u64))
    } else {
        d.checked_sub_days(Days::new(n.unsigned_abs()))
    };
    shifted.unwrap_or(d)
}

/// Every date from `start` to `end` inclusive.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Parse a `--range` filter.
///
/// Supported:
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start =
            parse_date(start_raw).ok_or_else(|| AppError::InvalidDate(start_raw.to_string()))?;
        let end = parse_date(end_raw).ok_or_else(|| AppError::InvalidDate(end_raw.to_string()))?;
        if end < start {
            return Err(AppError::InvalidDate(r.to_string()));
        }
        return Ok((start, end));
    }

    match r.trim().len() {
        // YYYY-MM
        7 => {
            let first = parse_date(&format!("{}-01", r.trim()))
                .ok_or_else(|| AppError::InvalidDate(r.to_string()))?;
            Ok((first, last_of_month(first)))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(r).ok_or_else(|| AppError::InvalidDate(r.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidDate(r.to_string())),
    }
}
