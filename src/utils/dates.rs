// src/utils/dates.rs

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

use crate::error::AppError;

const FORMATS: [&str; 2] = ["%d-%m-%Y", "%Y-%m-%d"];

/// Parses a date in `DD-MM-YYYY` or `YYYY-MM-DD` form.
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    let value = value.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid date '{value}'")))
}

/// Turns a `[start, end]` pair of dates into an inclusive UTC instant range:
/// start of the first day through the last microsecond of the second.
pub fn parse_date_range(
    start: &str,
    end: &str,
) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;

    if start > end {
        return Err(AppError::BadRequest(
            "Start date must not be after end date".to_string(),
        ));
    }

    let from = start.and_time(NaiveTime::MIN).and_utc();
    let to = end.and_time(NaiveTime::MIN).and_utc() + TimeDelta::days(1)
        - TimeDelta::microseconds(1);

    Ok((from, to))
}
