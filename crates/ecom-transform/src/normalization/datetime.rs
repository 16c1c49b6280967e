//! Mixed-format date parsing.
//!
//! Every cell is parsed on its own: one column may mix `2024-03-01`,
//! `03/01/2024` and `March 1, 2024`. Numeric dates without a leading year are
//! read month-first; day-first is only tried when month-first yields no valid
//! date. `01/02/2024` is therefore January 2nd while `13/02/2024` is
//! February 13th.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use ecom_common::{any_to_string, is_blank};
use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};
use tracing::debug;

use crate::error::{Result, TransformError};

/// Output layout when every value in the column falls at midnight.
const DATE_FORMAT: &str = "%Y-%m-%d";
/// Output layout when at least one value carries a time of day.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TIME_FORMATS: [&str; 4] = ["%H:%M:%S%.f", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

/// Month-name layouts, parsed against the whole value.
const NAMED_DATE_FORMATS: [&str; 10] = [
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%d %B, %Y",
    "%d-%b-%Y",
    "%A, %B %d, %Y",
    "%a, %d %b %Y",
];

/// Parse a single date or date-time value, inferring its layout.
///
/// Returns `None` for blank input and for values matching no accepted layout.
/// Values with a UTC offset keep their local wall-clock time.
///
/// ```
/// use chrono::NaiveDate;
/// use ecom_transform::parse_mixed_datetime;
///
/// let jan_2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(0, 0, 0);
/// assert_eq!(parse_mixed_datetime("2024-01-02"), jan_2);
/// assert_eq!(parse_mixed_datetime("01/02/2024"), jan_2);
/// assert_eq!(parse_mixed_datetime("January 2, 2024"), jan_2);
/// assert_eq!(parse_mixed_datetime("not a date"), None);
/// ```
pub fn parse_mixed_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }

    let (date_part, time_part) = split_date_time(trimmed);
    if date_part.starts_with(|c: char| c.is_ascii_digit())
        && let Some(date) = parse_numeric_date(date_part)
    {
        return match time_part {
            None => date.and_hms_opt(0, 0, 0),
            Some(time) => parse_time(time).map(|time| date.and_time(time)),
        };
    }

    NAMED_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Split `2024-01-05T10:30` or `01/05/2024 10:30 AM` into date and time parts.
fn split_date_time(value: &str) -> (&str, Option<&str>) {
    let bytes = value.as_bytes();
    let split_at = value.char_indices().find_map(|(idx, ch)| {
        let after_digit = idx > 0 && bytes[idx - 1].is_ascii_digit();
        match ch {
            'T' if after_digit => Some(idx),
            ' ' => Some(idx),
            _ => None,
        }
    });
    match split_at {
        Some(idx) => {
            let time = value[idx + 1..].trim();
            let time = if time.is_empty() { None } else { Some(time) };
            (&value[..idx], time)
        }
        None => (value, None),
    }
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
}

/// Parse an all-digit date with `-`, `/` or `.` separators, or a bare `YYYYMMDD`.
fn parse_numeric_date(value: &str) -> Option<NaiveDate> {
    if value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::parse_from_str(value, "%Y%m%d").ok();
    }

    let separator = value.chars().find(|c| matches!(c, '-' | '/' | '.'))?;
    let parts: Vec<&str> = value.split(separator).collect();
    if parts.len() != 3
        || parts
            .iter()
            .any(|part| part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    let first: u32 = parts[0].parse().ok()?;
    let second: u32 = parts[1].parse().ok()?;
    let third: u32 = parts[2].parse().ok()?;

    if parts[0].len() == 4 {
        return NaiveDate::from_ymd_opt(i32::try_from(first).ok()?, second, third);
    }

    let year = expand_year(parts[2], third)?;
    NaiveDate::from_ymd_opt(year, first, second)
        .or_else(|| NaiveDate::from_ymd_opt(year, second, first))
}

/// Four-digit years as written; two-digit years pivot at 69 (`68` → 2068, `69` → 1969).
fn expand_year(text: &str, value: u32) -> Option<i32> {
    let value = i32::try_from(value).ok()?;
    match text.len() {
        4 => Some(value),
        2 if value < 69 => Some(2000 + value),
        2 => Some(1900 + value),
        _ => None,
    }
}

/// Replace `column` with its canonical date representation.
///
/// Null and blank cells stay null. The first cell that cannot be parsed fails
/// the whole call with [`TransformError::InvalidDate`]. Values are written as
/// `YYYY-MM-DD`, or `YYYY-MM-DD HH:MM:SS` when any value in the column has a
/// time of day.
pub fn normalize_date_column(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let source = df
        .column(column)
        .map_err(|_| TransformError::ColumnNotFound {
            column: column.to_string(),
        })?;

    let mut parsed: Vec<Option<NaiveDateTime>> = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = source.get(idx).unwrap_or(AnyValue::Null);
        if is_blank(&value) {
            parsed.push(None);
            continue;
        }
        let text = any_to_string(value);
        match parse_mixed_datetime(&text) {
            Some(dt) => parsed.push(Some(dt)),
            None => {
                return Err(TransformError::InvalidDate {
                    column: column.to_string(),
                    row: idx,
                    value: text,
                });
            }
        }
    }

    let date_only = parsed.iter().flatten().all(|dt| dt.time() == NaiveTime::MIN);
    let layout = if date_only { DATE_FORMAT } else { DATETIME_FORMAT };
    let values: Vec<Option<String>> = parsed
        .iter()
        .map(|dt| dt.map(|value| value.format(layout).to_string()))
        .collect();
    debug!(column, date_only, rows = values.len(), "date column normalized");

    let mut out = df.clone();
    out.with_column(Series::new(column.into(), values))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(y, m, d).and_then(|date| date.and_hms_opt(0, 0, 0))
    }

    #[test]
    fn split_on_t_only_after_digit() {
        assert_eq!(split_date_time("2024-01-05T10:30"), ("2024-01-05", Some("10:30")));
        assert_eq!(split_date_time("Tuesday"), ("Tuesday", None));
        assert_eq!(
            split_date_time("01/05/2024 10:30 AM"),
            ("01/05/2024", Some("10:30 AM"))
        );
    }

    #[test]
    fn numeric_year_first() {
        assert_eq!(parse_mixed_datetime("2024/03/09"), ymd(2024, 3, 9));
        assert_eq!(parse_mixed_datetime("2024.03.09"), ymd(2024, 3, 9));
        assert_eq!(parse_mixed_datetime("20240309"), ymd(2024, 3, 9));
    }

    #[test]
    fn numeric_month_first_then_day_first() {
        assert_eq!(parse_mixed_datetime("03-09-2024"), ymd(2024, 3, 9));
        assert_eq!(parse_mixed_datetime("25.12.2023"), ymd(2023, 12, 25));
        assert_eq!(parse_mixed_datetime("13/02/2024"), ymd(2024, 2, 13));
    }

    #[test]
    fn two_digit_years() {
        assert_eq!(parse_mixed_datetime("1/2/24"), ymd(2024, 1, 2));
        assert_eq!(parse_mixed_datetime("1/2/99"), ymd(1999, 1, 2));
        assert_eq!(parse_mixed_datetime("1/2/123"), None);
    }

    #[test]
    fn named_months() {
        assert_eq!(parse_mixed_datetime("5 Jan 2024"), ymd(2024, 1, 5));
        assert_eq!(parse_mixed_datetime("Jan 5 2024"), ymd(2024, 1, 5));
        assert_eq!(parse_mixed_datetime("05-Jan-2024"), ymd(2024, 1, 5));
    }

    #[test]
    fn with_time_of_day() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0);
        assert_eq!(parse_mixed_datetime("2024-01-05 14:30"), expected);
        assert_eq!(parse_mixed_datetime("2024-01-05T14:30:00"), expected);
        assert_eq!(parse_mixed_datetime("01/05/2024 02:30 PM"), expected);
        assert_eq!(parse_mixed_datetime("2024-01-05T14:30:00+02:00"), expected);
    }

    #[test]
    fn rejects_invalid() {
        assert_eq!(parse_mixed_datetime(""), None);
        assert_eq!(parse_mixed_datetime("   "), None);
        assert_eq!(parse_mixed_datetime("2024-13-45"), None);
        assert_eq!(parse_mixed_datetime("32/13/2024"), None);
        assert_eq!(parse_mixed_datetime("2024-01-05 25:00"), None);
        assert_eq!(parse_mixed_datetime("soon"), None);
    }
}
