//! Time related utils.

use chrono::NaiveDate;
use chrono::Utc;

use crate::Result;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Parse date `20220301` into the datetime at midnight UTC of that day.
pub fn parse_date(s: &str) -> Result<DateTime> {
    let date = NaiveDate::parse_from_str(s, "%Y%m%d")?;

    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}
