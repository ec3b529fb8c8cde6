//! Date-of-birth transforms.
//!
//! Two directions: the raw form input (`YYYY-MM-DD` from a date picker) is
//! turned into a full timestamp before it goes on the wire, and whatever the
//! service stored is turned back into a short calendar date for display.
//!
//! Birth dates are calendar dates, not instants. Inputs are pinned to
//! midnight UTC and rendered back in UTC, so the viewer's own offset never
//! moves a birthday by a day.

use jiff::Timestamp;
use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;

/// Label shown when a record has no usable date of birth.
pub const INVALID_DATE_LABEL: &str = "invalid date";

/// Convert raw form input to the timestamp sent to the service.
///
/// Accepts a full RFC 3339 timestamp or a bare ISO date (midnight UTC).
/// Returns `None` for anything else; the caller submits `null` in that case.
pub fn to_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Some(ts);
    }

    let date = raw.parse::<Date>().ok()?;
    date.to_zoned(TimeZone::UTC).ok().map(|z| z.timestamp())
}

/// Interpret a stored date-of-birth value as a calendar date.
///
/// Tries, in order: RFC 3339 timestamp, bare date, offset-less datetime.
pub fn record_date(value: &str) -> Option<Date> {
    let value = value.trim();
    if let Ok(ts) = value.parse::<Timestamp>() {
        return Some(ts.to_zoned(TimeZone::UTC).date());
    }
    if let Ok(date) = value.parse::<Date>() {
        return Some(date);
    }
    value.parse::<DateTime>().ok().map(|dt| dt.date())
}

/// Render a stored date-of-birth value for display.
pub fn display_date(value: Option<&str>, style: DateStyle) -> String {
    match value.and_then(record_date) {
        Some(date) => style.format(date),
        None => INVALID_DATE_LABEL.to_string(),
    }
}

/// Short numeric date layout used by a locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `20/05/1990`
    #[default]
    DayMonthYear,
    /// `5/20/1990`
    MonthDayYear,
    /// `1990-05-20`
    YearMonthDay,
}

impl DateStyle {
    /// Pick a style from a POSIX or BCP 47 locale tag such as `pt_BR.UTF-8`
    /// or `en-US`.
    pub fn from_locale(tag: &str) -> Self {
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        let mut parts = tag.split(['_', '-']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().map(|r| r.to_ascii_uppercase());

        match (language.as_str(), region.as_deref()) {
            ("" | "c" | "posix", _) => DateStyle::YearMonthDay,
            (_, Some("US" | "PH" | "BZ" | "FM")) => DateStyle::MonthDayYear,
            ("en", None) => DateStyle::MonthDayYear,
            ("ja" | "zh" | "ko" | "sv" | "lt" | "hu", _) => DateStyle::YearMonthDay,
            (_, Some("CA")) if language == "en" || language == "fr" => DateStyle::YearMonthDay,
            _ => DateStyle::DayMonthYear,
        }
    }

    pub fn format(self, date: Date) -> String {
        match self {
            DateStyle::DayMonthYear => {
                format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
            }
            DateStyle::MonthDayYear => {
                format!("{}/{}/{:04}", date.month(), date.day(), date.year())
            }
            DateStyle::YearMonthDay => {
                format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
            }
        }
    }

    /// Parse a date written in this style. Inverse of [`DateStyle::format`].
    pub fn parse(self, text: &str) -> Option<Date> {
        let (sep, order) = match self {
            DateStyle::DayMonthYear => ('/', [2, 1, 0]),
            DateStyle::MonthDayYear => ('/', [2, 0, 1]),
            DateStyle::YearMonthDay => ('-', [0, 1, 2]),
        };

        let parts: Vec<&str> = text.trim().split(sep).collect();
        if parts.len() != 3 {
            return None;
        }

        let year: i16 = parts[order[0]].parse().ok()?;
        let month: i8 = parts[order[1]].parse().ok()?;
        let day: i8 = parts[order[2]].parse().ok()?;
        Date::new(year, month, day).ok()
    }
}
