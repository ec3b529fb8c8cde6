use cadastro_core::dates::{DateStyle, INVALID_DATE_LABEL, display_date, record_date, to_timestamp};
use jiff::civil::date;

#[test]
fn bare_date_becomes_midnight_utc() {
    let ts = to_timestamp("1990-05-20").expect("valid date");
    assert_eq!(ts.to_string(), "1990-05-20T00:00:00Z");
}

#[test]
fn full_timestamp_is_kept() {
    let ts = to_timestamp("2001-02-03T04:05:06Z").expect("valid timestamp");
    assert_eq!(ts.to_string(), "2001-02-03T04:05:06Z");
}

#[test]
fn unparsable_input_has_no_timestamp() {
    assert!(to_timestamp("2023-02-30").is_none());
    assert!(to_timestamp("not a date").is_none());
    assert!(to_timestamp("").is_none());
}

#[test]
fn birth_date_survives_format_and_reparse_in_every_style() {
    let ts = to_timestamp("1990-05-20").expect("valid date");
    let wire = ts.to_string();

    for style in [
        DateStyle::DayMonthYear,
        DateStyle::MonthDayYear,
        DateStyle::YearMonthDay,
    ] {
        let shown = display_date(Some(&wire), style);
        assert_eq!(style.parse(&shown), Some(date(1990, 5, 20)), "{style:?}: {shown}");
    }
}

#[test]
fn short_date_layouts() {
    let d = date(1990, 5, 20);
    assert_eq!(DateStyle::DayMonthYear.format(d), "20/05/1990");
    assert_eq!(DateStyle::MonthDayYear.format(d), "5/20/1990");
    assert_eq!(DateStyle::YearMonthDay.format(d), "1990-05-20");
}

#[test]
fn absent_or_garbage_dates_render_fallback_label() {
    assert_eq!(display_date(None, DateStyle::DayMonthYear), INVALID_DATE_LABEL);
    assert_eq!(
        display_date(Some("yesterday"), DateStyle::DayMonthYear),
        INVALID_DATE_LABEL
    );
    assert_eq!(display_date(Some(""), DateStyle::YearMonthDay), INVALID_DATE_LABEL);
}

#[test]
fn stored_values_with_millis_or_without_offset_are_read() {
    assert_eq!(record_date("2000-01-01T00:00:00.000Z"), Some(date(2000, 1, 1)));
    assert_eq!(record_date("2000-01-01"), Some(date(2000, 1, 1)));
    assert_eq!(record_date("2000-01-01T12:30:00"), Some(date(2000, 1, 1)));
}

#[test]
fn midnight_utc_is_not_shifted_by_offsets() {
    // Rendered as a UTC calendar date regardless of where the viewer is.
    assert_eq!(record_date("1990-05-20T00:00:00Z"), Some(date(1990, 5, 20)));
    assert_eq!(record_date("1990-05-20T01:00:00+03:00"), Some(date(1990, 5, 19)));
}

#[test]
fn locale_tags_pick_styles() {
    assert_eq!(DateStyle::from_locale("pt_BR.UTF-8"), DateStyle::DayMonthYear);
    assert_eq!(DateStyle::from_locale("en-US"), DateStyle::MonthDayYear);
    assert_eq!(DateStyle::from_locale("en"), DateStyle::MonthDayYear);
    assert_eq!(DateStyle::from_locale("en_GB"), DateStyle::DayMonthYear);
    assert_eq!(DateStyle::from_locale("ja_JP.UTF-8"), DateStyle::YearMonthDay);
    assert_eq!(DateStyle::from_locale("C"), DateStyle::YearMonthDay);
    assert_eq!(DateStyle::from_locale(""), DateStyle::YearMonthDay);
}

#[test]
fn parse_rejects_other_layouts() {
    assert!(DateStyle::DayMonthYear.parse("1990-05-20").is_none());
    assert!(DateStyle::YearMonthDay.parse("20/05/1990").is_none());
    assert!(DateStyle::DayMonthYear.parse("31/02/1990").is_none());
}
