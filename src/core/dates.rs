use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Two-digit years below this land in the 2000s, the rest in the 1900s.
const CENTURY_PIVOT: i32 = 69;

static INPUT_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{2})$").expect("input date pattern")
});

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$").expect("iso date pattern")
});

/// `MM/DD/YY` to `YYYY-MM-DD`. `None` when the pattern or the calendar date is invalid.
pub fn reformat_input_date(raw: &str) -> Option<String> {
    let caps = INPUT_DATE.captures(raw)?;
    let yy: i32 = caps[3].parse().ok()?;
    let year = if yy < CENTURY_PIVOT { 2000 + yy } else { 1900 + yy };
    to_iso(year, &caps[1], &caps[2])
}

/// Round-trips a `YYYY-MM-DD` date through the calendar, zero-padding month and day.
pub fn normalize_iso_date(raw: &str) -> Option<String> {
    let caps = ISO_DATE.captures(raw)?;
    let year: i32 = caps[1].parse().ok()?;
    to_iso(year, &caps[2], &caps[3])
}

fn to_iso(year: i32, month: &str, day: &str) -> Option<String> {
    let date = NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)?;
    Some(date.format(ISO_DATE_FORMAT).to_string())
}
