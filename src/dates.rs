use chrono::{Datelike, Local, NaiveDate};
use voca_rs::case::capitalize;

pub const TURKISH_MONTHS: [&str; 12] = [
    "Ocak",
    "Şubat",
    "Mart",
    "Nisan",
    "Mayıs",
    "Haziran",
    "Temmuz",
    "Ağustos",
    "Eylül",
    "Ekim",
    "Kasım",
    "Aralık",
];

pub fn month_number(name: &str) -> Option<u32> {
    TURKISH_MONTHS
        .iter()
        .position(|month| *month == name)
        .map(|index| index as u32 + 1)
}

pub fn month_display(month: u32) -> &'static str {
    TURKISH_MONTHS[(month - 1) as usize]
}

/// Canonical "Ay - GG" grouping key for a calendar day.
pub fn date_key(date: &NaiveDate) -> String {
    format!("{} - {:02}", month_display(date.month()), date.day())
}

/**
Expands a raw listing date string into one key per day.

Listings encode multi-day runs as a single month followed by day tokens
("Nisan - 10 11 12"). Non-numeric tokens are dropped individually; an
unrecognized month drops the whole string.
*/
pub fn expand_day_tokens(raw: &str) -> Vec<String> {
    let mut tokens = raw
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|token| !token.is_empty());

    let month = match tokens.next() {
        Some(month) if month_number(month).is_some() => month,
        _ => return Vec::new(),
    };

    tokens
        .filter(|token| token.chars().all(|c| c.is_ascii_digit()))
        .map(|day| format!("{} - {:0>2}", month, day))
        .collect()
}

/// Resolves an "Ay - GG" key to a date in the current year.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    parse_date_key_in_year(key, current_year())
}

pub fn parse_date_key_in_year(key: &str, year: i32) -> Option<NaiveDate> {
    let (month, day) = key.split_once(" - ")?;
    month_day_in_year(month, day.trim().parse().ok()?, year)
}

/**
Parses a user-supplied "Ay Gün" start date (e.g. "Nisan 18") in the current
year. The month name is capitalized before lookup.
*/
pub fn parse_month_day(input: &str) -> Option<NaiveDate> {
    let mut parts = input.split_whitespace();
    let month = parts.next()?;
    let day = parts.next()?.parse().ok()?;

    if parts.next().is_some() {
        return None;
    }

    month_day_in_year(&capitalize(month, true), day, current_year())
}

pub fn month_day_to_date(month_name: &str, day: u32) -> Option<NaiveDate> {
    month_day_in_year(month_name, day, current_year())
}

pub fn month_day_in_year(month_name: &str, day: u32, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month_number(month_name)?, day)
}

// Listings carry no year; cross-year spans are a known limitation.
fn current_year() -> i32 {
    Local::now().year()
}
