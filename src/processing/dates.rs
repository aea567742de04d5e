use crate::models::{english_month_number, thai_month_number};
use chrono::{Datelike, Duration, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

/// Offset between the Buddhist Era and the Gregorian calendar.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

lazy_static! {
    // Month token: Thai script (consonants, vowels, tone marks) and periods.
    static ref THAI_DATE: Regex =
        Regex::new(r"([0-9]{1,2})\s+([\u{0E01}-\u{0E4E}.]+)\s+([0-9]{4})").unwrap();

    static ref ENGLISH_DATE: Regex =
        Regex::new(r"([0-9]{1,2})\s+([A-Za-z]+)\s+([0-9]{4})").unwrap();
}

/// Parse `<day> <Thai month> <BE year>` into a Gregorian date.
pub fn thai_calendar_date(s: &str) -> Option<NaiveDate> {
    let caps = THAI_DATE.captures(s)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = thai_month_number(&caps[2])?;
    let year_be: i32 = caps[3].parse().ok()?;
    build_date(year_be - BUDDHIST_ERA_OFFSET, month, day)
}

/// Parse `<day> <Mon> <year>`; periods (as in `Jan.`) are ignored.
pub fn english_calendar_date(s: &str) -> Option<NaiveDate> {
    let cleaned = s.replace('.', "");
    let caps = ENGLISH_DATE.captures(&cleaned)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = english_month_number(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    build_date(year, month, day)
}

/// Thai calendar date as `YYYY-MM-DD`.
pub fn parse_thai_date(s: &str) -> Option<String> {
    thai_calendar_date(s).map(to_iso)
}

/// English calendar date as `YYYY-MM-DD`.
pub fn parse_english_date(s: &str) -> Option<String> {
    english_calendar_date(s).map(to_iso)
}

pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// The day is not checked against the month length: it is counted from the
// first of the month, so an overflowing day rolls into the next month. The
// resulting year must still print as four digits.
fn build_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let date = first.checked_add_signed(Duration::days(i64::from(day) - 1))?;
    (0..=9999).contains(&date.year()).then_some(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thai_abbreviated_month() {
        assert_eq!(parse_thai_date("15 ม.ค. 2563"), Some("2020-01-15".to_string()));
        assert_eq!(parse_thai_date("1 มิ.ย. 2530"), Some("1987-06-01".to_string()));
        assert_eq!(parse_thai_date("31 ธ.ค. 2499"), Some("1956-12-31".to_string()));
    }

    #[test]
    fn test_thai_full_month() {
        assert_eq!(parse_thai_date("15 มกราคม 2520"), Some("1977-01-15".to_string()));
        assert_eq!(parse_thai_date("2 เมษายน 2545"), Some("2002-04-02".to_string()));
    }

    #[test]
    fn test_thai_unknown_month() {
        assert_eq!(parse_thai_date("15 ม.ค 2563"), None);
        assert_eq!(parse_thai_date("15 ปปป. 2563"), None);
        assert_eq!(parse_thai_date("no date"), None);
    }

    #[test]
    fn test_english_date() {
        assert_eq!(parse_english_date("15 Jan 2020"), Some("2020-01-15".to_string()));
        assert_eq!(parse_english_date("15 Jan. 2020"), Some("2020-01-15".to_string()));
        assert_eq!(parse_english_date("7 DEC. 1985"), Some("1985-12-07".to_string()));
    }

    #[test]
    fn test_english_unknown_month() {
        assert_eq!(parse_english_date("15 Janvier 2020"), None);
        assert_eq!(parse_english_date("15 January 2020"), None);
    }

    #[test]
    fn test_day_overflow_rolls_forward() {
        assert_eq!(parse_english_date("31 Feb 2021"), Some("2021-03-03".to_string()));
        assert_eq!(parse_thai_date("0 มี.ค. 2564"), Some("2021-02-28".to_string()));
    }

    #[test]
    fn test_buddhist_year_before_gregorian_zero() {
        assert_eq!(parse_thai_date("1 ม.ค. 0100"), None);
        assert_eq!(parse_thai_date("1 ม.ค. 0543"), Some("0000-01-01".to_string()));
    }

    #[test]
    fn test_rollover_past_year_9999() {
        assert_eq!(parse_english_date("99 Dec 9999"), None);
        assert_eq!(parse_english_date("31 Dec 9999"), Some("9999-12-31".to_string()));
    }
}
