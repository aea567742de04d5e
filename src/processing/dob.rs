use super::dates::{parse_english_date, parse_thai_date};
use super::normalizer::collapse_whitespace;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    // "เกิดวันที่" (born on the date)
    static ref THAI_DOB: Regex =
        Regex::new(r"เกิดวันที่\s+([0-9]{1,2}\s+[\u{0E01}-\u{0E4E}.]+\s+[0-9]{4})").unwrap();

    static ref ENGLISH_DOB: Regex =
        Regex::new(r"(?i)Date of Birth\s+([0-9]{1,2}\s+[A-Za-z.]+\s+[0-9]{4})").unwrap();
}

/// Find the labelled birth date, Thai caption first, and return it as
/// `YYYY-MM-DD`. Input may be raw OCR text; whitespace is collapsed here.
pub fn extract_date_of_birth(text: &str) -> Option<String> {
    let text = collapse_whitespace(text);

    if let Some(date) = THAI_DOB
        .captures(&text)
        .and_then(|caps| parse_thai_date(&caps[1]))
    {
        debug!("Date of birth taken from Thai caption");
        return Some(date);
    }

    let date = ENGLISH_DOB
        .captures(&text)
        .and_then(|caps| parse_english_date(&caps[1]));
    if date.is_some() {
        debug!("Date of birth taken from English caption");
    }
    date
}
