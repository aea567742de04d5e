use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Split OCR output into trimmed, non-empty lines. Handles `\n`, `\r\n` and
/// bare `\r` line breaks.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split(|c| c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Collapse every whitespace run (line breaks included) to a single space,
/// so phrases broken across lines can be matched as one.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Keep only Thai-block characters (U+0E00..U+0E7F) and whitespace.
pub fn thai_text_only(text: &str) -> String {
    text.chars()
        .filter(|&c| ('\u{0E00}'..='\u{0E7F}').contains(&c) || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Keep only ASCII letters, periods and whitespace.
pub fn latin_text_only(text: &str) -> String {
    text.chars()
        .filter(|&c| c.is_ascii_alphabetic() || c == '.' || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}
