use super::normalizer::split_lines;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

/// Thai ID numbers are always 13 digits.
pub const ID_NUMBER_DIGITS: usize = 13;

lazy_static! {
    // Caption words near the number, with the letters OCR most often swaps.
    static ref ID_LABEL_PATTERNS: Vec<Regex> = vec![
        // "เลขบัตร" (card number), leading vowel emitted after its consonant
        Regex::new(r"[ลร]เ[ชขค]บั[ตรต]").unwrap(),
        // "บัตรประจำ" (identification card)
        Regex::new(r"บั[ตรต][รน]ประ[จฉ]ำ").unwrap(),
        // "ประชาชน" (citizen)
        Regex::new(r"ประชาชน").unwrap(),
    ];

    static ref LABELLED_DIGIT_RUN: Regex = Regex::new(r"[0-9\s]{13,20}").unwrap();

    static ref BLIND_DIGIT_RUN: Regex =
        Regex::new(r"(?-u:\b)[0-9][0-9\s]{11,18}[0-9](?-u:\b)").unwrap();
}

/// Locate the 13-digit national ID number in the OCR text.
///
/// Lines carrying an ID caption are searched first. When none of them holds a
/// valid number the whole text is scanned for any digit run that collapses to
/// exactly 13 digits. The checksum digit is not verified.
pub fn extract_id_number(text: &str) -> Option<String> {
    extract_labelled(text).or_else(|| extract_blind(text))
}

fn extract_labelled(text: &str) -> Option<String> {
    for line in split_lines(text) {
        let lower = line.to_lowercase();
        if !ID_LABEL_PATTERNS.iter().any(|p| p.is_match(&lower)) {
            continue;
        }

        if let Some(run) = LABELLED_DIGIT_RUN.find(line) {
            if let Some(number) = collapse_digits(run.as_str()) {
                debug!("ID number found on labelled line");
                return Some(number);
            }
        }
    }
    None
}

fn extract_blind(text: &str) -> Option<String> {
    let number = BLIND_DIGIT_RUN
        .find_iter(text)
        .find_map(|run| collapse_digits(run.as_str()));
    if number.is_some() {
        debug!("ID number found by blind digit scan");
    }
    number
}

/// Strip whitespace and accept only an exact 13-digit result.
fn collapse_digits(run: &str) -> Option<String> {
    let digits: String = run.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() == ID_NUMBER_DIGITS && digits.chars().all(|c| c.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}
