use super::fuzzy::ConfusionTable;
use super::normalizer::{latin_text_only, thai_text_only};
use crate::models::Honorific;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    // "ชื่อตัวและชื่อสกุล" (given name and surname), "และ" optional
    static ref THAI_NAME_LABEL: Regex = {
        let table = ConfusionTable::thai();
        let pattern = format!(
            r"{}\s*(?:{})?\s*{}\s+(.+)",
            table.fragment("ชื่อตัว"),
            table.fragment("และ"),
            table.fragment("ชื่อสกุล"),
        );
        Regex::new(&pattern).unwrap()
    };

    static ref ENGLISH_NAME_LABEL: Regex = Regex::new(r"(?i)^Name\s+").unwrap();
    static ref ENGLISH_LAST_NAME_LABEL: Regex = Regex::new(r"(?i)^Last\s*name\s*").unwrap();
}

/// "and", used as a last resort to spot the Thai name line.
const THAI_CONJUNCTION: &str = "และ";

/// Honorific, given name and surname in one script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
    pub prefix: Option<String>,
    pub name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedNames {
    pub thai: NameParts,
    pub english: NameParts,
}

/// Recover both name triples from trimmed, non-empty OCR lines, then fill or
/// correct the honorifics so the two scripts agree.
pub fn extract_names(lines: &[&str]) -> ExtractedNames {
    let mut thai = extract_thai_name(lines);
    let mut english = extract_english_name(lines);

    let (prefix_th, prefix_en) = reconcile_prefixes(thai.prefix.take(), english.prefix.take());
    thai.prefix = prefix_th;
    english.prefix = prefix_en;

    ExtractedNames { thai, english }
}

/// Thai name from the captioned line, or failing that from the first line
/// containing "และ". Only the first candidate line is ever looked at.
pub fn extract_thai_name(lines: &[&str]) -> NameParts {
    // Two full passes: a captioned line anywhere beats an earlier "และ" line.
    let captioned = lines.iter().find_map(|line| {
        THAI_NAME_LABEL
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    });
    if let Some(rest) = captioned {
        debug!("Thai name line matched by caption");
        return split_thai_name(&thai_text_only(rest)).unwrap_or_default();
    }

    match lines.iter().find(|line| line.contains(THAI_CONJUNCTION)) {
        Some(line) => {
            debug!("Thai name line guessed from conjunction");
            split_thai_name(&thai_text_only(line)).unwrap_or_default()
        }
        None => NameParts::default(),
    }
}

// Three tokens led by a known honorific are taken whole. Otherwise only the
// last two tokens are trusted, as given name and surname.
fn split_thai_name(cleaned: &str) -> Option<NameParts> {
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    match tokens.as_slice() {
        [prefix, name, last_name] if Honorific::from_thai(prefix).is_some() => Some(NameParts {
            prefix: Some(prefix.to_string()),
            name: Some(name.to_string()),
            last_name: Some(last_name.to_string()),
        }),
        [.., name, last_name] => Some(NameParts {
            prefix: None,
            name: Some(name.to_string()),
            last_name: Some(last_name.to_string()),
        }),
        _ => None,
    }
}

/// English given name from the first usable `Name ...` line and surname from
/// the first usable `Last name ...` line.
pub fn extract_english_name(lines: &[&str]) -> NameParts {
    let mut parts = NameParts::default();

    for line in lines {
        if parts.name.is_none() {
            if let Some(label) = ENGLISH_NAME_LABEL.find(line) {
                let cleaned = latin_text_only(&line[label.end()..]);
                let tokens: Vec<&str> = cleaned.split_whitespace().collect();
                match tokens.as_slice() {
                    [prefix, name, ..] if Honorific::from_english(prefix).is_some() => {
                        parts.prefix = Some(prefix.to_string());
                        parts.name = Some(name.to_string());
                    }
                    [name, ..] => {
                        parts.prefix = None;
                        parts.name = Some(name.to_string());
                    }
                    [] => {}
                }
            }
        }

        if parts.last_name.is_none() {
            if let Some(label) = ENGLISH_LAST_NAME_LABEL.find(line) {
                let cleaned = latin_text_only(&line[label.end()..]);
                parts.last_name = cleaned.split_whitespace().next().map(str::to_string);
            }
        }
    }

    parts
}

/// Make the two honorifics agree. Thai wins a conflict; a missing side is
/// derived from the other, and stays `None` when the lookup misses.
pub fn reconcile_prefixes(
    prefix_th: Option<String>,
    prefix_en: Option<String>,
) -> (Option<String>, Option<String>) {
    let counterpart = |token: &str| Honorific::counterpart(token).map(str::to_string);

    match (prefix_th, prefix_en) {
        (Some(th), Some(en)) => {
            let expected = counterpart(&th);
            if expected.as_deref() == Some(en.as_str()) {
                (Some(th), Some(en))
            } else {
                debug!("English honorific {:?} overridden by Thai {:?}", en, th);
                (Some(th), expected)
            }
        }
        (Some(th), None) => {
            let en = counterpart(&th);
            (Some(th), en)
        }
        (None, Some(en)) => (counterpart(&en), Some(en)),
        (None, None) => (None, None),
    }
}
