// OCR-tolerant label matching for Thai captions.
//
// A caption is turned into a regex fragment one character at a time: each
// character becomes a class of itself plus the characters OCR tends to read
// in its place, and marks written above or below the baseline become
// optional since they are the first thing OCR drops.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref THAI_CONFUSIONS: ConfusionTable = {
        let mut table = ConfusionTable::new();
        table.insert_mutual(&['ช', 'ซ']);
        table.insert_mutual(&['ก', 'ล']);
        // Upper vowels
        table.insert_mutual(&['ื', 'ี', 'ิ']);
        // Tone marks
        table.insert_mutual(&['่', '้']);
        table
    };
}

/// Vowel and tone marks that sit above or below a Thai consonant.
pub fn is_thai_combining_mark(c: char) -> bool {
    matches!(c, '\u{0E31}' | '\u{0E34}'..='\u{0E3A}' | '\u{0E47}'..='\u{0E4E}')
}

/// Character -> characters OCR is known to read in its place.
#[derive(Debug, Clone, Default)]
pub struct ConfusionTable {
    substitutes: HashMap<char, Vec<char>>,
}

impl ConfusionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table used for Thai card captions.
    pub fn thai() -> &'static ConfusionTable {
        &THAI_CONFUSIONS
    }

    /// Record that `c` may be read as `substitute`.
    pub fn insert(&mut self, c: char, substitute: char) {
        let entry = self.substitutes.entry(c).or_default();
        if c != substitute && !entry.contains(&substitute) {
            entry.push(substitute);
        }
    }

    /// Make every character of `group` confusable with every other.
    pub fn insert_mutual(&mut self, group: &[char]) {
        for &a in group {
            for &b in group {
                self.insert(a, b);
            }
        }
    }

    pub fn substitutes(&self, c: char) -> &[char] {
        self.substitutes.get(&c).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Regex fragment matching `label` under this table.
    pub fn fragment(&self, label: &str) -> String {
        let mut pattern = String::new();
        for c in label.chars() {
            let substitutes = self.substitutes(c);
            if substitutes.is_empty() {
                pattern.push_str(&regex::escape(&c.to_string()));
            } else {
                pattern.push('[');
                for alt in std::iter::once(c).chain(substitutes.iter().copied()) {
                    pattern.push_str(&regex::escape(&alt.to_string()));
                }
                pattern.push(']');
            }
            if is_thai_combining_mark(c) {
                pattern.push('?');
            }
        }
        pattern
    }
}
