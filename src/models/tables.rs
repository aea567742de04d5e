// Fixed lookup tables shared by the extractors. Never written after init.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Honorific printed before the name on the card, in either script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Honorific {
    /// นาย / Mr.
    Mr,
    /// นาง / Mrs.
    Mrs,
    /// นางสาว / Miss
    Miss,
}

impl Honorific {
    pub const ALL: [Honorific; 3] = [Honorific::Mr, Honorific::Mrs, Honorific::Miss];

    pub fn thai(self) -> &'static str {
        match self {
            Honorific::Mr => "นาย",
            Honorific::Mrs => "นาง",
            Honorific::Miss => "นางสาว",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            Honorific::Mr => "Mr.",
            Honorific::Mrs => "Mrs.",
            Honorific::Miss => "Miss",
        }
    }

    pub fn from_thai(token: &str) -> Option<Honorific> {
        Self::ALL.iter().copied().find(|h| h.thai() == token)
    }

    pub fn from_english(token: &str) -> Option<Honorific> {
        Self::ALL.iter().copied().find(|h| h.english() == token)
    }

    /// The other script's spelling of `token`, if it is a known honorific.
    pub fn counterpart(token: &str) -> Option<&'static str> {
        if let Some(h) = Self::from_thai(token) {
            return Some(h.english());
        }
        Self::from_english(token).map(Honorific::thai)
    }
}

lazy_static! {
    // Abbreviated forms as printed on the card, plus the full names that
    // show up when the card is printed or read in long form.
    static ref THAI_MONTHS: HashMap<&'static str, u32> = {
        let mut m = HashMap::new();
        let abbreviated = [
            "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.",
            "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.", "พ.ย.", "ธ.ค.",
        ];
        let full = [
            "มกราคม", "กุมภาพันธ์", "มีนาคม", "เมษายน", "พฤษภาคม", "มิถุนายน",
            "กรกฎาคม", "สิงหาคม", "กันยายน", "ตุลาคม", "พฤศจิกายน", "ธันวาคม",
        ];
        for (i, (abbr, name)) in abbreviated.iter().zip(full.iter()).enumerate() {
            m.insert(*abbr, i as u32 + 1);
            m.insert(*name, i as u32 + 1);
        }
        m
    };
}

const ENGLISH_MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Month of year (1-12) for a Thai month token, exact match.
pub fn thai_month_number(token: &str) -> Option<u32> {
    THAI_MONTHS.get(token).copied()
}

/// Month of year (1-12) for a three-letter English abbreviation, any case.
pub fn english_month_number(word: &str) -> Option<u32> {
    let word = word.to_lowercase();
    ENGLISH_MONTHS
        .iter()
        .position(|m| *m == word)
        .map(|i| i as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_honorific_table_is_bidirectional() {
        for h in Honorific::ALL {
            assert_eq!(Honorific::counterpart(h.thai()), Some(h.english()));
            assert_eq!(Honorific::counterpart(h.english()), Some(h.thai()));
            assert_eq!(Honorific::from_thai(h.thai()), Some(h));
            assert_eq!(Honorific::from_english(h.english()), Some(h));
        }
    }

    #[test]
    fn test_honorific_lookup_miss() {
        assert_eq!(Honorific::counterpart("Dr."), None);
        assert_eq!(Honorific::counterpart("Mr"), None);
        assert_eq!(Honorific::counterpart("ด.ช."), None);
        assert_eq!(Honorific::from_thai("Mr."), None);
    }

    #[test]
    fn test_thai_months() {
        assert_eq!(thai_month_number("ม.ค."), Some(1));
        assert_eq!(thai_month_number("มิ.ย."), Some(6));
        assert_eq!(thai_month_number("ธ.ค."), Some(12));
        assert_eq!(thai_month_number("มกราคม"), Some(1));
        assert_eq!(thai_month_number("ธันวาคม"), Some(12));
        assert_eq!(thai_month_number("ม.ค"), None);
    }

    #[test]
    fn test_english_months() {
        assert_eq!(english_month_number("Jan"), Some(1));
        assert_eq!(english_month_number("DEC"), Some(12));
        assert_eq!(english_month_number("January"), None);
    }
}
