use serde::Serialize;

/// Fields recovered from the OCR text of one Thai national ID card.
///
/// Every field is independently optional. A value is present only when an
/// extractor matched and validated it: `id_number` is exactly 13 ASCII
/// digits and `date_of_birth` is a Gregorian `YYYY-MM-DD` date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedIdentity {
    pub id_number: Option<String>,

    // Thai script
    pub prefix_th: Option<String>,
    pub name_th: Option<String>,
    pub last_name_th: Option<String>,

    // Latin script
    pub prefix_en: Option<String>,
    pub name_en: Option<String>,
    pub last_name_en: Option<String>,

    pub date_of_birth: Option<String>,
    /// Reserved, never populated.
    pub date_of_expiry: Option<String>,
}

impl ExtractedIdentity {
    /// True when no field at all could be recovered.
    pub fn is_empty(&self) -> bool {
        *self == ExtractedIdentity::default()
    }
}
