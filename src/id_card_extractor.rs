use crate::config::RecognitionConfig;
use crate::models::ExtractedIdentity;
use crate::processing::*;
use log::debug;

/// Runs every field extractor over one OCR text blob.
#[derive(Debug, Clone, Default)]
pub struct IdCardExtractor {
    config: RecognitionConfig,
}

impl IdCardExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor tagged with the parameters the text was recognized with.
    pub fn with_config(config: RecognitionConfig) -> Self {
        IdCardExtractor { config }
    }

    pub fn config(&self) -> &RecognitionConfig {
        &self.config
    }

    /// Best-effort extraction. Fields that cannot be recovered are `None`;
    /// this never fails, whatever the input.
    pub fn extract(&self, text: &str) -> ExtractedIdentity {
        debug!(
            "Extracting fields from {} chars of OCR text (lang={}, oem={}, psm={})",
            text.chars().count(),
            self.config.lang,
            self.config.oem,
            self.config.psm
        );

        let lines = split_lines(text);
        let ExtractedNames { thai, english } = extract_names(&lines);

        let identity = ExtractedIdentity {
            id_number: extract_id_number(text),
            prefix_th: thai.prefix,
            name_th: thai.name,
            last_name_th: thai.last_name,
            prefix_en: english.prefix,
            name_en: english.name,
            last_name_en: english.last_name,
            date_of_birth: extract_date_of_birth(text),
            date_of_expiry: None,
        };

        if identity.is_empty() {
            debug!("No fields recovered");
        }
        identity
    }
}

/// Extract with default recognition parameters.
pub fn extract_identity(text: &str) -> ExtractedIdentity {
    IdCardExtractor::new().extract(text)
}
