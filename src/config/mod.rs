//! Recognition parameters
//!
//! Knobs a caller passes for the OCR step that produced the text. They are
//! validated and carried alongside the result but never change extraction.

use crate::utils::ExtractionError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Only resolution hint the recognizer accepts.
pub const SUPPORTED_DPI: u32 = 300;
pub const MAX_OEM: u8 = 3;
pub const MAX_PSM: u8 = 13;

/// Raw, unvalidated parameters as they arrive with a request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognitionParams {
    pub lang: Option<String>,
    pub oem: Option<i64>,
    pub psm: Option<i64>,
    pub dpi: Option<i64>,
}

/// Language set handed to the recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "tha")]
    Thai,
    #[serde(rename = "eng")]
    English,
    #[serde(rename = "tha+eng")]
    ThaiEnglish,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Thai => "tha",
            Language::English => "eng",
            Language::ThaiEnglish => "tha+eng",
        }
    }
}

impl FromStr for Language {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tha" => Ok(Language::Thai),
            "eng" => Ok(Language::English),
            "tha+eng" => Ok(Language::ThaiEnglish),
            other => Err(ExtractionError::InvalidConfig(format!(
                "unsupported language: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Validated recognition parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionConfig {
    pub lang: Language,
    /// Engine mode, 0-3
    pub oem: u8,
    /// Page segmentation mode, 0-13
    pub psm: u8,
    pub dpi: Option<u32>,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            lang: Language::ThaiEnglish,
            oem: 1,
            psm: 3,
            dpi: None,
        }
    }
}

impl RecognitionConfig {
    /// Lenient resolution: every missing or out-of-range value falls back to
    /// its default.
    pub fn resolve(params: &RecognitionParams) -> Self {
        let defaults = Self::default();

        let lang = match params.lang.as_deref().map(str::parse::<Language>) {
            Some(Ok(lang)) => lang,
            Some(Err(e)) => {
                warn!("{}, using {}", e, defaults.lang);
                defaults.lang
            }
            None => defaults.lang,
        };

        let oem = match params.oem {
            Some(v) => check_range("oem", v, MAX_OEM).unwrap_or_else(|e| {
                warn!("{}, using {}", e, defaults.oem);
                defaults.oem
            }),
            None => defaults.oem,
        };

        let psm = match params.psm {
            Some(v) => check_range("psm", v, MAX_PSM).unwrap_or_else(|e| {
                warn!("{}, using {}", e, defaults.psm);
                defaults.psm
            }),
            None => defaults.psm,
        };

        let dpi = match params.dpi {
            Some(v) if v == i64::from(SUPPORTED_DPI) => Some(SUPPORTED_DPI),
            Some(v) => {
                warn!("unsupported dpi {}, leaving unset", v);
                None
            }
            None => None,
        };

        RecognitionConfig { lang, oem, psm, dpi }
    }
}

impl TryFrom<RecognitionParams> for RecognitionConfig {
    type Error = ExtractionError;

    /// Strict resolution: the first out-of-range value is an error.
    fn try_from(params: RecognitionParams) -> Result<Self, Self::Error> {
        let defaults = Self::default();

        let lang = match params.lang {
            Some(lang) => lang.parse()?,
            None => defaults.lang,
        };
        let oem = match params.oem {
            Some(v) => check_range("oem", v, MAX_OEM)?,
            None => defaults.oem,
        };
        let psm = match params.psm {
            Some(v) => check_range("psm", v, MAX_PSM)?,
            None => defaults.psm,
        };
        let dpi = match params.dpi {
            Some(v) if v == i64::from(SUPPORTED_DPI) => Some(SUPPORTED_DPI),
            Some(v) => {
                return Err(ExtractionError::InvalidConfig(format!(
                    "dpi must be {}, got {}",
                    SUPPORTED_DPI, v
                )))
            }
            None => None,
        };

        Ok(RecognitionConfig { lang, oem, psm, dpi })
    }
}

fn check_range(field: &str, value: i64, max: u8) -> Result<u8, ExtractionError> {
    if (0..=i64::from(max)).contains(&value) {
        Ok(value as u8)
    } else {
        Err(ExtractionError::InvalidConfig(format!(
            "{} must be between 0 and {}, got {}",
            field, max, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecognitionConfig::resolve(&RecognitionParams::default());
        assert_eq!(config, RecognitionConfig::default());
        assert_eq!(config.lang.code(), "tha+eng");
        assert_eq!(config.oem, 1);
        assert_eq!(config.psm, 3);
        assert_eq!(config.dpi, None);
    }

    #[test]
    fn test_valid_params_kept() {
        let params = RecognitionParams {
            lang: Some("tha".to_string()),
            oem: Some(0),
            psm: Some(13),
            dpi: Some(300),
        };
        let config = RecognitionConfig::resolve(&params);
        assert_eq!(config.lang, Language::Thai);
        assert_eq!(config.oem, 0);
        assert_eq!(config.psm, 13);
        assert_eq!(config.dpi, Some(300));
        assert_eq!(RecognitionConfig::try_from(params).unwrap(), config);
    }

    #[test]
    fn test_zero_modes_and_dpi_without_lang() {
        let params = RecognitionParams {
            lang: None,
            oem: Some(0),
            psm: Some(0),
            dpi: Some(300),
        };
        let config = RecognitionConfig::resolve(&params);
        assert_eq!(config.lang, RecognitionConfig::default().lang);
        assert_eq!(config.oem, 0);
        assert_eq!(config.psm, 0);
        assert_eq!(config.dpi, Some(300));
        assert_eq!(RecognitionConfig::try_from(params).unwrap(), config);
    }

    #[test]
    fn test_lenient_falls_back() {
        let params = RecognitionParams {
            lang: Some("jpn".to_string()),
            oem: Some(4),
            psm: Some(-1),
            dpi: Some(72),
        };
        assert_eq!(RecognitionConfig::resolve(&params), RecognitionConfig::default());
    }

    #[test]
    fn test_strict_rejects() {
        let params = RecognitionParams {
            psm: Some(14),
            ..Default::default()
        };
        let err = RecognitionConfig::try_from(params).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidConfig(_)));
        assert!(err.to_string().contains("psm"));

        let params = RecognitionParams {
            lang: Some("english".to_string()),
            ..Default::default()
        };
        assert!(RecognitionConfig::try_from(params).is_err());
    }

    #[test]
    fn test_params_from_json() {
        let params: RecognitionParams =
            serde_json::from_str(r#"{"lang":"eng","oem":2,"dpi":300}"#).unwrap();
        let config = RecognitionConfig::resolve(&params);
        assert_eq!(config.lang, Language::English);
        assert_eq!(config.oem, 2);
        assert_eq!(config.psm, 3);
        assert_eq!(config.dpi, Some(300));
    }
}
