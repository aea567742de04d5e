pub mod config;
pub mod id_card_extractor;
pub mod models;
pub mod processing;
pub mod utils;

pub use config::{RecognitionConfig, RecognitionParams};
pub use id_card_extractor::{extract_identity, IdCardExtractor};
pub use models::ExtractedIdentity;
pub use utils::ExtractionError;
