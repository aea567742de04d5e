pub mod data;
pub mod response;
pub mod tables;

pub use data::ExtractedIdentity;
pub use response::ApiResponse;
pub use tables::{english_month_number, thai_month_number, Honorific};
