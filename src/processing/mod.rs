pub mod dates;
pub mod dob;
pub mod fuzzy;
pub mod id_number;
pub mod names;
pub mod normalizer;

pub use dates::{parse_english_date, parse_thai_date};
pub use dob::extract_date_of_birth;
pub use fuzzy::ConfusionTable;
pub use id_number::extract_id_number;
pub use names::{extract_names, ExtractedNames, NameParts};
pub use normalizer::{collapse_whitespace, split_lines};
