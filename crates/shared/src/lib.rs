mod error;
pub mod keywords;
pub mod profile;
pub mod row;

pub use error::*;
pub use keywords::KeywordTable;
pub use profile::{DietPreference, Goal};
