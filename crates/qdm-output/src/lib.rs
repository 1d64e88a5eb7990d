//! Record rendering for Quick Data Mapper.
//!
//! Turns transformed row sets into downloadable text: CSV with the quoting
//! rules the original field-mapper produced, and indented JSON.

mod csv;
mod json;

pub use csv::to_csv;
pub use json::to_json;
