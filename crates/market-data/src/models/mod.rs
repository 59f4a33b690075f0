//! Data types shared across the fetch and merge layers

pub mod payload;
pub mod row;

pub use payload::{clean_value, Payload};
pub use row::{FetchOutcome, QuoteRow, COLUMNS};
