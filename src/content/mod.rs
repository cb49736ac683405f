//! Content transformation module
//!
//! Parsing and reconstruction of inline attachments embedded in free-text
//! content fields.

pub mod attachments;

pub use attachments::{parse, ParsedContent};
