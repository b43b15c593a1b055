//! Field search, row filtering and label lookup
//!
//! This module provides:
//! - Field matching rules used by find/replace
//! - Typed parsing of search input per field
//! - Category and text filtering of the event list
//! - A label -> index map for jump resolution

mod filter;
mod index;
mod matcher;

pub use filter::{category_of, matches_filter, EventCategory};
pub use index::LabelIndex;
pub use matcher::{field_matches, parse_field_value, SEARCHABLE_FIELDS};
