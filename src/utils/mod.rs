//! Utility functions and helpers
//!
//! This module contains display formatting for events and id generation.

pub mod format;
pub mod ids;

pub use format::{format_delay, format_params, row_text, type_label};
pub use ids::new_group_id;
