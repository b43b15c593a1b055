//! Label and jump-target validation
//!
//! Labels name jump targets for control-flow events, so every non-empty label
//! must be unique and must not shadow one of the reserved targets.

mod labels;

pub use labels::{
    dangling_targets, is_reserved_label, normalize_text, validate_label, RESERVED_LABELS,
};
