//! Error types for editor operations

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors reported by editing operations.
///
/// None of these are fatal: stale indices and bad input come back as values so
/// that a UI handler can call any operation speculatively.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("Invalid event index {index} (store has {len} events)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("'{0}' is a reserved label name")]
    ReservedLabel(String),

    /// `position` is 1-based, matching what the user sees in the event list.
    #[error("Label '{label}' already exists on event #{position}")]
    DuplicateLabel { label: String, position: usize },

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Field '{0}' cannot be changed")]
    ImmutableField(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Editing is disabled while playback or recording is active")]
    Busy,
}

impl EditorError {
    pub(crate) fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        EditorError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
