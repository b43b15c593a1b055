//! Label rules

use crate::error::{EditorError, EditorResult};
use crate::types::Event;

/// Jump targets the playback engine resolves itself
pub const RESERVED_LABELS: &[&str] = &["Start", "End", "Next"];

pub fn is_reserved_label(label: &str) -> bool {
    RESERVED_LABELS.contains(&label)
}

/// Trim user text; blank means "no value"
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Check whether `label` may be placed on an event.
///
/// A blank label is always valid (it means "no label"). The event at
/// `exclude_index` is skipped in the uniqueness check so an event can keep
/// its own label.
pub fn validate_label(events: &[Event], label: &str, exclude_index: Option<usize>) -> EditorResult<()> {
    let Some(label) = normalize_text(label) else {
        return Ok(());
    };

    if is_reserved_label(&label) {
        return Err(EditorError::ReservedLabel(label));
    }

    let conflict = events
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != exclude_index)
        .find(|(_, event)| event.label() == Some(label.as_str()));

    match conflict {
        Some((i, _)) => Err(EditorError::DuplicateLabel {
            label,
            position: i + 1,
        }),
        None => Ok(()),
    }
}

/// Jump targets (`targetLabel`, `timeoutLabel`) naming a label no event carries
pub fn dangling_targets(events: &[Event]) -> Vec<(usize, String)> {
    let mut dangling = Vec::new();
    for (i, event) in events.iter().enumerate() {
        for target in event.kind.jump_targets() {
            if target.is_empty() || is_reserved_label(target) {
                continue;
            }
            if !events.iter().any(|e| e.label() == Some(target)) {
                dangling.push((i, target.to_string()));
            }
        }
    }
    dangling
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Event> {
        vec![
            Event::cursor_move(0, 0).with_label("Begin"),
            Event::cursor_move(1, 1),
            Event::goto("Begin"),
            Event::goto("Missing"),
            Event::goto("End"),
        ]
    }

    #[test]
    fn test_blank_label_is_valid() {
        assert!(validate_label(&sample(), "", None).is_ok());
        assert!(validate_label(&sample(), "   ", None).is_ok());
    }

    #[test]
    fn test_reserved_labels_rejected() {
        for name in RESERVED_LABELS {
            let err = validate_label(&sample(), name, None).unwrap_err();
            assert!(matches!(err, EditorError::ReservedLabel(_)));
        }
        // only exact names are reserved
        assert!(validate_label(&sample(), "start", None).is_ok());
    }

    #[test]
    fn test_duplicate_label_reports_position() {
        let err = validate_label(&sample(), " Begin ", Some(1)).unwrap_err();
        assert_eq!(err.to_string(), "Label 'Begin' already exists on event #1");
    }

    #[test]
    fn test_own_label_is_excluded() {
        assert!(validate_label(&sample(), "Begin", Some(0)).is_ok());
    }

    #[test]
    fn test_dangling_targets() {
        assert_eq!(dangling_targets(&sample()), vec![(3, "Missing".to_string())]);
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  a b  "), Some("a b".to_string()));
        assert_eq!(normalize_text("\n\t"), None);
    }
}
