//! Label operations

use std::collections::HashSet;

use tracing::debug;

use crate::error::{EditorError, EditorResult};
use crate::search::LabelIndex;
use crate::validation::{self, normalize_text};

use super::MacroEditor;

/// Distinct non-blank labels in the order they first appear
pub fn all_labels(editor: &MacroEditor) -> Vec<String> {
    let mut seen = HashSet::new();
    editor
        .events
        .iter()
        .filter_map(|e| e.label())
        .filter(|label| !label.trim().is_empty())
        .filter(|label| seen.insert(*label))
        .map(str::to_string)
        .collect()
}

/// Index of the first event carrying `label`
pub fn find_by_label(editor: &MacroEditor, label: &str) -> Option<usize> {
    editor.events.iter().position(|e| e.label() == Some(label))
}

pub fn validate(editor: &MacroEditor, label: &str, exclude_index: Option<usize>) -> EditorResult<()> {
    validation::validate_label(&editor.events, label, exclude_index)
}

/// Set or clear (blank text) the label of one event
pub fn set_label(editor: &mut MacroEditor, index: usize, label: &str) -> EditorResult<()> {
    if index >= editor.events.len() {
        return Err(EditorError::IndexOutOfRange {
            index,
            len: editor.events.len(),
        });
    }
    validate(editor, label, Some(index))?;

    let label = normalize_text(label);
    debug!(index, label = ?label, "label set");
    editor.events[index].meta.label = label;
    editor.mark_unsaved();
    Ok(())
}

/// Where playback would continue for a jump to `label` from `current`
pub fn resolve_label(editor: &MacroEditor, label: &str, current: usize) -> Option<usize> {
    LabelIndex::from_events(&editor.events).resolve(label, current)
}

pub fn dangling_targets(editor: &MacroEditor) -> Vec<(usize, String)> {
    validation::dangling_targets(&editor.events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Event;

    fn editor() -> MacroEditor {
        let mut editor = MacroEditor::new();
        editor.events = vec![
            Event::cursor_move(0, 0),
            Event::cursor_move(1, 1),
            Event::goto("Loop"),
        ];
        editor
    }

    #[test]
    fn test_set_label_trims_and_clears() {
        let mut editor = editor();
        set_label(&mut editor, 1, "  Loop ").unwrap();
        assert_eq!(editor.events[1].label(), Some("Loop"));
        assert_eq!(find_by_label(&editor, "Loop"), Some(1));

        set_label(&mut editor, 1, "").unwrap();
        assert_eq!(editor.events[1].label(), None);
        assert_eq!(editor.revision(), 2);
    }

    #[test]
    fn test_set_label_failure_changes_nothing() {
        let mut editor = editor();
        set_label(&mut editor, 0, "Foo").unwrap();

        let err = set_label(&mut editor, 1, "Foo").unwrap_err();
        assert_eq!(err.to_string(), "Label 'Foo' already exists on event #1");
        assert!(set_label(&mut editor, 1, "Start").is_err());
        assert!(matches!(
            set_label(&mut editor, 9, "X"),
            Err(EditorError::IndexOutOfRange { .. })
        ));

        assert_eq!(editor.events[1].label(), None);
        assert_eq!(editor.revision(), 1);
    }

    #[test]
    fn test_relabel_same_event() {
        let mut editor = editor();
        set_label(&mut editor, 0, "Foo").unwrap();
        assert!(set_label(&mut editor, 0, "Foo").is_ok());
    }

    #[test]
    fn test_all_labels_in_order() {
        let mut editor = editor();
        set_label(&mut editor, 1, "B").unwrap();
        set_label(&mut editor, 0, "A").unwrap();
        assert_eq!(all_labels(&editor), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_all_labels_skips_blank_loaded_labels() {
        let document = crate::types::MacroDocument::from_json(
            r#"{"events": [
                {"type": "cursorMove", "x": 0, "y": 0, "label": ""},
                {"type": "cursorMove", "x": 1, "y": 1, "label": "  "},
                {"type": "goto", "targetLabel": "A", "label": "A"}
            ]}"#,
        )
        .unwrap();
        let editor = MacroEditor::from_document(document);
        assert_eq!(all_labels(&editor), vec!["A".to_string()]);
    }

    #[test]
    fn test_resolve_and_dangling() {
        let mut editor = editor();
        assert_eq!(dangling_targets(&editor), vec![(2, "Loop".to_string())]);

        set_label(&mut editor, 1, "Loop").unwrap();
        assert!(dangling_targets(&editor).is_empty());
        assert_eq!(resolve_label(&editor, "Loop", 2), Some(1));
        assert_eq!(resolve_label(&editor, "Start", 2), Some(0));
        assert_eq!(resolve_label(&editor, "Next", 2), Some(3));
        assert_eq!(resolve_label(&editor, "Nope", 2), None);
    }
}
