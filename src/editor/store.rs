//! Event list operations: insert, delete, move, field updates

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{EditorError, EditorResult};
use crate::types::Event;
use crate::validation::{is_reserved_label, normalize_text, validate_label};

use super::MacroEditor;

/// Make an incoming event safe to place in the store.
///
/// A label that is blank, reserved or already used is dropped, as is a
/// group id that names no existing group.
pub(super) fn sanitize_incoming(editor: &MacroEditor, event: &mut Event) {
    if let Some(raw) = event.meta.label.take() {
        match normalize_text(&raw) {
            Some(label) if is_reserved_label(&label) => {
                warn!(label = %label, "dropping reserved label from inserted event");
            }
            Some(label) if editor.events.iter().any(|e| e.label() == Some(label.as_str())) => {
                warn!(label = %label, "dropping duplicate label from inserted event");
            }
            Some(label) => event.meta.label = Some(label),
            None => {}
        }
    }

    if let Some(group_id) = event.meta.group_id.take() {
        if editor.groups.contains_key(&group_id) {
            event.meta.group_id = Some(group_id);
        } else {
            warn!(group_id = %group_id, "dropping reference to unknown group");
        }
    }
}

/// Insert without raising the signal; returns the index used
pub(super) fn insert_raw(editor: &mut MacroEditor, index: usize, mut event: Event) -> usize {
    sanitize_incoming(editor, &mut event);
    let index = index.min(editor.events.len());
    editor.events.insert(index, event);
    index
}

/// Insert `event` at `index` (clamped to append), shifting later events right
pub fn insert(editor: &mut MacroEditor, index: usize, event: Event) -> usize {
    let index = insert_raw(editor, index, event);
    debug!(index, len = editor.events.len(), "event inserted");
    editor.mark_unsaved();
    index
}

/// Insert after `anchor`, or append when there is none
pub fn insert_after(editor: &mut MacroEditor, anchor: Option<usize>, event: Event) -> usize {
    let index = match anchor {
        Some(i) if i < editor.events.len() => i + 1,
        _ => editor.events.len(),
    };
    insert(editor, index, event)
}

/// Remove every listed index; out-of-range and repeated indices are ignored
pub fn delete(editor: &mut MacroEditor, indices: &[usize]) -> usize {
    let unique: BTreeSet<usize> = indices.iter().copied().collect();
    let mut removed = 0;
    for &i in unique.iter().rev() {
        if i < editor.events.len() {
            editor.events.remove(i);
            removed += 1;
        }
    }

    if removed > 0 {
        debug!(removed, len = editor.events.len(), "events deleted");
        editor.mark_unsaved();
    }
    removed
}

/// Relocate one event. `to` is clamped into the list; `from` out of range
/// or equal to `to` does nothing.
pub fn move_event(editor: &mut MacroEditor, from: usize, to: usize) -> bool {
    let len = editor.events.len();
    if from == to || from >= len {
        return false;
    }
    let to = to.min(len - 1);
    if from == to {
        return false;
    }

    let event = editor.events.remove(from);
    editor.events.insert(to, event);
    debug!(from, to, "event moved");
    editor.mark_unsaved();
    true
}

fn selection(editor: &MacroEditor, indices: &[usize]) -> Vec<usize> {
    let unique: BTreeSet<usize> = indices
        .iter()
        .copied()
        .filter(|&i| i < editor.events.len())
        .collect();
    unique.into_iter().collect()
}

/// Shift the selected events up by one. Does nothing if the selection
/// includes the first event. Returns the new positions.
pub fn move_up(editor: &mut MacroEditor, indices: &[usize]) -> Vec<usize> {
    let selected = selection(editor, indices);
    if selected.is_empty() || selected[0] == 0 {
        return selected;
    }
    for &i in &selected {
        editor.events.swap(i - 1, i);
    }
    editor.mark_unsaved();
    selected.into_iter().map(|i| i - 1).collect()
}

/// Shift the selected events down by one. Does nothing if the selection
/// includes the last event. Returns the new positions.
pub fn move_down(editor: &mut MacroEditor, indices: &[usize]) -> Vec<usize> {
    let selected = selection(editor, indices);
    let last = editor.events.len().saturating_sub(1);
    if selected.is_empty() || selected[selected.len() - 1] >= last {
        return selected;
    }
    for &i in selected.iter().rev() {
        editor.events.swap(i, i + 1);
    }
    editor.mark_unsaved();
    selected.into_iter().map(|i| i + 1).collect()
}

/// Apply one field write to `event`, which will live at `index`.
/// Labels go through the same checks as `set_label`; a group id must name
/// an existing group.
pub(super) fn apply_field(
    editor: &MacroEditor,
    index: usize,
    event: &mut Event,
    field: &str,
    value: Value,
) -> EditorResult<()> {
    match field {
        "label" => {
            let label = match value {
                Value::Null => None,
                Value::String(text) => {
                    validate_label(&editor.events, &text, Some(index))?;
                    normalize_text(&text)
                }
                _ => return Err(EditorError::invalid_field(field, "expected a string")),
            };
            event.meta.label = label;
            Ok(())
        }
        "groupId" | "group_id" => {
            event.meta.group_id = match value {
                Value::Null => None,
                Value::String(id) if editor.groups.contains_key(&id) => Some(id),
                Value::String(id) => {
                    return Err(EditorError::invalid_field(
                        field,
                        format!("no group with id '{}'", id),
                    ))
                }
                _ => return Err(EditorError::invalid_field(field, "expected a string")),
            };
            Ok(())
        }
        _ => event.set_field(field, value),
    }
}

fn check_index(editor: &MacroEditor, index: usize) -> EditorResult<()> {
    if index < editor.events.len() {
        Ok(())
    } else {
        Err(EditorError::IndexOutOfRange {
            index,
            len: editor.events.len(),
        })
    }
}

/// Set one field on the event at `index`
pub fn update_field(
    editor: &mut MacroEditor,
    index: usize,
    field: &str,
    value: Value,
) -> EditorResult<()> {
    check_index(editor, index)?;
    let mut event = editor.events[index].clone();
    apply_field(editor, index, &mut event, field, value)?;
    editor.events[index] = event;
    debug!(index, field, "event field updated");
    editor.mark_unsaved();
    Ok(())
}

/// Merge several fields into the event at `index`; nothing is written
/// unless every field is accepted
pub fn update_fields(
    editor: &mut MacroEditor,
    index: usize,
    fields: Map<String, Value>,
) -> EditorResult<()> {
    check_index(editor, index)?;
    let mut event = editor.events[index].clone();
    for (field, value) in fields {
        apply_field(editor, index, &mut event, &field, value)?;
    }
    editor.events[index] = event;
    debug!(index, "event fields updated");
    editor.mark_unsaved();
    Ok(())
}

/// Enable or disable the listed events; returns how many were touched
pub fn set_enabled(editor: &mut MacroEditor, indices: &[usize], enabled: bool) -> usize {
    let selected = selection(editor, indices);
    for &i in &selected {
        editor.events[i].set_enabled(enabled);
    }
    if !selected.is_empty() {
        editor.mark_unsaved();
    }
    selected.len()
}

/// Surround `events[start..=end]` with a loop of `count` iterations
pub fn wrap_in_loop(editor: &mut MacroEditor, start: usize, end: usize, count: u32) -> bool {
    let len = editor.events.len();
    if start > end || start >= len {
        return false;
    }
    let end = end.min(len - 1);

    // end marker first so `start` stays valid
    editor
        .events
        .insert(end + 1, Event::loop_end().with_timestamp(0.0));
    editor
        .events
        .insert(start, Event::loop_start(count).with_timestamp(0.0));
    debug!(start, end, count, "wrapped in loop");
    editor.mark_unsaved();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventKind, EventType};
    use serde_json::json;

    fn editor_with(n: i32) -> MacroEditor {
        let mut editor = MacroEditor::new();
        for i in 0..n {
            editor.events.push(Event::cursor_move(i, 0));
        }
        editor
    }

    fn xs(editor: &MacroEditor) -> Vec<i32> {
        editor
            .events
            .iter()
            .map(|e| e.position().map(|p| p.0).unwrap_or(-1))
            .collect()
    }

    #[test]
    fn test_insert_clamps_and_signals() {
        let mut editor = editor_with(2);
        assert_eq!(insert(&mut editor, 99, Event::cursor_move(9, 0)), 2);
        assert_eq!(insert(&mut editor, 0, Event::cursor_move(-5, 0)), 0);
        assert_eq!(xs(&editor), vec![-5, 0, 1, 9]);
        assert_eq!(editor.revision(), 2);
    }

    #[test]
    fn test_insert_drops_conflicting_metadata() {
        let mut editor = editor_with(1);
        editor.events[0].meta.label = Some("A".to_string());
        insert(&mut editor, 1, Event::key("x", true).with_label("A"));
        insert(&mut editor, 2, Event::key("y", true).with_label("Next"));
        let mut grouped = Event::key("z", true).with_label("  B ");
        grouped.meta.group_id = Some("nope".to_string());
        insert(&mut editor, 3, grouped);

        assert_eq!(editor.events[1].label(), None);
        assert_eq!(editor.events[2].label(), None);
        assert_eq!(editor.events[3].label(), Some("B"));
        assert_eq!(editor.events[3].group_id(), None);
    }

    #[test]
    fn test_insert_after() {
        let mut editor = editor_with(3);
        assert_eq!(insert_after(&mut editor, Some(0), Event::cursor_move(7, 0)), 1);
        assert_eq!(insert_after(&mut editor, None, Event::cursor_move(8, 0)), 4);
        assert_eq!(insert_after(&mut editor, Some(99), Event::cursor_move(9, 0)), 5);
        assert_eq!(xs(&editor), vec![0, 7, 1, 2, 8, 9]);
    }

    #[test]
    fn test_delete_ignores_bad_and_repeated_indices() {
        let mut editor = editor_with(5);
        assert_eq!(delete(&mut editor, &[3, 1, 1, 42]), 2);
        assert_eq!(xs(&editor), vec![0, 2, 4]);
        assert_eq!(editor.revision(), 1);

        assert_eq!(delete(&mut editor, &[10]), 0);
        assert_eq!(editor.revision(), 1);
    }

    #[test]
    fn test_move_event() {
        let mut editor = editor_with(4);
        assert!(move_event(&mut editor, 0, 2));
        assert_eq!(xs(&editor), vec![1, 2, 0, 3]);

        assert!(move_event(&mut editor, 1, 100));
        assert_eq!(xs(&editor), vec![1, 0, 3, 2]);

        assert!(!move_event(&mut editor, 2, 2));
        assert!(!move_event(&mut editor, 9, 0));
        assert!(!move_event(&mut editor, 3, 50));
        assert_eq!(editor.revision(), 2);
    }

    #[test]
    fn test_move_up_and_down() {
        let mut editor = editor_with(5);
        assert_eq!(move_up(&mut editor, &[3, 1]), vec![0, 2]);
        assert_eq!(xs(&editor), vec![1, 0, 3, 2, 4]);

        // selection touching the top stays put
        assert_eq!(move_up(&mut editor, &[0, 2]), vec![0, 2]);
        assert_eq!(xs(&editor), vec![1, 0, 3, 2, 4]);

        assert_eq!(move_down(&mut editor, &[2, 3]), vec![3, 4]);
        assert_eq!(xs(&editor), vec![1, 0, 4, 3, 2]);
        assert_eq!(move_down(&mut editor, &[4]), vec![4]);
    }

    #[test]
    fn test_update_field() {
        let mut editor = editor_with(2);
        update_field(&mut editor, 1, "y", json!(30)).unwrap();
        assert_eq!(editor.events[1].position(), Some((1, 30)));

        let err = update_field(&mut editor, 5, "y", json!(1)).unwrap_err();
        assert!(matches!(err, EditorError::IndexOutOfRange { index: 5, len: 2 }));
        assert_eq!(editor.revision(), 1);
    }

    #[test]
    fn test_update_label_field_is_validated() {
        let mut editor = editor_with(2);
        update_field(&mut editor, 0, "label", json!("A")).unwrap();
        assert!(update_field(&mut editor, 1, "label", json!("A")).is_err());
        assert!(update_field(&mut editor, 1, "label", json!("End")).is_err());
        update_field(&mut editor, 0, "label", Value::Null).unwrap();
        update_field(&mut editor, 1, "label", json!("A")).unwrap();
        assert_eq!(editor.events[1].label(), Some("A"));
    }

    #[test]
    fn test_update_group_id_must_name_a_group() {
        let mut editor = editor_with(2);
        let err = update_field(&mut editor, 0, "groupId", json!("ghost")).unwrap_err();
        assert!(matches!(err, EditorError::InvalidField { .. }));
        assert!(update_field(&mut editor, 0, "group_id", json!("ghost")).is_err());
        assert!(update_field(&mut editor, 0, "groupId", json!(7)).is_err());
        assert_eq!(editor.events[0].group_id(), None);
        assert_eq!(editor.revision(), 0);

        let id = editor.create_group(&[1], "G", None).unwrap();
        update_field(&mut editor, 0, "group_id", json!(id.clone())).unwrap();
        assert_eq!(editor.events[0].group_id(), Some(id.as_str()));

        update_field(&mut editor, 0, "groupId", Value::Null).unwrap();
        assert_eq!(editor.events[0].group_id(), None);
    }

    #[test]
    fn test_update_fields_is_all_or_nothing() {
        let mut editor = editor_with(1);
        let mut fields = Map::new();
        fields.insert("x".to_string(), json!(50));
        fields.insert("y".to_string(), json!("bad"));
        assert!(update_fields(&mut editor, 0, fields).is_err());
        assert_eq!(editor.events[0].position(), Some((0, 0)));

        let mut fields = Map::new();
        fields.insert("x".to_string(), json!(50));
        fields.insert("note".to_string(), json!("free"));
        update_fields(&mut editor, 0, fields).unwrap();
        assert_eq!(editor.events[0].position(), Some((50, 0)));
        assert_eq!(editor.events[0].field("note"), Some(json!("free")));
    }

    #[test]
    fn test_set_enabled() {
        let mut editor = editor_with(3);
        assert_eq!(set_enabled(&mut editor, &[0, 2, 7], false), 2);
        assert!(!editor.events[0].is_enabled());
        assert!(editor.events[1].is_enabled());
    }

    #[test]
    fn test_wrap_in_loop() {
        let mut editor = editor_with(4);
        assert!(wrap_in_loop(&mut editor, 1, 2, 3));
        let types: Vec<EventType> = editor.events.iter().map(Event::event_type).collect();
        assert_eq!(
            types,
            vec![
                EventType::CursorMove,
                EventType::LoopStart,
                EventType::CursorMove,
                EventType::CursorMove,
                EventType::LoopEnd,
                EventType::CursorMove,
            ]
        );
        assert_eq!(editor.events[1].kind, EventKind::LoopStart { count: 3 });
        assert!(!wrap_in_loop(&mut editor, 3, 1, 2));
    }
}
