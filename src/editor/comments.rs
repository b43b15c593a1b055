//! Comment operations

use crate::validation::normalize_text;

use super::MacroEditor;

/// Set or clear (blank text) the comment of one event; false when the index
/// is out of range
pub fn set_comment(editor: &mut MacroEditor, index: usize, text: &str) -> bool {
    let Some(event) = editor.events.get_mut(index) else {
        return false;
    };
    event.meta.comment = normalize_text(text);
    editor.mark_unsaved();
    true
}

pub fn all_comments(editor: &MacroEditor) -> Vec<(usize, String)> {
    editor
        .events
        .iter()
        .enumerate()
        .filter_map(|(i, e)| e.comment().filter(|c| !c.is_empty()).map(|c| (i, c.to_string())))
        .collect()
}
