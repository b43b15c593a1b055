//! Copy and paste

use std::collections::BTreeSet;

use tracing::debug;

use super::store::insert_raw;
use super::MacroEditor;

/// Replace the clipboard with snapshots of the given events, in store order.
/// Returns how many were copied.
pub fn copy(editor: &mut MacroEditor, indices: &[usize]) -> usize {
    let unique: BTreeSet<usize> = indices.iter().copied().collect();
    editor.clipboard = unique
        .into_iter()
        .filter_map(|i| editor.events.get(i).cloned())
        .collect();
    debug!(count = editor.clipboard.len(), "events copied");
    editor.clipboard.len()
}

/// Insert fresh copies of the clipboard starting at `insert_index`.
///
/// The clipboard is left intact so it can be pasted again. Pasted events
/// lose labels that would collide with existing ones.
pub fn paste(editor: &mut MacroEditor, insert_index: usize) -> usize {
    if editor.clipboard.is_empty() {
        return 0;
    }

    let mut at = insert_index.min(editor.events.len());
    let snapshot = editor.clipboard.clone();
    let count = snapshot.len();
    for event in snapshot {
        at = insert_raw(editor, at, event) + 1;
    }

    debug!(count, insert_index, "events pasted");
    editor.mark_unsaved();
    count
}
