//! Event grouping

use std::collections::HashSet;

use tracing::{debug, info};

use crate::types::{Group, GroupUpdate};
use crate::utils::new_group_id;

use super::MacroEditor;

/// Create a group over `indices` and return its id.
///
/// Out-of-range indices are skipped. A blank name falls back to the
/// configured default.
pub fn create_group(
    editor: &mut MacroEditor,
    indices: &[usize],
    name: &str,
    color: Option<&str>,
) -> Option<String> {
    if indices.is_empty() {
        return None;
    }

    let id = new_group_id();
    let name = match name.trim() {
        "" => editor.config.default_group_name.clone(),
        trimmed => trimmed.to_string(),
    };
    let color = color.map(str::trim).filter(|c| !c.is_empty()).map(str::to_string);

    let mut members = 0;
    for &i in indices {
        if let Some(event) = editor.events.get_mut(i) {
            event.meta.group_id = Some(id.clone());
            members += 1;
        }
    }

    info!(group_id = %id, name = %name, members, "group created");
    editor.groups.insert(id.clone(), Group::new(name, color));
    editor.mark_unsaved();
    Some(id)
}

/// Remove a group and every reference to it; events are otherwise untouched
pub fn delete_group(editor: &mut MacroEditor, id: &str) -> bool {
    if editor.groups.remove(id).is_none() {
        return false;
    }
    for event in editor.events.iter_mut() {
        if event.group_id() == Some(id) {
            event.meta.group_id = None;
        }
    }
    info!(group_id = %id, "group deleted");
    editor.mark_unsaved();
    true
}

/// Clear group membership on the given events. Group records are kept even
/// when they end up empty.
pub fn ungroup(editor: &mut MacroEditor, indices: &[usize]) -> usize {
    let unique: HashSet<usize> = indices.iter().copied().collect();
    let mut cleared = 0;
    for i in unique {
        if let Some(event) = editor.events.get_mut(i) {
            if event.meta.group_id.take().is_some() {
                cleared += 1;
            }
        }
    }
    if cleared > 0 {
        debug!(cleared, "events ungrouped");
        editor.mark_unsaved();
    }
    cleared
}

pub fn update_group(editor: &mut MacroEditor, id: &str, update: GroupUpdate) -> bool {
    let Some(group) = editor.groups.get_mut(id) else {
        return false;
    };
    if update.is_empty() {
        return true;
    }

    if let Some(name) = update.name {
        group.name = name;
    }
    if let Some(color) = update.color {
        group.color = Some(color);
    }
    if let Some(collapsed) = update.collapsed {
        group.collapsed = collapsed;
    }
    editor.mark_unsaved();
    true
}

/// Member indices in store order
pub fn group_members(editor: &MacroEditor, id: &str) -> Vec<usize> {
    editor
        .events
        .iter()
        .enumerate()
        .filter(|(_, e)| e.group_id() == Some(id))
        .map(|(i, _)| i)
        .collect()
}

/// Drop group records no event refers to
pub fn prune_empty_groups(editor: &mut MacroEditor) -> usize {
    let used: HashSet<&str> = editor.events.iter().filter_map(|e| e.group_id()).collect();
    let before = editor.groups.len();
    editor.groups.retain(|id, _| used.contains(id));
    let pruned = before - editor.groups.len();
    if pruned > 0 {
        debug!(pruned, "empty groups removed");
        editor.mark_unsaved();
    }
    pruned
}
