//! Macro Editor - Core editing engine
//!
//! This module contains the editor that owns a macro's event list and group
//! table, with store, label, comment, group, clipboard, search and path
//! operations. All operations address events by index; an index is only
//! valid until the next insert, delete, move or paste.

mod clipboard;
mod comments;
mod groups;
mod labels;
mod path;
mod search;
mod signal;
mod store;

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::warn;

use crate::config::EditorConfig;
use crate::error::EditorResult;
use crate::search::{EventCategory, LabelIndex};
use crate::types::{Event, Group, GroupTable, GroupUpdate, MacroDocument, PathStats, RunItem};

pub use signal::MutationSignal;

/// Editing session over one macro document
#[derive(Debug, Default)]
pub struct MacroEditor {
    pub(crate) events: Vec<Event>,
    pub(crate) groups: GroupTable,
    pub(crate) clipboard: Vec<Event>,
    pub(crate) signal: MutationSignal,
    pub(crate) config: EditorConfig,
}

impl MacroEditor {
    /// Create an editor over an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor with explicit configuration
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Take ownership of a loaded document.
    ///
    /// The document is kept exactly as loaded; label conflicts in it are only
    /// reported.
    pub fn from_document(document: MacroDocument) -> Self {
        Self::from_document_with_config(document, EditorConfig::default())
    }

    pub fn from_document_with_config(document: MacroDocument, config: EditorConfig) -> Self {
        let mut seen = HashSet::new();
        for (i, event) in document.events.iter().enumerate() {
            if let Some(label) = event.label() {
                if !seen.insert(label) {
                    warn!(label, position = i + 1, "duplicate label in loaded document");
                }
            }
        }

        Self {
            events: document.events,
            groups: document.groups,
            clipboard: Vec::new(),
            signal: MutationSignal::new(),
            config,
        }
    }

    /// Snapshot of the current document for the persistence layer
    pub fn to_document(&self) -> MacroDocument {
        MacroDocument {
            events: self.events.clone(),
            groups: self.groups.clone(),
        }
    }

    pub fn into_document(self) -> MacroDocument {
        MacroDocument {
            events: self.events,
            groups: self.groups,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn signal(&self) -> &MutationSignal {
        &self.signal
    }

    /// Mutable access for subscribing listeners and clearing after a save
    pub fn signal_mut(&mut self) -> &mut MutationSignal {
        &mut self.signal
    }

    pub fn is_dirty(&self) -> bool {
        self.signal.is_dirty()
    }

    pub fn revision(&self) -> u64 {
        self.signal.revision()
    }

    pub fn mark_saved(&mut self) {
        self.signal.mark_saved();
    }

    pub(crate) fn mark_unsaved(&mut self) {
        self.signal.raise();
    }
}

// Operations live in submodules; these wrappers are the public surface
impl MacroEditor {
    // Store operations (from store.rs)
    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    pub fn insert(&mut self, index: usize, event: Event) -> usize {
        store::insert(self, index, event)
    }

    pub fn insert_after(&mut self, anchor: Option<usize>, event: Event) -> usize {
        store::insert_after(self, anchor, event)
    }

    pub fn delete(&mut self, indices: &[usize]) -> usize {
        store::delete(self, indices)
    }

    pub fn move_event(&mut self, from: usize, to: usize) -> bool {
        store::move_event(self, from, to)
    }

    pub fn move_up(&mut self, indices: &[usize]) -> Vec<usize> {
        store::move_up(self, indices)
    }

    pub fn move_down(&mut self, indices: &[usize]) -> Vec<usize> {
        store::move_down(self, indices)
    }

    pub fn update_field(&mut self, index: usize, field: &str, value: Value) -> EditorResult<()> {
        store::update_field(self, index, field, value)
    }

    pub fn update_fields(&mut self, index: usize, fields: Map<String, Value>) -> EditorResult<()> {
        store::update_fields(self, index, fields)
    }

    pub fn set_enabled(&mut self, indices: &[usize], enabled: bool) -> usize {
        store::set_enabled(self, indices, enabled)
    }

    pub fn wrap_in_loop(&mut self, start: usize, end: usize, count: u32) -> bool {
        store::wrap_in_loop(self, start, end, count)
    }

    // Labels (from labels.rs)
    pub fn all_labels(&self) -> Vec<String> {
        labels::all_labels(self)
    }

    pub fn find_by_label(&self, label: &str) -> Option<usize> {
        labels::find_by_label(self, label)
    }

    pub fn validate_label(&self, label: &str, exclude_index: Option<usize>) -> EditorResult<()> {
        labels::validate(self, label, exclude_index)
    }

    pub fn set_label(&mut self, index: usize, label: &str) -> EditorResult<()> {
        labels::set_label(self, index, label)
    }

    pub fn label_index(&self) -> LabelIndex {
        LabelIndex::from_events(&self.events)
    }

    pub fn resolve_label(&self, label: &str, current: usize) -> Option<usize> {
        labels::resolve_label(self, label, current)
    }

    pub fn dangling_targets(&self) -> Vec<(usize, String)> {
        labels::dangling_targets(self)
    }

    // Comments (from comments.rs)
    pub fn set_comment(&mut self, index: usize, text: &str) -> bool {
        comments::set_comment(self, index, text)
    }

    pub fn all_comments(&self) -> Vec<(usize, String)> {
        comments::all_comments(self)
    }

    // Groups (from groups.rs)
    pub fn create_group(
        &mut self,
        indices: &[usize],
        name: &str,
        color: Option<&str>,
    ) -> Option<String> {
        groups::create_group(self, indices, name, color)
    }

    pub fn delete_group(&mut self, id: &str) -> bool {
        groups::delete_group(self, id)
    }

    pub fn ungroup(&mut self, indices: &[usize]) -> usize {
        groups::ungroup(self, indices)
    }

    pub fn update_group(&mut self, id: &str, update: GroupUpdate) -> bool {
        groups::update_group(self, id, update)
    }

    pub fn group_members(&self, id: &str) -> Vec<usize> {
        groups::group_members(self, id)
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.get(id)
    }

    /// Groups in creation order; loaded groups keep their document order
    pub fn groups(&self) -> impl Iterator<Item = (&str, &Group)> {
        self.groups.iter()
    }

    pub fn group_of(&self, index: usize) -> Option<&str> {
        self.events.get(index).and_then(Event::group_id)
    }

    pub fn prune_empty_groups(&mut self) -> usize {
        groups::prune_empty_groups(self)
    }

    // Clipboard (from clipboard.rs)
    pub fn copy(&mut self, indices: &[usize]) -> usize {
        clipboard::copy(self, indices)
    }

    pub fn paste(&mut self, insert_index: usize) -> usize {
        clipboard::paste(self, insert_index)
    }

    pub fn has_clipboard(&self) -> bool {
        !self.clipboard.is_empty()
    }

    pub fn clipboard(&self) -> &[Event] {
        &self.clipboard
    }

    // Search and replace (from search.rs)
    pub fn find_by_field(&self, field: &str, value: &Value, case_sensitive: bool) -> Vec<usize> {
        search::find_by_field(self, field, value, case_sensitive)
    }

    pub fn replace_field(&mut self, indices: &[usize], field: &str, new_value: Value) -> usize {
        search::replace_field(self, indices, field, new_value)
    }

    pub fn filter_events(&self, categories: &HashSet<EventCategory>, text: &str) -> Vec<usize> {
        search::filter_events(self, categories, text)
    }

    // Mouse paths (from path.rs)
    pub fn cursor_move_runs(&self) -> Vec<RunItem> {
        path::cursor_move_runs(self)
    }

    pub fn path_stats(&self, start: usize, end: usize) -> Option<PathStats> {
        path::path_stats(self, start, end)
    }

    pub fn rescale_group_time(&mut self, start: usize, end: usize, new_total_time: f64) -> bool {
        path::rescale_group_time(self, start, end, new_total_time)
    }

    pub fn simplify_path(&mut self, start: usize, end: usize, tolerance: f64) -> usize {
        path::simplify_path(self, start, end, tolerance)
    }

    pub fn preview_simplify(&self, start: usize, end: usize, tolerance: f64) -> usize {
        path::preview_simplify(self, start, end, tolerance)
    }
}
