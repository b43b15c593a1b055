//! Find, replace and filter over the event list

use std::collections::{BTreeSet, HashSet};

use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, warn};

use crate::search::{field_matches, matches_filter, EventCategory};
use crate::types::Event;

use super::store::apply_field;
use super::MacroEditor;

fn event_matches(event: &Event, field: &str, value: &Value, case_sensitive: bool) -> bool {
    event
        .field(field)
        .is_some_and(|stored| field_matches(&stored, value, case_sensitive))
}

/// Indices of events whose `field` matches `value`; events without the
/// field never match
pub fn find_by_field(
    editor: &MacroEditor,
    field: &str,
    value: &Value,
    case_sensitive: bool,
) -> Vec<usize> {
    let events = &editor.events;
    if events.len() > editor.config.parallel_search_threshold {
        debug!(len = events.len(), field, "parallel field search");
        events
            .par_iter()
            .enumerate()
            .filter(|(_, e)| event_matches(e, field, value, case_sensitive))
            .map(|(i, _)| i)
            .collect()
    } else {
        events
            .iter()
            .enumerate()
            .filter(|(_, e)| event_matches(e, field, value, case_sensitive))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Set `field` on every listed event and return how many were written.
///
/// Events that reject the value (wrong type for a typed field, a label that
/// would collide) are skipped.
pub fn replace_field(
    editor: &mut MacroEditor,
    indices: &[usize],
    field: &str,
    new_value: Value,
) -> usize {
    let unique: BTreeSet<usize> = indices.iter().copied().collect();
    let mut written = 0;

    for i in unique {
        let Some(current) = editor.events.get(i) else {
            continue;
        };
        let mut event = current.clone();
        match apply_field(editor, i, &mut event, field, new_value.clone()) {
            Ok(()) => {
                editor.events[i] = event;
                written += 1;
            }
            Err(e) => warn!(index = i, field, error = %e, "replace skipped event"),
        }
    }

    if written > 0 {
        debug!(written, field, "field replaced");
        editor.mark_unsaved();
    }
    written
}

/// Indices passing the category and row-text filter
pub fn filter_events(
    editor: &MacroEditor,
    categories: &HashSet<EventCategory>,
    text: &str,
) -> Vec<usize> {
    editor
        .events
        .iter()
        .enumerate()
        .filter(|(i, e)| matches_filter(*i, e, categories, text))
        .map(|(i, _)| i)
        .collect()
}
