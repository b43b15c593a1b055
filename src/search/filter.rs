//! Event list filtering by category and free text

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{Event, EventType};
use crate::utils::format::row_text;

/// Filter buckets shown as checkboxes above the event list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventCategory {
    Moves,
    Clicks,
    Scroll,
    Keyboard,
    ControlFlow,
    Text,
}

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Moves,
        EventCategory::Clicks,
        EventCategory::Scroll,
        EventCategory::Keyboard,
        EventCategory::ControlFlow,
        EventCategory::Text,
    ];
}

pub fn category_of(event_type: EventType) -> EventCategory {
    match event_type {
        EventType::CursorMove => EventCategory::Moves,
        EventType::LeftClick | EventType::RightClick | EventType::MiddleClick => {
            EventCategory::Clicks
        }
        EventType::Scroll => EventCategory::Scroll,
        EventType::KeyboardKey => EventCategory::Keyboard,
        EventType::TypeText => EventCategory::Text,
        EventType::Wait
        | EventType::Goto
        | EventType::Repeat
        | EventType::LoopStart
        | EventType::LoopEnd
        | EventType::Delay => EventCategory::ControlFlow,
    }
}

/// An event passes when its category is allowed and, if `search` is not
/// empty, its rendered row contains `search` (case-insensitive).
pub fn matches_filter(
    index: usize,
    event: &Event,
    categories: &HashSet<EventCategory>,
    search: &str,
) -> bool {
    if !categories.contains(&category_of(event.event_type())) {
        return false;
    }
    let search = search.trim().to_lowercase();
    if search.is_empty() {
        return true;
    }
    row_text(index, event).to_lowercase().contains(&search)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_a_category() {
        let covered: HashSet<EventCategory> =
            EventType::ALL.iter().map(|t| category_of(*t)).collect();
        assert_eq!(covered.len(), EventCategory::ALL.len());
    }

    #[test]
    fn test_category_and_text() {
        let all: HashSet<EventCategory> = EventCategory::ALL.into_iter().collect();
        let only_keys: HashSet<EventCategory> = [EventCategory::Keyboard].into_iter().collect();
        let event = Event::key("Key.space", true);

        assert!(matches_filter(0, &event, &all, ""));
        assert!(matches_filter(0, &event, &only_keys, "SPACE"));
        assert!(!matches_filter(0, &event, &only_keys, "release"));
        assert!(!matches_filter(0, &Event::cursor_move(1, 1), &only_keys, ""));
    }
}
