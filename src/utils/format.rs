//! Human-readable rendering of events
//!
//! These strings are what an event list shows per row, and what the text
//! filter searches in.

use crate::types::{Event, EventKind, EventType};

/// Display name of an event type
pub fn type_label(event_type: EventType) -> &'static str {
    match event_type {
        EventType::CursorMove => "Cursor Move",
        EventType::LeftClick => "Left Click",
        EventType::RightClick => "Right Click",
        EventType::MiddleClick => "Middle Click",
        EventType::Scroll => "Scroll",
        EventType::KeyboardKey => "Keyboard",
        EventType::Wait => "Wait",
        EventType::Goto => "Go To",
        EventType::Repeat => "Repeat",
        EventType::LoopStart => "Loop Start",
        EventType::LoopEnd => "Loop End",
        EventType::Delay => "Delay",
        EventType::TypeText => "Type Text",
    }
}

fn press_word(pressed: bool) -> &'static str {
    if pressed {
        "Press"
    } else {
        "Release"
    }
}

/// `Key.enter` style names are shown as `Enter`
fn display_key(key: &str) -> String {
    match key.strip_prefix("Key.") {
        Some(rest) => {
            let mut chars = rest.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        }
        None if key.is_empty() => "?".to_string(),
        None => key.to_string(),
    }
}

/// Type-specific parameters of an event as a short string
pub fn format_params(event: &Event) -> String {
    match &event.kind {
        EventKind::CursorMove { x, y } => format!("({}, {})", x, y),
        EventKind::LeftClick { x, y, pressed }
        | EventKind::RightClick { x, y, pressed }
        | EventKind::MiddleClick { x, y, pressed } => {
            format!("({}, {}) {}", x, y, press_word(*pressed))
        }
        EventKind::Scroll { dx, dy } => format!("dx={}, dy={}", dx, dy),
        EventKind::KeyboardKey { key, pressed } => {
            format!("{} {}", display_key(key), press_word(*pressed))
        }
        EventKind::Wait {
            delay,
            timeout_label,
        } => match (delay, timeout_label) {
            (Some(d), Some(label)) => format!("{:.3}s, timeout -> {}", d, label),
            (Some(d), None) => format!("{:.3}s", d),
            (None, Some(label)) => format!("timeout -> {}", label),
            (None, None) => String::new(),
        },
        EventKind::Goto { target_label } => {
            format!("-> {}", target_label.as_deref().unwrap_or("?"))
        }
        EventKind::Repeat {
            target_label,
            count,
        } => format!("-> {} x{}", target_label.as_deref().unwrap_or("?"), count),
        EventKind::LoopStart { count } => format!("x{}", count),
        EventKind::LoopEnd | EventKind::Delay => String::new(),
        EventKind::TypeText { text } => format!("\"{}\"", text),
    }
}

/// Delay column, three decimals
pub fn format_delay(event: &Event) -> String {
    format!("{:.3}", event.timestamp())
}

/// Full list row: 1-based position, type, parameters, delay
pub fn row_text(index: usize, event: &Event) -> String {
    format!(
        "{} {} {} {}",
        index + 1,
        type_label(event.event_type()),
        format_params(event),
        format_delay(event)
    )
}
