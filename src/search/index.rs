//! Label index for jump resolution
//!
//! A secondary map from label to event index, rebuilt from the event list.
//! Like every index handed out by the editor it is only valid until the next
//! structural mutation.

use std::collections::HashMap;

use crate::types::Event;

/// label -> first event index carrying it
#[derive(Debug, Default, Clone)]
pub struct LabelIndex {
    positions: HashMap<String, usize>,
    /// Labels in first-occurrence order
    order: Vec<String>,
    event_count: usize,
}

impl LabelIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from an event list
    pub fn from_events(events: &[Event]) -> Self {
        let mut index = Self::new();
        index.rebuild(events);
        index
    }

    /// Rebuild the entire index from scratch
    pub fn rebuild(&mut self, events: &[Event]) {
        self.positions.clear();
        self.order.clear();

        for (i, event) in events.iter().enumerate() {
            if let Some(label) = event.label().filter(|l| !l.is_empty()) {
                if !self.positions.contains_key(label) {
                    self.positions.insert(label.to_string(), i);
                    self.order.push(label.to_string());
                }
            }
        }

        self.event_count = events.len();
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.positions.contains_key(label)
    }

    /// Labels in first-occurrence order
    pub fn labels(&self) -> &[String] {
        &self.order
    }

    /// Resolve a jump target from the event at `current`.
    ///
    /// `Start` is the first event, `End` is one past the last (playback
    /// stops), `Next` is the following event.
    pub fn resolve(&self, label: &str, current: usize) -> Option<usize> {
        match label {
            "Start" => Some(0),
            "End" => Some(self.event_count),
            "Next" => Some((current + 1).min(self.event_count)),
            _ => self.get(label),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
