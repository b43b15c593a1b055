//! Macro document container type

use serde::{Deserialize, Serialize};

use super::{Event, GroupTable};
use crate::error::EditorResult;

/// Ordered events plus the group table, as handed over by the persistence layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroDocument {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default, skip_serializing_if = "GroupTable::is_empty")]
    pub groups: GroupTable,
}

impl MacroDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document holding the given events and no groups
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events,
            groups: GroupTable::new(),
        }
    }

    pub fn from_json(json: &str) -> EditorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> EditorResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> EditorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
