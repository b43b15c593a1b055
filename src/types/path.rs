//! Mouse-path display items and statistics

use serde::{Deserialize, Serialize};

/// A maximal run of two or more consecutive cursor moves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRun {
    pub start: usize,
    /// Inclusive
    pub end: usize,
    pub count: usize,
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
    pub total_time: f64,
}

/// One entry of the run partition over the event list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RunItem {
    Single { index: usize },
    Group(MoveRun),
}

impl RunItem {
    /// Inclusive index range covered by this item
    pub fn span(&self) -> (usize, usize) {
        match self {
            RunItem::Single { index } => (*index, *index),
            RunItem::Group(run) => (run.start, run.end),
        }
    }
}

/// Statistics for a cursor path segment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStats {
    pub total_moves: usize,
    pub total_distance: f64,
    pub total_time: f64,
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
}
