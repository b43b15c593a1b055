//! Data types for the macro editor
//!
//! This module contains the event model and the value types returned by
//! editing and analysis operations.

mod document;
mod event;
mod group;
mod path;

pub use document::MacroDocument;
pub use event::{Event, EventKind, EventMeta, EventType, MouseButton};
pub use group::{Group, GroupTable, GroupUpdate};
pub use path::{MoveRun, PathStats, RunItem};
