//! Macro Editor
//!
//! The in-memory editing core of an input-macro recorder: an ordered list of
//! recorded events (mouse moves, clicks, scrolls, keys, control-flow markers)
//! and the operations a front end uses to edit it safely.
//!
//! # Features
//!
//! - **Event store**: insert, delete, move, field updates, loops
//! - **Labels**: unique jump targets with reserved names
//! - **Groups**: named, colored event groups
//! - **Clipboard**: independent copy/paste snapshots
//! - **Search**: field find/replace and category filters
//! - **Mouse paths**: run detection, statistics, time rescaling and
//!   Ramer-Douglas-Peucker simplification
//!
//! # Modules
//!
//! - `types`: Event model and document
//! - `editor`: The editing engine
//! - `session`: Thread-shared editor with a playback lock
//! - `simplify`: Path simplification algorithms
//! - `search`: Field matching, filters and the label index
//! - `validation`: Label rules
//! - `utils`: Display formatting and ids
//! - `config`: Editor settings
//!
//! # Example
//!
//! ```
//! use macro_editor::{Event, MacroEditor};
//!
//! let mut editor = MacroEditor::new();
//! for x in 0..5 {
//!     editor.insert(usize::MAX, Event::cursor_move(x * 10, 0).with_timestamp(0.01));
//! }
//! editor.set_label(0, "Begin").unwrap();
//!
//! let removed = editor.simplify_path(0, 4, 1.0);
//! assert_eq!(removed, 3);
//! assert_eq!(editor.find_by_label("Begin"), Some(0));
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod search;
pub mod session;
pub mod simplify;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use config::EditorConfig;
pub use editor::{MacroEditor, MutationSignal};
pub use error::{EditorError, EditorResult};
pub use search::{EventCategory, LabelIndex};
pub use session::{PlaybackGuard, SharedEditor};
pub use types::{
    Event, EventKind, EventMeta, EventType, Group, GroupTable, GroupUpdate, MacroDocument,
    MouseButton, MoveRun, PathStats, RunItem,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
