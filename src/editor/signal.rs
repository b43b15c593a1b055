//! Unsaved-changes signal
//!
//! Every mutating operation raises the signal. The owner of the document
//! clears it after a save; the editor never does.

use std::fmt;

type Listener = Box<dyn Fn(u64) + Send + Sync>;

/// Dirty flag plus a revision counter bumped on every mutation
#[derive(Default)]
pub struct MutationSignal {
    dirty: bool,
    revision: u64,
    listeners: Vec<Listener>,
}

impl MutationSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mutation and notify listeners with the new revision
    pub fn raise(&mut self) {
        self.dirty = true;
        self.revision += 1;
        for listener in &self.listeners {
            listener(self.revision);
        }
    }

    /// Whether anything changed since the last `mark_saved`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Incremented on every mutation; indices obtained at an older revision
    /// may be stale
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clear the dirty flag after the document was persisted
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Call `listener` with the new revision after every mutation
    pub fn subscribe(&mut self, listener: impl Fn(u64) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl fmt::Debug for MutationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationSignal")
            .field("dirty", &self.dirty)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
