//! Shared editing session
//!
//! The editor itself is single-writer. A host that also runs playback or
//! recording on another thread shares it through [`SharedEditor`]: readers
//! take the lock briefly, and edits are refused while a [`PlaybackGuard`] is
//! alive.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::editor::MacroEditor;
use crate::error::{EditorError, EditorResult};

/// Cloneable handle to one editor
#[derive(Debug, Clone, Default)]
pub struct SharedEditor {
    editor: Arc<RwLock<MacroEditor>>,
    busy: Arc<AtomicBool>,
}

impl SharedEditor {
    pub fn new(editor: MacroEditor) -> Self {
        Self {
            editor: Arc::new(RwLock::new(editor)),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Run `f` with shared access; allowed during playback
    pub fn read<R>(&self, f: impl FnOnce(&MacroEditor) -> R) -> R {
        f(&*self.editor.read())
    }

    /// Run `f` with exclusive access, or fail with `Busy` while playback or
    /// recording holds the session
    pub fn edit<R>(&self, f: impl FnOnce(&mut MacroEditor) -> R) -> EditorResult<R> {
        let mut editor = self.editor.write();
        if self.is_busy() {
            warn!("edit rejected while playback is active");
            return Err(EditorError::Busy);
        }
        Ok(f(&mut *editor))
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Mark the session busy until the returned guard is dropped.
    ///
    /// Returns `Busy` if another guard is already alive.
    pub fn begin_playback(&self) -> EditorResult<PlaybackGuard> {
        // waits for an in-flight edit to finish
        let _editor = self.editor.write();
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(EditorError::Busy);
        }
        debug!("playback started, editing locked");
        Ok(PlaybackGuard {
            busy: Arc::clone(&self.busy),
        })
    }

    /// Unwrap the editor when this is the last handle
    pub fn try_into_inner(self) -> Result<MacroEditor, Self> {
        let busy = self.busy;
        Arc::try_unwrap(self.editor)
            .map(RwLock::into_inner)
            .map_err(|editor| Self { editor, busy })
    }
}

/// Keeps the session read-only while alive
#[derive(Debug)]
pub struct PlaybackGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for PlaybackGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
        debug!("playback finished, editing unlocked");
    }
}
