//! Best-effort draft persistence
//!
//! The in-progress answer set is written out after every mutation and read
//! back once at session start. Persistence failures must never take the
//! session down: every operation returns a Result the caller is allowed to
//! ignore, and an unreadable or corrupt draft loads as `None`.

use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing::{debug, warn};

use crate::answers::AnswerSet;

/// Errors from draft storage; callers typically log and move on
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("draft io: {0}")]
    Io(#[from] std::io::Error),

    #[error("draft encode: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key-value slot holding the serialized answer set
///
/// Injected so tests (and the non-interactive CLI) can substitute an
/// in-memory fake for the on-disk store.
pub trait DraftStore: Send {
    /// Load the saved draft, if any; corruption reads as `None`
    fn load(&self) -> Result<Option<AnswerSet>, DraftError>;

    /// Persist the current answers
    fn save(&self, answers: &AnswerSet) -> Result<(), DraftError>;

    /// Delete the saved draft
    fn clear(&self) -> Result<(), DraftError>;
}

/// Draft stored as a single JSON file
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!(?path, "FileDraftStore::new");
        Self { path }
    }
}

impl DraftStore for FileDraftStore {
    fn load(&self) -> Result<Option<AnswerSet>, DraftError> {
        if !self.path.exists() {
            debug!(path = ?self.path, "FileDraftStore::load: no draft");
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<AnswerSet>(&content) {
            Ok(answers) => Ok(Some(answers)),
            Err(e) => {
                // A corrupt draft must not prevent the session from starting
                warn!(path = ?self.path, error = %e, "Ignoring unreadable draft");
                Ok(None)
            }
        }
    }

    fn save(&self, answers: &AnswerSet) -> Result<(), DraftError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(answers)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), DraftError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            debug!(path = ?self.path, "FileDraftStore::clear: draft removed");
        }
        Ok(())
    }
}

/// In-memory draft slot for tests
#[derive(Default)]
pub struct MemoryDraftStore {
    slot: Mutex<Option<String>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self) -> Result<Option<AnswerSet>, DraftError> {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        match slot.as_deref() {
            Some(content) => Ok(serde_json::from_str(content).ok()),
            None => Ok(None),
        }
    }

    fn save(&self, answers: &AnswerSet) -> Result<(), DraftError> {
        let content = serde_json::to_string(answers)?;
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(content);
        Ok(())
    }

    fn clear(&self) -> Result<(), DraftError> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

/// Save without surfacing failures; the best-effort contract in one place
pub fn save_best_effort(store: &dyn DraftStore, answers: &AnswerSet) {
    if let Err(e) = store.save(answers) {
        warn!(error = %e, "Draft save failed; continuing with in-memory state");
    }
}
