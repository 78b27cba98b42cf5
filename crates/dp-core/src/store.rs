//! Persistence port
//!
//! One key, one opaque state blob. Writes are best-effort side effects:
//! the engine keeps its in-memory state correct even when a write fails.

use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value persistence port for the single state blob
pub trait StateStore {
    /// Read the previously saved blob, if any
    fn get(&self) -> Option<String>;

    /// Write the blob; callers treat failure as non-fatal
    fn put(&mut self, blob: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing blob, as if from a previous session
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }
}

impl StateStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.blob.clone()
    }

    fn put(&mut self, blob: &str) -> Result<(), StoreError> {
        self.blob = Some(blob.to_string());
        Ok(())
    }
}
