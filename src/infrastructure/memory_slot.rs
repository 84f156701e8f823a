use std::sync::Mutex;

use crate::domain::errors::CartError;
use crate::domain::ports::CartSlot;

/// Process-local slot, for tests and hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemorySlot {
    blob: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
        }
    }

    /// Current blob, if anything has been written.
    pub fn contents(&self) -> Option<String> {
        self.blob.lock().ok().and_then(|guard| guard.clone())
    }
}

impl CartSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, CartError> {
        let guard = self
            .blob
            .lock()
            .map_err(|e| CartError::StorageUnavailable(e.to_string()))?;
        Ok(guard.clone())
    }

    fn write(&self, blob: &str) -> Result<(), CartError> {
        let mut guard = self
            .blob
            .lock()
            .map_err(|e| CartError::StorageUnavailable(e.to_string()))?;
        *guard = Some(blob.to_string());
        Ok(())
    }
}
