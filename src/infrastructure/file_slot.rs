use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::errors::CartError;
use crate::domain::ports::CartSlot;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<io::Error> for CartError {
    fn from(e: io::Error) -> Self {
        CartError::StorageUnavailable(e.to_string())
    }
}

// ── Slot ──────────────────────────────────────────────────────────────────────

/// Stores the cart blob in `<dir>/<key>.json`.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, CartError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, blob: &str) -> Result<(), CartError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write then rename so a crash never leaves a half-written slot.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &self.path).inspect_err(|_| {
            let _ = fs::remove_file(&tmp);
        })?;
        Ok(())
    }
}
