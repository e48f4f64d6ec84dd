//! JSON file storage
//!
//! Stores the task collection as a JSON array in a single file, the
//! same layout the browser frontend keeps under its localStorage key.

use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::task::Task;
use crate::Result;

use super::TaskStorage;

/// File-backed task storage using JSON.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage backed by the given file path.
    ///
    /// The file is not touched until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TaskStorage for JsonFileStorage {
    fn load(&self) -> Option<Vec<Task>> {
        if !self.path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "could not read task file, starting empty");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(tasks) => Some(tasks),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "task file is malformed, starting empty");
                None
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, content)?;
        Ok(())
    }
}
