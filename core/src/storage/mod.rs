//! Persistence backends for the task collection
//!
//! The core treats storage as an injected capability: loading never
//! fails hard (a missing or unreadable entry means "no tasks yet"),
//! while save failures surface as errors the session downgrades to a
//! warning.

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::task::Task;
use crate::Result;

/// Storage for the serialized task collection.
pub trait TaskStorage {
    /// Load the persisted collection.
    ///
    /// `None` means no usable data exists (never stored, or malformed);
    /// callers start from an empty collection in that case.
    fn load(&self) -> Option<Vec<Task>>;

    /// Persist the full collection, replacing whatever was stored.
    fn save(&self, tasks: &[Task]) -> Result<()>;
}
