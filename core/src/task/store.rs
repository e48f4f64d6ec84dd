//! The authoritative task collection and its mutation operations
//!
//! `TaskStore` owns the ordered task list (newest first) and is the only
//! place the collection is mutated. Callers read it through immutable
//! borrows or cloned snapshots; derived views live in [`crate::view`].

use tracing::debug;

use crate::env::{Clock, IdGenerator, SystemClock, UuidIdGenerator};
use crate::{Error, Result};

use super::model::{Task, TaskPatch, TaskPriority};

/// Owns the canonical ordered task collection.
///
/// Ids and creation timestamps come from the injected [`IdGenerator`]
/// and [`Clock`] capabilities.
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl TaskStore {
    /// Create an empty store with the system clock and uuid ids.
    pub fn new() -> Self {
        Self::with_env(Box::new(UuidIdGenerator), Box::new(SystemClock))
    }

    /// Create an empty store with explicit capabilities.
    pub fn with_env(ids: Box<dyn IdGenerator>, clock: Box<dyn Clock>) -> Self {
        Self::with_tasks(Vec::new(), ids, clock)
    }

    /// Create a store seeded with a previously persisted collection.
    pub fn with_tasks(tasks: Vec<Task>, ids: Box<dyn IdGenerator>, clock: Box<dyn Clock>) -> Self {
        Self { tasks, ids, clock }
    }

    /// The current collection, newest-created first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// An owned copy of the current collection.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Create a new task and prepend it to the collection.
    ///
    /// The title must be non-empty after trimming; a blank title leaves
    /// the collection untouched and returns [`Error::EmptyTitle`].
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        priority: TaskPriority,
    ) -> Result<Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }

        let task = Task {
            id: self.ids.generate_id(),
            title: title.to_string(),
            description: description.trim().to_string(),
            priority,
            created_at: self.clock.now_millis(),
            completed: false,
        };

        debug!(id = %task.id, title = %task.title, "task added");
        self.tasks.insert(0, task.clone());
        Ok(task)
    }

    /// Remove the task with the given id.
    ///
    /// Returns `false` if no such task exists (idempotent). The relative
    /// order of the remaining tasks is preserved.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            debug!(%id, "task deleted");
        }
        removed
    }

    /// Flip the `completed` flag on the matching task.
    ///
    /// Returns the updated task, or `None` if the id is unknown.
    pub fn toggle(&mut self, id: &str) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        debug!(%id, completed = task.completed, "task toggled");
        Some(task.clone())
    }

    /// Apply a partial update to the matching task.
    ///
    /// Only the fields present in the patch change; a patch carrying a
    /// blank title rejects the entire edit with [`Error::EmptyTitle`]
    /// and nothing is applied. An unknown id is a no-op (`Ok(None)`).
    pub fn edit(&mut self, id: &str, patch: TaskPatch) -> Result<Option<Task>> {
        let title = match &patch.title {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(Error::EmptyTitle);
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description.trim().to_string();
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }

        debug!(%id, "task edited");
        Ok(Some(task.clone()))
    }

    /// Remove every completed task, preserving the order of the rest.
    ///
    /// Returns the number of tasks removed (may be 0).
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            debug!(removed, "completed tasks cleared");
        }
        removed
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
