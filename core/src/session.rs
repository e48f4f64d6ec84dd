//! Session façade wiring store, view settings, and persistence
//!
//! `TaskSession` is the contract the presentation layer dispatches
//! against: every intent mutates (or reconfigures) and hands back the
//! updated visible list plus counters. Persistence runs after every
//! mutation; a failed save is reported, never rolled back.

use tracing::warn;

use crate::env::{Clock, IdGenerator, SystemClock, UuidIdGenerator};
use crate::storage::TaskStorage;
use crate::task::{Task, TaskPatch, TaskPriority, TaskStore};
use crate::view::{self, FilterMode, SortKey, TaskStats};
use crate::Result;

/// What the UI renders after each intent: the visible list, the
/// counters over the full collection, and whether the last save stuck.
#[derive(Debug, Clone)]
pub struct TaskView {
    pub tasks: Vec<Task>,
    pub stats: TaskStats,
    pub persisted: bool,
}

/// Single-user task session: the authoritative store plus the current
/// filter/sort settings and the storage backend.
pub struct TaskSession {
    store: TaskStore,
    filter: FilterMode,
    sort: SortKey,
    storage: Box<dyn TaskStorage>,
    persisted: bool,
}

impl TaskSession {
    /// Open a session against the given storage with system ids/clock.
    ///
    /// Missing or malformed persisted data yields an empty collection.
    pub fn open(storage: Box<dyn TaskStorage>) -> Self {
        Self::open_with_env(storage, Box::new(UuidIdGenerator), Box::new(SystemClock))
    }

    /// Open a session with explicit id/clock capabilities.
    pub fn open_with_env(
        storage: Box<dyn TaskStorage>,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let tasks = storage.load().unwrap_or_default();
        Self {
            store: TaskStore::with_tasks(tasks, ids, clock),
            filter: FilterMode::default(),
            sort: SortKey::default(),
            storage,
            persisted: true,
        }
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// The visible list and counters for the current settings.
    pub fn view(&self) -> TaskView {
        TaskView {
            tasks: view::project(self.store.tasks(), self.filter, self.sort),
            stats: view::stats(self.store.tasks()),
            persisted: self.persisted,
        }
    }

    /// Create a task. A blank title rejects the intent and leaves both
    /// state and storage untouched.
    pub fn add_task(
        &mut self,
        title: &str,
        description: &str,
        priority: TaskPriority,
    ) -> Result<(Task, TaskView)> {
        let task = self.store.add(title, description, priority)?;
        self.persist();
        Ok((task, self.view()))
    }

    /// Delete by id; unknown ids are a no-op.
    pub fn delete_task(&mut self, id: &str) -> TaskView {
        if self.store.delete(id) {
            self.persist();
        }
        self.view()
    }

    /// Flip completion by id; unknown ids are a no-op.
    pub fn toggle_task(&mut self, id: &str) -> TaskView {
        if self.store.toggle(id).is_some() {
            self.persist();
        }
        self.view()
    }

    /// Apply a partial edit; a blank title rejects the whole patch.
    pub fn edit_task(&mut self, id: &str, patch: TaskPatch) -> Result<TaskView> {
        if self.store.edit(id, patch)?.is_some() {
            self.persist();
        }
        Ok(self.view())
    }

    /// Remove all completed tasks; returns how many went away.
    pub fn clear_completed(&mut self) -> (usize, TaskView) {
        let removed = self.store.clear_completed();
        if removed > 0 {
            self.persist();
        }
        (removed, self.view())
    }

    pub fn set_filter(&mut self, mode: FilterMode) -> TaskView {
        self.filter = mode;
        self.view()
    }

    pub fn set_sort(&mut self, key: SortKey) -> TaskView {
        self.sort = key;
        self.view()
    }

    /// Fire-and-forget save: a failure is downgraded to a warning and
    /// flagged on the next view, the in-memory state stays as-is.
    fn persist(&mut self) {
        match self.storage.save(self.store.tasks()) {
            Ok(()) => self.persisted = true,
            Err(err) => {
                warn!(%err, "failed to persist tasks, in-memory state kept");
                self.persisted = false;
            }
        }
    }
}
