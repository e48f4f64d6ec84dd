//! In-memory storage for tests and ephemeral sessions.

use std::cell::RefCell;

use crate::task::Task;
use crate::Result;

use super::TaskStorage;

/// Storage that keeps the serialized collection in memory.
#[derive(Default)]
pub struct MemoryStorage {
    cell: RefCell<Option<Vec<Task>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the storage, as if a previous session had saved.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            cell: RefCell::new(Some(tasks)),
        }
    }
}

impl TaskStorage for MemoryStorage {
    fn load(&self) -> Option<Vec<Task>> {
        self.cell.borrow().clone()
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        *self.cell.borrow_mut() = Some(tasks.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskPriority;

    #[test]
    fn empty_storage_loads_none() {
        let storage = MemoryStorage::new();
        assert!(storage.load().is_none());
    }

    #[test]
    fn save_replaces_the_stored_collection() {
        let storage = MemoryStorage::new();
        let task = Task {
            id: "a".to_string(),
            title: "Remembered".to_string(),
            description: String::new(),
            priority: TaskPriority::Medium,
            created_at: 1,
            completed: false,
        };

        storage.save(std::slice::from_ref(&task)).unwrap();
        assert_eq!(storage.load().unwrap(), vec![task]);

        storage.save(&[]).unwrap();
        assert_eq!(storage.load().unwrap(), Vec::<Task>::new());
    }
}
