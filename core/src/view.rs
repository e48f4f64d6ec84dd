//! Derived-view computation
//!
//! Pure projections from the task collection to what the user sees:
//! filtering, stable sorting, and the aggregate counters. Nothing here
//! mutates its input or caches across calls; every read recomputes from
//! the latest collection snapshot.

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Which subset of the collection is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    All,
    Active,
    Completed,
}

impl Default for FilterMode {
    fn default() -> Self {
        Self::All
    }
}

impl FilterMode {
    /// Parse a filter string; anything unrecognized falls back to `All`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }
}

/// Ordering applied to the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    CreatedDesc,
    CreatedAsc,
    TitleAsc,
    TitleDesc,
    Priority,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::CreatedDesc
    }
}

impl SortKey {
    /// Parse a sort key string; anything unrecognized falls back to
    /// newest-first.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "created_asc" => Self::CreatedAsc,
            "title_asc" => Self::TitleAsc,
            "title_desc" => Self::TitleDesc,
            "priority" => Self::Priority,
            _ => Self::CreatedDesc,
        }
    }
}

/// Aggregate counters over the full (unfiltered) collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

/// Keep the subset of tasks matching the filter mode, in input order.
pub fn filter_tasks(tasks: &[Task], mode: FilterMode) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| match mode {
            FilterMode::All => true,
            FilterMode::Active => !t.completed,
            FilterMode::Completed => t.completed,
        })
        .cloned()
        .collect()
}

/// Sort the given tasks by the given key.
///
/// The sort is stable, so equal keys preserve their relative input
/// order. Title ordering is case-insensitive.
pub fn sort_tasks(mut tasks: Vec<Task>, key: SortKey) -> Vec<Task> {
    match key {
        SortKey::CreatedDesc => tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::CreatedAsc => tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::TitleAsc => {
            tasks.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SortKey::TitleDesc => {
            tasks.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
        }
        SortKey::Priority => tasks.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight())),
    }
    tasks
}

/// Compute the counters from the full unfiltered collection.
pub fn stats(tasks: &[Task]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    TaskStats {
        total,
        completed,
        active: total - completed,
    }
}

/// Filter then sort: the visible list for the given settings.
pub fn project(tasks: &[Task], mode: FilterMode, key: SortKey) -> Vec<Task> {
    sort_tasks(filter_tasks(tasks, mode), key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskPriority;

    fn task(id: &str, title: &str, created_at: i64, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            priority: TaskPriority::Medium,
            created_at,
            completed,
        }
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn filter_modes_select_the_right_subsets() {
        let tasks = vec![
            task("1", "A", 3, false),
            task("2", "B", 2, true),
            task("3", "C", 1, false),
        ];

        assert_eq!(titles(&filter_tasks(&tasks, FilterMode::All)), vec!["A", "B", "C"]);
        assert_eq!(titles(&filter_tasks(&tasks, FilterMode::Active)), vec!["A", "C"]);
        assert_eq!(titles(&filter_tasks(&tasks, FilterMode::Completed)), vec!["B"]);
    }

    #[test]
    fn sort_by_creation_time_both_directions() {
        let tasks = vec![
            task("1", "first", 100, false),
            task("2", "second", 300, false),
            task("3", "third", 200, false),
        ];

        let desc = sort_tasks(tasks.clone(), SortKey::CreatedDesc);
        assert_eq!(
            desc.iter().map(|t| t.created_at).collect::<Vec<_>>(),
            vec![300, 200, 100]
        );

        let asc = sort_tasks(tasks, SortKey::CreatedAsc);
        assert_eq!(
            asc.iter().map(|t| t.created_at).collect::<Vec<_>>(),
            vec![100, 200, 300]
        );
    }

    #[test]
    fn sort_by_title_is_case_insensitive() {
        let tasks = vec![
            task("1", "banana", 1, false),
            task("2", "Apple", 2, false),
            task("3", "cherry", 3, false),
        ];

        let asc = sort_tasks(tasks.clone(), SortKey::TitleAsc);
        assert_eq!(titles(&asc), vec!["Apple", "banana", "cherry"]);

        let desc = sort_tasks(tasks, SortKey::TitleDesc);
        assert_eq!(titles(&desc), vec!["cherry", "banana", "Apple"]);
    }

    #[test]
    fn sort_by_priority_descends_and_keeps_ties_stable() {
        let mut a = task("1", "low one", 1, false);
        a.priority = TaskPriority::Low;
        let mut b = task("2", "high one", 2, false);
        b.priority = TaskPriority::High;
        let mut c = task("3", "medium one", 3, false);
        c.priority = TaskPriority::Medium;
        let mut d = task("4", "medium two", 4, false);
        d.priority = TaskPriority::Medium;

        let sorted = sort_tasks(vec![a, b, c, d], SortKey::Priority);
        assert_eq!(
            titles(&sorted),
            vec!["high one", "medium one", "medium two", "low one"]
        );
    }

    #[test]
    fn stats_counts_add_up() {
        let tasks = vec![
            task("1", "A", 1, false),
            task("2", "B", 2, true),
            task("3", "C", 3, true),
        ];

        let s = stats(&tasks);
        assert_eq!(s.total, 3);
        assert_eq!(s.completed, 2);
        assert_eq!(s.active, 1);
        assert_eq!(s.total, s.active + s.completed);

        let empty = stats(&[]);
        assert_eq!(empty.total, 0);
        assert_eq!(empty.active + empty.completed, 0);
    }

    #[test]
    fn project_filters_then_sorts() {
        let tasks = vec![
            task("1", "old active", 100, false),
            task("2", "done", 300, true),
            task("3", "new active", 200, false),
        ];

        let visible = project(&tasks, FilterMode::Active, SortKey::CreatedAsc);
        assert_eq!(titles(&visible), vec!["old active", "new active"]);
    }

    #[test]
    fn parse_falls_back_to_defaults() {
        assert_eq!(FilterMode::parse("active"), FilterMode::Active);
        assert_eq!(FilterMode::parse("bogus"), FilterMode::All);
        assert_eq!(SortKey::parse("title_desc"), SortKey::TitleDesc);
        assert_eq!(SortKey::parse("bogus"), SortKey::CreatedDesc);
    }
}
