//! Task model definitions

use serde::{Deserialize, Serialize};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl TaskPriority {
    /// Sort weight: high outranks medium outranks low.
    pub fn weight(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Parse a priority string; anything unrecognized falls back to `Medium`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }

    /// The lowercase wire name, as stored in the data file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A task in the list (frontend-compatible camelCase format)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: TaskPriority,
    /// Milliseconds since the Unix epoch, assigned once at creation.
    pub created_at: i64,
    #[serde(default)]
    pub completed: bool,
}

/// A partial update to an existing task.
///
/// Unset fields keep their prior values; a set-but-blank title rejects
/// the whole edit.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
}

impl TaskPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.priority.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    }

    #[test]
    fn priority_parse_falls_back_to_medium() {
        assert_eq!(TaskPriority::parse("low"), TaskPriority::Low);
        assert_eq!(TaskPriority::parse("HIGH"), TaskPriority::High);
        assert_eq!(TaskPriority::parse("urgent"), TaskPriority::Medium);
        assert_eq!(TaskPriority::parse(""), TaskPriority::Medium);
    }

    #[test]
    fn priority_weights_are_ordered() {
        assert!(TaskPriority::High.weight() > TaskPriority::Medium.weight());
        assert!(TaskPriority::Medium.weight() > TaskPriority::Low.weight());
    }

    #[test]
    fn task_serializes_with_camel_case_fields() {
        let task = Task {
            id: "task-1".to_string(),
            title: "Write docs".to_string(),
            description: String::new(),
            priority: TaskPriority::High,
            created_at: 1700000000000,
            completed: false,
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["createdAt"], 1700000000000_i64);
        assert_eq!(json["priority"], "high");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn task_deserializes_with_missing_optional_fields() {
        let json = r#"{"id":"task-1","title":"Old entry","createdAt":100}"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.description, "");
        assert_eq!(task.priority, TaskPriority::Medium);
        assert!(!task.completed);
    }

    #[test]
    fn patch_builder_sets_only_given_fields() {
        let patch = TaskPatch::new().with_title("New title");
        assert_eq!(patch.title.as_deref(), Some("New title"));
        assert!(patch.description.is_none());
        assert!(patch.priority.is_none());
        assert!(!patch.is_empty());
        assert!(TaskPatch::new().is_empty());
    }
}
