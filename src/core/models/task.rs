use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::timestamp::{lenient_utc, lenient_utc_option};

/// A task as owned by the backend; the client only holds a cached copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(with = "lenient_utc")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "lenient_utc_option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn summary(&self) -> TaskSummary<'_> {
        TaskSummary {
            id: &self.id,
            title: &self.title,
            completed: self.completed,
        }
    }
}

/// Compact form sent to the assistant as conversational context.
#[derive(Debug, Serialize)]
pub struct TaskSummary<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }
}

/// One field of a partial update: left alone, set to a value, or cleared.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldUpdate<T> {
    #[default]
    Unchanged,
    Set(T),
    Clear,
}

impl<T> FieldUpdate<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, FieldUpdate::Unchanged)
    }
}

// `Unchanged` is skipped at the field level, so only `Set` and `Clear` reach here.
impl<T: Serialize> Serialize for FieldUpdate<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldUpdate::Set(value) => value.serialize(serializer),
            FieldUpdate::Unchanged | FieldUpdate::Clear => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub title: FieldUpdate<String>,
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub description: FieldUpdate<String>,
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub completed: FieldUpdate<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_task_without_optional_fields() {
        let task: Task = serde_json::from_str(
            r#"{"id":"1","title":"buy milk","completed":false,"created_at":"2026-02-08T12:00:00"}"#,
        )
        .unwrap();
        assert_eq!(task.id, "1");
        assert_eq!(task.description, None);
        assert_eq!(task.updated_at, None);
    }

    #[test]
    fn patch_distinguishes_absent_from_cleared() {
        let patch = TaskPatch {
            title: FieldUpdate::Set("renamed".to_string()),
            description: FieldUpdate::Clear,
            ..TaskPatch::default()
        };
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "renamed", "description": null }));
        assert_eq!(serde_json::to_value(TaskPatch::default()).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn new_task_omits_missing_description() {
        let body = serde_json::to_value(NewTask::titled("buy milk")).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "buy milk" }));
    }
}
