//! Frontend Models
//!
//! Data structures matching the `/api/tasks` payloads.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned task identifier.
///
/// Opaque to the client: the backend hands out integer row ids today, but
/// string ids decode just as well and are echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// None for tasks that only ever live in the local list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    pub text: String,
    #[serde(default, deserialize_with = "bool_or_int")]
    pub completed: bool,
}

impl Task {
    /// A fresh, not yet completed task with no server id
    pub fn local(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            completed: false,
        }
    }
}

/// Body of `POST /api/tasks`
#[derive(Debug, Serialize)]
pub struct NewTask<'a> {
    pub text: &'a str,
}

/// Body of `PUT /api/tasks/{id}`
#[derive(Debug, Serialize)]
pub struct CompletedUpdate {
    pub completed: bool,
}

// SQLite-backed servers send `completed` as 0/1.
fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_sqlite_row() {
        let task: Task = serde_json::from_str(r#"{"id": 7, "text": "Buy milk", "completed": 0}"#).unwrap();
        assert_eq!(task.id, Some(TaskId::Number(7)));
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);

        let done: Task = serde_json::from_str(r#"{"id": 8, "text": "Walk dog", "completed": 1}"#).unwrap();
        assert!(done.completed);
    }

    #[test]
    fn test_decode_string_id_and_bool() {
        let task: Task = serde_json::from_str(r#"{"id": "a1b2", "text": "x", "completed": true}"#).unwrap();
        assert_eq!(task.id, Some(TaskId::Text("a1b2".to_string())));
        assert!(task.completed);
        assert_eq!(task.id.unwrap().to_string(), "a1b2");
    }

    #[test]
    fn test_missing_completed_defaults_false() {
        let task: Task = serde_json::from_str(r#"{"id": 1, "text": "x"}"#).unwrap();
        assert!(!task.completed);
    }

    #[test]
    fn test_request_bodies() {
        assert_eq!(serde_json::to_string(&NewTask { text: "Buy milk" }).unwrap(), r#"{"text":"Buy milk"}"#);
        assert_eq!(serde_json::to_string(&CompletedUpdate { completed: true }).unwrap(), r#"{"completed":true}"#);
    }
}
