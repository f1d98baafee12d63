//! Task Actions
//!
//! Add / toggle / delete handlers for both pages. The local page mutates its
//! list immediately; the synced page mutates it only after the server
//! answered with a success status.

use crate::commands::{ApiError, Dialogs, TaskApi};
use crate::models::Task;
use crate::store::{RowKey, StateHandle};

pub const EMPTY_TASK_MESSAGE: &str = "Please enter a task.";
pub const ADD_FAILED_MESSAGE: &str = "Failed to add task.";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("task text is empty")]
    EmptyText,
}

/// Trim the raw input; whitespace-only text is rejected
pub fn normalize_task_text(raw: &str) -> Result<String, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    Ok(text.to_string())
}

fn validated_input(state: &impl StateHandle, dialogs: &impl Dialogs) -> Option<String> {
    match state.read_state(|s| normalize_task_text(&s.input))? {
        Ok(text) => Some(text),
        Err(_) => {
            dialogs.alert(EMPTY_TASK_MESSAGE);
            None
        }
    }
}

// ========================
// Local Page
// ========================

pub fn add_local(state: &impl StateHandle, dialogs: &impl Dialogs) -> Option<RowKey> {
    let text = validated_input(state, dialogs)?;
    let key = state.write_state(|s| {
        s.input.clear();
        s.push(Task::local(text))
    })?;
    log::debug!("[TASKS] local add, row {}", key);
    Some(key)
}

pub fn toggle_local(state: &impl StateHandle, key: RowKey) -> Option<bool> {
    state.write_state(|s| s.toggle(key)).flatten()
}

/// Returns true if the row was removed
pub fn delete_local(state: &impl StateHandle, dialogs: &impl Dialogs, key: RowKey) -> bool {
    if !dialogs.confirm(DELETE_PROMPT) {
        return false;
    }
    state.write_state(|s| s.remove(key)).flatten().is_some()
}

// ========================
// Synced Page
// ========================

/// Replace the list with the server's tasks. On failure the list is cleared.
///
/// Late answers for a page that is already gone are dropped.
pub async fn load_synced(api: &impl TaskApi, state: &impl StateHandle) -> Result<usize, ApiError> {
    match api.list_tasks().await {
        Ok(tasks) => {
            let count = tasks.len();
            if state.write_state(|s| s.replace_all(tasks)).is_none() {
                log::debug!("[TASKS] page gone, dropping {} loaded tasks", count);
            } else {
                log::info!("[TASKS] loaded {} tasks", count);
            }
            Ok(count)
        }
        Err(e) => {
            let _ = state.write_state(|s| s.replace_all(Vec::new()));
            log::error!("[TASKS] failed to load tasks: {}", e);
            Err(e)
        }
    }
}

pub async fn add_synced(
    api: &impl TaskApi,
    state: &impl StateHandle,
    dialogs: &impl Dialogs,
) -> Option<RowKey> {
    let text = validated_input(state, dialogs)?;
    match api.create_task(&text).await {
        Ok(task) => {
            let key = state.write_state(|s| {
                s.input.clear();
                s.push(task)
            });
            if key.is_none() {
                log::debug!("[TASKS] page gone before create finished");
            }
            key
        }
        Err(e) => {
            log::error!("[TASKS] create failed: {}", e);
            dialogs.alert(ADD_FAILED_MESSAGE);
            None
        }
    }
}

/// Ask the server to flip the row; returns the new value once confirmed.
///
/// Failures are not surfaced to the user.
pub async fn toggle_synced(api: &impl TaskApi, state: &impl StateHandle, key: RowKey) -> Option<bool> {
    let Some((id, completed)) = state.read_state(|s| s.synced_task(key)).flatten() else {
        log::warn!("[TASKS] toggle on row {} without a server id", key);
        return None;
    };
    let target = !completed;

    match api.set_completed(&id, target).await {
        Ok(()) => state
            .write_state(|s| s.set_completed(key, target))
            .unwrap_or(false)
            .then_some(target),
        Err(e) => {
            log::warn!("[TASKS] toggle of task {} failed: {}", id, e);
            None
        }
    }
}

/// Returns true if the server deleted the task and the row was removed
pub async fn delete_synced(
    api: &impl TaskApi,
    state: &impl StateHandle,
    dialogs: &impl Dialogs,
    key: RowKey,
) -> bool {
    if !dialogs.confirm(DELETE_PROMPT) {
        return false;
    }
    let Some((id, _)) = state.read_state(|s| s.synced_task(key)).flatten() else {
        log::warn!("[TASKS] delete on row {} without a server id", key);
        return false;
    };

    match api.delete_task(&id).await {
        Ok(()) => state.write_state(|s| s.remove(key)).flatten().is_some(),
        Err(e) => {
            log::warn!("[TASKS] delete of task {} failed: {}", id, e);
            false
        }
    }
}
