//! Task Commands
//!
//! Frontend bindings for the `/api/tasks` resource.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::{CompletedUpdate, NewTask, Task, TaskId};
use super::{fetch, response_text, ApiError, ApiResult};

// Everything outside unreserved characters, so an id stays one path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'\\')
    .add(b'^')
    .add(b'|');

// ========================
// URLs
// ========================

pub fn tasks_url(base: &str) -> String {
    format!("{}/api/tasks", base.trim_end_matches('/'))
}

pub fn task_url(base: &str, id: &TaskId) -> String {
    let id = id.to_string();
    format!("{}/{}", tasks_url(base), utf8_percent_encode(&id, PATH_SEGMENT))
}

fn to_json<T: serde::Serialize>(body: &T) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(text: &str) -> ApiResult<T> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

// ========================
// Commands
// ========================

pub async fn list_tasks(base: &str) -> ApiResult<Vec<Task>> {
    let response = fetch("GET", &tasks_url(base), None).await?;
    from_json(&response_text(&response).await?)
}

pub async fn create_task(base: &str, text: &str) -> ApiResult<Task> {
    let body = to_json(&NewTask { text })?;
    let response = fetch("POST", &tasks_url(base), Some(body)).await?;
    from_json(&response_text(&response).await?)
}

pub async fn update_task_completed(base: &str, id: &TaskId, completed: bool) -> ApiResult<()> {
    let body = to_json(&CompletedUpdate { completed })?;
    fetch("PUT", &task_url(base, id), Some(body)).await?;
    Ok(())
}

pub async fn delete_task(base: &str, id: &TaskId) -> ApiResult<()> {
    fetch("DELETE", &task_url(base, id), None).await?;
    Ok(())
}

// ========================
// API Seam
// ========================

/// The task resource as the synced page sees it.
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait TaskApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;
    async fn create_task(&self, text: &str) -> ApiResult<Task>;
    async fn set_completed(&self, id: &TaskId, completed: bool) -> ApiResult<()>;
    async fn delete_task(&self, id: &TaskId) -> ApiResult<()>;
}

/// `TaskApi` over `window.fetch`
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    base: String,
}

impl HttpTaskApi {
    /// `base` is prepended to `/api/tasks`; empty means same origin
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        list_tasks(&self.base).await
    }

    async fn create_task(&self, text: &str) -> ApiResult<Task> {
        create_task(&self.base, text).await
    }

    async fn set_completed(&self, id: &TaskId, completed: bool) -> ApiResult<()> {
        update_task_completed(&self.base, id, completed).await
    }

    async fn delete_task(&self, id: &TaskId) -> ApiResult<()> {
        delete_task(&self.base, id).await
    }
}
