use crate::core::error::ClientError;
use crate::core::models::{NewTask, Task, TaskPatch};
use crate::core::services::{ApiClient, Method};

// Stateless wrappers over the task REST API. No retry, no caching.

pub async fn list_tasks(api: &ApiClient) -> Result<Vec<Task>, ClientError> {
    api.call(Method::Get, "/todos")
        .failure_message("Failed to fetch tasks")
        .send_json()
        .await
}

/// The caller is responsible for rejecting blank titles before calling this.
pub async fn create_task(api: &ApiClient, new_task: &NewTask) -> Result<Task, ClientError> {
    api.call(Method::Post, "/todos")
        .json(new_task)?
        .failure_message("Failed to create task")
        .send_json()
        .await
}

pub async fn update_task(api: &ApiClient, task_id: &str, patch: &TaskPatch) -> Result<Task, ClientError> {
    api.call(Method::Put, format!("/todos/{}", urlencoding::encode(task_id)))
        .json(patch)?
        .failure_message("Failed to update task")
        .send_json()
        .await
}

pub async fn delete_task(api: &ApiClient, task_id: &str) -> Result<(), ClientError> {
    api.call(Method::Delete, format!("/todos/{}", urlencoding::encode(task_id)))
        .failure_message("Failed to delete task")
        .send()
        .await
        .map(|_| ())
}

/// `PATCH /todos/{id}/complete` flips the flag server-side; `desired` is only
/// used to notice when the server and the cached copy disagree.
pub async fn toggle_complete(api: &ApiClient, task_id: &str, desired: bool) -> Result<Task, ClientError> {
    let task: Task = api
        .call(Method::Patch, format!("/todos/{}/complete", urlencoding::encode(task_id)))
        .failure_message("Failed to toggle task completion")
        .send_json()
        .await?;
    if task.completed != desired {
        log::warn!(
            "Task {} came back completed={} but {} was requested; keeping server value",
            task_id,
            task.completed,
            desired
        );
    }
    Ok(task)
}
