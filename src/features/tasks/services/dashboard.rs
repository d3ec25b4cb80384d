use super::task_client;
use crate::core::error::ClientError;
use crate::core::models::{FieldUpdate, NewTask, Task, TaskPatch};
use crate::core::services::ApiClient;
use crate::features::tasks::state::TaskMutation;

// Dashboard operations: the transport call happens first and the returned
// mutation carries the server's copy, so the cached list never holds a value
// the backend has not confirmed. `Ok(None)` means the input was skipped.

/// Full refetch; the reconciliation step after anything whose effect on the
/// task list is not known locally, such as a chat exchange.
pub async fn reload(api: &ApiClient) -> Result<TaskMutation, ClientError> {
    let tasks = task_client::list_tasks(api).await?;
    log::debug!("Reloaded {} tasks", tasks.len());
    Ok(TaskMutation::Replace(tasks))
}

pub async fn add(api: &ApiClient, title: &str) -> Result<Option<TaskMutation>, ClientError> {
    let title = title.trim();
    if title.is_empty() {
        return Ok(None);
    }
    let task = task_client::create_task(api, &NewTask::titled(title)).await?;
    log::info!("Created task {}", task.id);
    Ok(Some(TaskMutation::Insert(task)))
}

pub async fn remove(api: &ApiClient, task_id: &str) -> Result<TaskMutation, ClientError> {
    task_client::delete_task(api, task_id).await?;
    log::info!("Deleted task {}", task_id);
    Ok(TaskMutation::Remove(task_id.to_string()))
}

/// Flip a cached task. Unknown ids are skipped.
pub async fn toggle(api: &ApiClient, cached: Option<Task>) -> Result<Option<TaskMutation>, ClientError> {
    let Some(task) = cached else {
        return Ok(None);
    };
    let updated = task_client::toggle_complete(api, &task.id, !task.completed).await?;
    Ok(Some(TaskMutation::Update(updated)))
}

/// Rename a task. Blank or unchanged titles are skipped.
pub async fn rename(api: &ApiClient, cached: Option<Task>, title: &str) -> Result<Option<TaskMutation>, ClientError> {
    let title = title.trim();
    let Some(task) = cached.filter(|task| !title.is_empty() && task.title != title) else {
        return Ok(None);
    };
    let patch = TaskPatch {
        title: FieldUpdate::Set(title.to_string()),
        ..TaskPatch::default()
    };
    let updated = task_client::update_task(api, &task.id, &patch).await?;
    Ok(Some(TaskMutation::Update(updated)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tasks::state::TaskCollection;
    use crate::testing::FakeTodoServer;
    use futures::executor::block_on;

    fn loaded(server: &FakeTodoServer) -> TaskCollection {
        let mut tasks = TaskCollection::default();
        tasks.apply(block_on(reload(&server.signed_in_client())).unwrap());
        tasks
    }

    #[test]
    fn add_to_empty_collection_inserts_server_task() {
        let server = FakeTodoServer::new();
        let api = server.signed_in_client();
        let mut tasks = TaskCollection::default();

        let mutation = block_on(add(&api, "buy milk")).unwrap().unwrap();
        tasks.apply(mutation);

        assert_eq!(tasks.len(), 1);
        let task = tasks.get("1").unwrap();
        assert_eq!(task.title, "buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn blank_title_is_skipped_without_request() {
        let server = FakeTodoServer::new();
        assert_eq!(block_on(add(&server.signed_in_client(), "   ")).unwrap(), None);
        assert!(server.requests().is_empty());
    }

    #[test]
    fn toggle_marks_complete_without_changing_size() {
        let server = FakeTodoServer::new();
        server.seed_task("buy milk");
        let api = server.signed_in_client();
        let mut tasks = loaded(&server);

        let cached = tasks.get("1").cloned();
        tasks.apply(block_on(toggle(&api, cached)).unwrap().unwrap());

        assert_eq!(tasks.len(), 1);
        assert!(tasks.get("1").unwrap().completed);
    }

    #[test]
    fn toggle_of_unknown_task_is_skipped() {
        let server = FakeTodoServer::new();
        assert_eq!(block_on(toggle(&server.signed_in_client(), None)).unwrap(), None);
        assert!(server.requests().is_empty());
    }

    #[test]
    fn failed_create_leaves_collection_unchanged() {
        let server = FakeTodoServer::new();
        server.seed_task("existing");
        let api = server.signed_in_client();
        let mut tasks = loaded(&server);
        let before = tasks.clone();

        server.fail_next(500, r#"{"detail":"database unavailable"}"#);
        match block_on(add(&api, "new one")) {
            Ok(Some(mutation)) => tasks.apply(mutation),
            Ok(None) => panic!("non-blank title should not be skipped"),
            Err(e) => assert_eq!(e.user_message(), "database unavailable"),
        }

        assert_eq!(tasks, before);
    }

    #[test]
    fn failed_delete_keeps_item() {
        let server = FakeTodoServer::new();
        server.seed_task("keep me");
        let api = server.signed_in_client();
        let mut tasks = loaded(&server);

        server.fail_next(500, "");
        if let Ok(mutation) = block_on(remove(&api, "1")) {
            tasks.apply(mutation);
        }

        assert!(tasks.get("1").is_some());
    }

    #[test]
    fn successful_sequence_matches_backend_after_reload() {
        let server = FakeTodoServer::new();
        let api = server.signed_in_client();
        let mut tasks = TaskCollection::default();

        for title in ["a", "b", "c", "d"] {
            tasks.apply(block_on(add(&api, title)).unwrap().unwrap());
        }
        tasks.apply(block_on(remove(&api, "2")).unwrap());
        let cached = tasks.get("3").cloned();
        tasks.apply(block_on(toggle(&api, cached)).unwrap().unwrap());
        let cached = tasks.get("4").cloned();
        tasks.apply(block_on(rename(&api, cached, "d2")).unwrap().unwrap());

        assert_eq!(tasks.as_slice(), server.tasks().as_slice());

        tasks.apply(block_on(reload(&api)).unwrap());
        assert_eq!(tasks.as_slice(), server.tasks().as_slice());
    }

    #[test]
    fn rename_skips_unchanged_title() {
        let server = FakeTodoServer::new();
        let task = server.seed_task("same");
        let api = server.signed_in_client();

        assert_eq!(block_on(rename(&api, Some(task), " same ")).unwrap(), None);
        assert!(server.requests().is_empty());
    }
}
