pub mod dashboard;
pub mod task_client;
