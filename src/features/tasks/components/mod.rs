pub mod add_task_form;
pub mod dashboard;
pub mod task_list;

pub use add_task_form::AddTaskForm;
pub use dashboard::TaskDashboard;
pub use task_list::TaskList;
