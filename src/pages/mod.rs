pub mod assistant;
pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod signin;
pub mod todos;

pub use assistant::AssistantPage;
pub use dashboard::DashboardPage;
pub use home::Home;
pub use not_found::NotFound;
pub use signin::SignIn;
pub use todos::DeprecatedTodos;
