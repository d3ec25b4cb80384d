use leptos::prelude::*;

use crate::core::models::Session;
use crate::core::services::ApiClient;
use crate::features::auth::components::SessionGate;
use crate::features::tasks::components::TaskDashboard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <SessionGate render=|session: Session, api: ApiClient| view! { <TaskDashboard api=api session=session /> } />
    }
}
