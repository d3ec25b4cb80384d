use leptos::prelude::*;

use crate::core::models::Session;
use crate::core::services::ApiClient;
use crate::features::auth::components::SessionGate;
use crate::features::chat::components::ChatInterface;

#[component]
pub fn AssistantPage() -> impl IntoView {
    view! {
        <SessionGate render=|session: Session, api: ApiClient| view! { <ChatInterface api=api session=session /> } />
    }
}
