use leptos::prelude::*;

use super::chat_panel::ChatPanelBody;
use crate::components::ErrorBanner;
use crate::core::models::Session;
use crate::core::services::ApiClient;
use crate::features::auth::components::AuthenticatedHeader;
use crate::features::chat::hooks::use_chat;
use crate::features::chat::state::PanelVariant;

/// Full-page assistant. Task changes made by the assistant are only visible
/// after visiting the dashboard.
#[component]
pub fn ChatInterface(api: ApiClient, session: Session) -> impl IntoView {
    let hook = use_chat(api.clone(), session.user_id().to_string(), PanelVariant::FullPage, None, None);
    let session_state = hook.session;
    let last_error = Signal::derive(move || session_state.with(|s| s.last_error().map(str::to_string)));

    view! {
        <AuthenticatedHeader api=api email=session.email().to_string() />
        <div class="chat-page">
            <div class="chat-page-header">
                <h1>"Todo Assistant"</h1>
                <p>"Manage your tasks through natural conversation"</p>
            </div>
            <ErrorBanner message=last_error />
            <ChatPanelBody hook=hook placeholder="Type your message... (e.g., 'Add buy groceries')" />
        </div>
    }
}
