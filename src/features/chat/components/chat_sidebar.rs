use leptos::prelude::*;

use super::chat_panel::ChatPanelBody;
use crate::core::services::ApiClient;
use crate::features::chat::hooks::use_chat;
use crate::features::chat::state::PanelVariant;
use crate::features::tasks::hooks::TaskReloader;
use crate::features::tasks::state::TaskCollection;

/// Assistant docked beside the task list. Reads the tasks as context and asks
/// the dashboard to reload them after every exchange.
#[component]
pub fn ChatSidebar(
    api: ApiClient,
    #[prop(into)] user_id: String,
    tasks: ReadSignal<TaskCollection>,
    on_tasks_changed: TaskReloader,
    on_close: Callback<()>,
) -> impl IntoView {
    let hook = use_chat(api, user_id, PanelVariant::Sidebar, Some(tasks), Some(on_tasks_changed));

    view! {
        <aside class="chat-sidebar">
            <div class="chat-sidebar-header">
                <h3>"🤖 AI Task Assistant"</h3>
                <button class="sidebar-close" aria-label="Close chatbot" on:click=move |_| on_close.run(())>"×"</button>
            </div>
            <ChatPanelBody hook=hook placeholder="Ask me to manage your tasks..." />
        </aside>
    }
}
