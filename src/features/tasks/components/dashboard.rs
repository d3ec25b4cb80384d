use leptos::prelude::*;

use super::{AddTaskForm, TaskList};
use crate::components::ErrorBanner;
use crate::core::models::Session;
use crate::core::services::ApiClient;
use crate::features::auth::components::sign_out_and_leave;
use crate::features::chat::components::ChatSidebar;
use crate::features::tasks::hooks::{use_tasks, TasksHook};

#[component]
pub fn TaskDashboard(api: ApiClient, session: Session) -> impl IntoView {
    let TasksHook {
        tasks,
        error,
        adding,
        reloader,
        add,
        remove,
        toggle,
        rename,
        dismiss_error,
    } = use_tasks(api.clone());
    let (chat_open, set_chat_open) = signal(false);

    let user_id = session.user_id().to_string();
    let sign_out_api = api.clone();
    let close_chat = Callback::new(move |_: ()| set_chat_open.set(false));

    view! {
        <div class="dashboard" class:with-chat=move || chat_open.get()>
            <main class="dashboard-main">
                <header class="dashboard-header">
                    <div>
                        <h1>"Task Dashboard"</h1>
                        <p class="dashboard-user">{session.email().to_string()}</p>
                    </div>
                    <div class="dashboard-actions">
                        <button
                            class="chat-toggle"
                            on:click=move |_| set_chat_open.update(|open| *open = !*open)
                        >
                            {move || if chat_open.get() { "Close AI Assistant" } else { "Open AI Assistant" }}
                        </button>
                        <button class="sign-out" on:click=move |_| sign_out_and_leave(sign_out_api.clone())>
                            "Sign Out"
                        </button>
                    </div>
                </header>

                <ErrorBanner message=error on_dismiss=dismiss_error />
                <AddTaskForm on_add=add adding=adding />
                <TaskList tasks=tasks on_toggle=toggle on_delete=remove on_rename=rename />
            </main>

            {move || chat_open.get().then(|| view! {
                <ChatSidebar
                    api=api.clone()
                    user_id=user_id.clone()
                    tasks=tasks
                    on_tasks_changed=reloader.clone()
                    on_close=close_chat
                />
            })}
        </div>
    }
}
