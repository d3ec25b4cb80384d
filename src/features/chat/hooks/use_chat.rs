use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::error::ClientError;
use crate::core::lifecycle::MountGuard;
use crate::core::models::{ChatReply, Task};
use crate::core::services::{redirect_to_sign_in, ApiClient};
use crate::features::chat::services::send_message;
use crate::features::chat::state::{ChatSession, ExchangeEffect, PanelVariant, SendOutcome};
use crate::features::tasks::hooks::TaskReloader;
use crate::features::tasks::state::TaskCollection;

#[derive(Clone)]
pub struct ChatHook {
    pub session: ReadSignal<ChatSession>,
    /// Returns `true` when the input was taken and the text box can be cleared.
    pub send: Callback<String, bool>,
}

/// Wire a chat panel to the chat endpoint.
///
/// `tasks` is read-only context for variants that send it along; the panel
/// never mutates it. `on_tasks_changed` is asked for a refetch after every
/// successful exchange of a variant that reloads (see `ChatSession::complete`).
pub fn use_chat(
    api: ApiClient,
    user_id: String,
    variant: PanelVariant,
    tasks: Option<ReadSignal<TaskCollection>>,
    on_tasks_changed: Option<TaskReloader>,
) -> ChatHook {
    let session = RwSignal::new(ChatSession::new(variant));
    let guard = MountGuard::for_current_view();

    let send = Callback::new(move |input: String| {
        let snapshot: Vec<Task> = match tasks {
            Some(tasks) if variant.injects_task_context() => {
                tasks.with_untracked(|tasks| tasks.as_slice().to_vec())
            }
            _ => Vec::new(),
        };

        let outgoing = match session.try_update(|s| s.begin_send(&input, &snapshot)) {
            Some(SendOutcome::Sent(outgoing)) => outgoing,
            Some(SendOutcome::Rejected | SendOutcome::Skipped) | None => return false,
        };

        let api = api.clone();
        let user_id = user_id.clone();
        let guard = guard.clone();
        let on_tasks_changed = on_tasks_changed.clone();
        spawn_local(async move {
            let result = send_message(&api, &user_id, &outgoing.text, outgoing.conversation.as_ref()).await;
            if let Err(e) = &result {
                log::error!("Error sending message: {}", e);
            }
            let auth_lost = matches!(result, Err(ClientError::AuthRequired));
            settle_exchange(session, &guard, variant, result, on_tasks_changed.as_ref());
            if auth_lost {
                redirect_to_sign_in();
            }
        });
        true
    });

    ChatHook {
        session: session.read_only(),
        send,
    }
}

/// Record a finished exchange and, when the assistant may have changed
/// tasks, ask the task list owner to refetch. The refetch is requested even
/// if this panel was closed meanwhile. Returns whether a refetch was sent.
fn settle_exchange(
    session: RwSignal<ChatSession>,
    guard: &MountGuard,
    variant: PanelVariant,
    result: Result<ChatReply, ClientError>,
    on_tasks_changed: Option<&TaskReloader>,
) -> bool {
    let reload_needed = if guard.is_mounted() {
        session.try_update(|s| s.complete(result)) == Some(ExchangeEffect::ReloadTasks)
    } else {
        log::debug!("Dropping chat reply for unmounted panel");
        result.is_ok() && variant.reloads_tasks()
    };

    reload_needed && on_tasks_changed.is_some_and(TaskReloader::request)
}
