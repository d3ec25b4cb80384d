use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::error::ClientError;
use crate::core::lifecycle::MountGuard;
use crate::core::services::{redirect_to_sign_in, ApiClient};
use crate::features::tasks::services::dashboard;
use crate::features::tasks::state::{ReloadSequencer, ReloadVerdict, TaskCollection, TaskMutation};

/// The dashboard's task state. All mutation goes through these callbacks.
#[derive(Clone)]
pub struct TasksHook {
    pub tasks: ReadSignal<TaskCollection>,
    pub error: ReadSignal<Option<String>>,
    pub adding: ReadSignal<bool>,
    pub reloader: TaskReloader,
    pub add: Callback<String>,
    pub remove: Callback<String>,
    pub toggle: Callback<String>,
    pub rename: Callback<(String, String)>,
    pub dismiss_error: Callback<()>,
}

/// Handle other views use to ask the dashboard for a refetch. It stops
/// forwarding once the dashboard is gone.
#[derive(Clone)]
pub struct TaskReloader {
    reload: Callback<()>,
    guard: MountGuard,
}

impl TaskReloader {
    pub fn new(reload: Callback<()>, guard: MountGuard) -> Self {
        Self { reload, guard }
    }

    /// Returns `false` when the dashboard has been unmounted.
    pub fn request(&self) -> bool {
        if !self.guard.is_mounted() {
            log::debug!("Task list owner gone; skipping reload");
            return false;
        }
        self.reload.run(());
        true
    }
}

#[derive(Clone, Copy)]
struct TaskSignals {
    tasks: RwSignal<TaskCollection>,
    error: RwSignal<Option<String>>,
    sequencer: StoredValue<ReloadSequencer>,
}

impl TaskSignals {
    fn new() -> Self {
        Self {
            tasks: RwSignal::new(TaskCollection::default()),
            error: RwSignal::new(None),
            sequencer: StoredValue::new(ReloadSequencer::default()),
        }
    }

    // Apply a finished operation, unless the dashboard has gone away meanwhile.
    fn settle(&self, guard: &MountGuard, action: &str, result: Result<Option<TaskMutation>, ClientError>) {
        if !guard.is_mounted() {
            log::debug!("Dropping {} result for unmounted dashboard", action);
            return;
        }
        match result {
            Ok(Some(mutation)) => {
                if !matches!(mutation, TaskMutation::Replace(_)) {
                    self.sequencer.update_value(|sequencer| sequencer.mutated());
                }
                self.tasks.update(|tasks| tasks.apply(mutation));
                self.error.set(None);
            }
            Ok(None) => {}
            Err(ClientError::AuthRequired) => {
                log::warn!("Credential rejected during {}", action);
                redirect_to_sign_in();
            }
            Err(e) => {
                log::error!("Failed to {}: {}", action, e);
                let message = e.user_message();
                self.error
                    .set(Some(format!("{}. Please try again.", message.trim_end_matches('.'))));
            }
        }
    }

    /// Settle a full reload. Returns `true` when the snapshot is stale and
    /// another fetch is needed.
    fn settle_reload(&self, guard: &MountGuard, ticket: u64, result: Result<TaskMutation, ClientError>) -> bool {
        if !guard.is_mounted() {
            log::debug!("Dropping load tasks result for unmounted dashboard");
            return false;
        }
        if result.is_ok() {
            match self.sequencer.with_value(|sequencer| sequencer.verdict(ticket)) {
                ReloadVerdict::Apply => {}
                ReloadVerdict::Superseded => {
                    log::debug!("Discarding reload {} superseded by a newer one", ticket);
                    return false;
                }
                ReloadVerdict::Refetch => {
                    log::debug!("Task list changed while reload {} was in flight", ticket);
                    return true;
                }
            }
        }
        self.settle(guard, "load tasks", result.map(Some));
        false
    }
}

fn spawn_reload(api: ApiClient, signals: TaskSignals, guard: MountGuard) {
    let Some(ticket) = signals.sequencer.try_update_value(|sequencer| sequencer.issue()) else {
        return;
    };
    spawn_local(async move {
        let result = dashboard::reload(&api).await;
        if signals.settle_reload(&guard, ticket, result) {
            spawn_reload(api, signals, guard);
        }
    });
}

pub fn use_tasks(api: ApiClient) -> TasksHook {
    let signals = TaskSignals::new();
    let adding = RwSignal::new(false);
    let guard = MountGuard::for_current_view();

    let reload = {
        let api = api.clone();
        let guard = guard.clone();
        Callback::new(move |_: ()| spawn_reload(api.clone(), signals, guard.clone()))
    };

    let add = {
        let api = api.clone();
        let guard = guard.clone();
        Callback::new(move |title: String| {
            if title.trim().is_empty() || adding.get_untracked() {
                return;
            }
            adding.set(true);
            let api = api.clone();
            let guard = guard.clone();
            spawn_local(async move {
                let result = dashboard::add(&api, &title).await;
                if guard.is_mounted() {
                    adding.set(false);
                }
                signals.settle(&guard, "add task", result);
            });
        })
    };

    let remove = {
        let api = api.clone();
        let guard = guard.clone();
        Callback::new(move |task_id: String| {
            let api = api.clone();
            let guard = guard.clone();
            spawn_local(async move {
                let result = dashboard::remove(&api, &task_id).await.map(Some);
                signals.settle(&guard, "delete task", result);
            });
        })
    };

    let toggle = {
        let api = api.clone();
        let guard = guard.clone();
        Callback::new(move |task_id: String| {
            let cached = signals.tasks.with_untracked(|tasks| tasks.get(&task_id).cloned());
            let api = api.clone();
            let guard = guard.clone();
            spawn_local(async move {
                let result = dashboard::toggle(&api, cached).await;
                signals.settle(&guard, "update task", result);
            });
        })
    };

    let rename = {
        let guard = guard.clone();
        Callback::new(move |(task_id, title): (String, String)| {
            let cached = signals.tasks.with_untracked(|tasks| tasks.get(&task_id).cloned());
            let api = api.clone();
            let guard = guard.clone();
            spawn_local(async move {
                let result = dashboard::rename(&api, cached, &title).await;
                signals.settle(&guard, "rename task", result);
            });
        })
    };

    let dismiss_error = Callback::new(move |_: ()| signals.error.set(None));

    // Load tasks on mount
    reload.run(());

    TasksHook {
        tasks: signals.tasks.read_only(),
        error: signals.error.read_only(),
        adding: adding.read_only(),
        reloader: TaskReloader::new(reload, guard),
        add,
        remove,
        toggle,
        rename,
        dismiss_error,
    }
}
