use chrono::Local;
use leptos::prelude::*;

use crate::core::models::Task;
use crate::features::tasks::state::TaskCollection;

fn created_label(task: &Task) -> String {
    task.created_at
        .with_timezone(&Local)
        .format("%b %-d, %Y, %I:%M %p")
        .to_string()
}

/// Pure rendering of the dashboard's task list; every change is reported
/// back through the callbacks.
#[component]
pub fn TaskList(
    tasks: ReadSignal<TaskCollection>,
    on_toggle: Callback<String>,
    on_delete: Callback<String>,
    on_rename: Callback<(String, String)>,
) -> impl IntoView {
    move || {
        tasks.with(|tasks| {
            if tasks.is_empty() {
                return view! {
                    <section class="task-list empty">
                        <p>"No tasks yet. Add your first task above or use the AI assistant!"</p>
                    </section>
                }
                .into_any();
            }

            let summary = format!("{} of {} done", tasks.completed_count(), tasks.len());
            let items = tasks
                .iter()
                .cloned()
                .map(|task| {
                    view! {
                        <TaskItem task=task on_toggle=on_toggle on_delete=on_delete on_rename=on_rename />
                    }
                })
                .collect::<Vec<_>>();

            view! {
                <section class="task-list">
                    <div class="task-list-header">
                        <h2>"Your Tasks"</h2>
                        <span class="task-count">{summary}</span>
                    </div>
                    <div class="task-items">{items}</div>
                </section>
            }
            .into_any()
        })
    }
}

#[component]
pub fn TaskItem(
    task: Task,
    on_toggle: Callback<String>,
    on_delete: Callback<String>,
    on_rename: Callback<(String, String)>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(task.title.clone());

    let completed = task.completed;
    let created = created_label(&task);
    let title = task.title.clone();
    let task_id = task.id.clone();
    let toggle_id = task.id.clone();
    let toggle_label = if completed { "Mark as incomplete" } else { "Mark as complete" };

    let commit = {
        let task_id = task_id.clone();
        move || {
            // Enter and the blur that follows both land here
            if editing.get_untracked() {
                set_editing.set(false);
                on_rename.run((task_id.clone(), draft.get_untracked()));
            }
        }
    };

    let title_view = move || {
        if editing.get() {
            let commit_on_key = commit.clone();
            let commit_on_blur = commit.clone();
            let original = title.clone();
            let on_key = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
                "Enter" => commit_on_key(),
                "Escape" => {
                    set_draft.set(original.clone());
                    set_editing.set(false);
                }
                _ => {}
            };
            view! {
                <input
                    class="task-edit"
                    type="text"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=on_key
                    on:blur=move |_| commit_on_blur()
                />
            }
            .into_any()
        } else {
            view! {
                <p class="task-title" title="Double-click to rename" on:dblclick=move |_| set_editing.set(true)>
                    {title.clone()}
                </p>
            }
            .into_any()
        }
    };

    view! {
        <div class="task-item" class:completed=completed>
            <button
                class="task-check"
                class:checked=completed
                aria-label=toggle_label
                on:click=move |_| on_toggle.run(toggle_id.clone())
            >
                {completed.then_some("✓")}
            </button>
            <div class="task-body">
                {title_view}
                <p class="task-created">{created}</p>
            </div>
            <button
                class="task-delete"
                aria-label="Delete task"
                on:click=move |_| on_delete.run(task_id.clone())
            >"🗑"</button>
        </div>
    }
}
