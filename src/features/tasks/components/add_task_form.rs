use leptos::prelude::*;
use leptos::ev;

#[component]
pub fn AddTaskForm(
    on_add: Callback<String>,
    #[prop(into)] adding: Signal<bool>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());

    let handle_submit = move |ev: ev::SubmitEvent| {
        // Prevent the default form submission behavior (page reload)
        ev.prevent_default();

        let value = title.get_untracked();
        if value.trim().is_empty() || adding.get_untracked() {
            return;
        }
        on_add.run(value);
        set_title.set(String::new());
    };

    view! {
        <section class="add-task">
            <h2>"Add New Task"</h2>
            <form class="add-task-form" on:submit=handle_submit>
                <input
                    type="text"
                    placeholder="Enter task title..."
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    prop:value=move || title.get()
                    disabled=move || adding.get()
                />
                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || adding.get() || title.with(|t| t.trim().is_empty())
                >"+ Add"</button>
            </form>
        </section>
    }
}
