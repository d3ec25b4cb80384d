use leptos::prelude::*;

// Inline failure notice; hidden while `message` is None
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="error-banner" role="alert">
                    <span>{text}</span>
                    {on_dismiss.map(|dismiss| view! {
                        <button
                            type="button"
                            class="error-dismiss"
                            aria-label="Dismiss"
                            on:click=move |_| dismiss.run(())
                        >"×"</button>
                    })}
                </div>
            }
        })
    }
}
