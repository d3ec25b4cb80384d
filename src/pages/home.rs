use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Organize your day by talking to it"</h1>
                <p>"Keep a simple task list and let the assistant add, rename and complete tasks for you."</p>
                <div class="hero-actions">
                    <A href="/chat" attr:class="btn-primary">"Open Dashboard"</A>
                    <A href="/signin" attr:class="btn-secondary">"Sign In"</A>
                </div>
            </section>
        </div>
    }
}
