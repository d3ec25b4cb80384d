use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="notice-page">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <A href="/" attr:class="btn-secondary">"Back to Home"</A>
        </div>
    }
}
