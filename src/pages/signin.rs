use leptos::prelude::*;
use leptos_router::components::A;

// Credentials are issued by the auth service; this page only explains where to go.
#[component]
pub fn SignIn() -> impl IntoView {
    view! {
        <div class="notice-page">
            <h1>"Sign in required"</h1>
            <p>"Your session has ended or you have not signed in yet."</p>
            <p>"Sign in through the account service, then come back to your tasks."</p>
            <A href="/" attr:class="btn-secondary">"Back to Home"</A>
        </div>
    }
}
