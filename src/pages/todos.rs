use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::lifecycle::MountGuard;

const REDIRECT_DELAY_MS: u32 = 5_000;
const DASHBOARD_PATH: &str = "/chat";

/// Retired task page; points visitors at the dashboard and sends them there.
#[component]
pub fn DeprecatedTodos() -> impl IntoView {
    let navigate = use_navigate();
    let guard = MountGuard::for_current_view();

    spawn_local(async move {
        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
        if guard.is_mounted() {
            navigate(DASHBOARD_PATH, Default::default());
        }
    });

    view! {
        <div class="notice-page">
            <h1>"This page has moved"</h1>
            <p>"Task management now lives on the dashboard, next to the AI assistant."</p>
            <p>"Redirecting in 5 seconds..."</p>
            <A href=DASHBOARD_PATH attr:class="btn-primary">"Go to Dashboard now"</A>
        </div>
    }
}
