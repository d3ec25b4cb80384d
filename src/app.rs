use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::config::AppConfig;
use crate::core::services::{ApiClient, FetchBackend};
use crate::pages::{AssistantPage, DashboardPage, DeprecatedTodos, Home, NotFound, SignIn};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Anonymous client; guarded pages derive a credentialed one per session
    provide_context(ApiClient::new(config, Arc::new(FetchBackend)));

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/chat") view=DashboardPage />
                    <Route path=path!("/assistant") view=AssistantPage />
                    <Route path=path!("/todos") view=DeprecatedTodos />
                    <Route path=path!("/signin") view=SignIn />
                </Routes>
            </main>
        </Router>
    }
}
