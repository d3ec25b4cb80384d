use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::core::models::Session;
use crate::core::services::{ApiClient, SIGN_IN_PATH};
use crate::features::auth::hooks::{use_session, SessionState};

/// Render `render` only for a signed-in user; everyone else goes to sign-in.
/// The `ApiClient` handed to `render` carries the session credential.
#[component]
pub fn SessionGate<F, V>(render: F) -> impl IntoView
where
    F: Fn(Session, ApiClient) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let api = use_context::<ApiClient>().expect("ApiClient context");
    let state = use_session(api.clone());

    move || match state.get() {
        SessionState::Loading => view! {
            <div class="loading-screen">
                <div class="spinner"></div>
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        SessionState::Ready(session) => {
            let scoped = api.with_credential(Some(session.credential.clone()));
            render(session, scoped).into_any()
        }
        SessionState::SignedOut => view! { <Redirect path=SIGN_IN_PATH /> }.into_any(),
    }
}
