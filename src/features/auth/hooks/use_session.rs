use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::lifecycle::MountGuard;
use crate::core::models::Session;
use crate::core::services::{restore_session, ApiClient, BrowserCredentialStore};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Loading,
    Ready(Session),
    SignedOut,
}

/// Resolve the signed-in user once, at mount.
pub fn use_session(api: ApiClient) -> ReadSignal<SessionState> {
    let state = RwSignal::new(SessionState::Loading);
    let guard = MountGuard::for_current_view();

    spawn_local(async move {
        let result = restore_session(&api, &BrowserCredentialStore).await;
        if !guard.is_mounted() {
            return;
        }
        match result {
            Ok(session) => state.set(SessionState::Ready(session)),
            Err(e) => {
                if !e.is_auth_required() {
                    log::error!("Error checking authentication: {}", e);
                }
                state.set(SessionState::SignedOut);
            }
        }
    });

    state.read_only()
}
