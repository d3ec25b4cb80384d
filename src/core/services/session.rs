use super::http::{ApiClient, Method};
use super::storage::CredentialStore;
use crate::core::error::ClientError;
use crate::core::models::{CurrentUser, Session};

/// Resolve who the stored credential belongs to.
///
/// Without a credential there is nothing to ask the server, so this fails
/// with `AuthRequired` immediately.
pub async fn current_user(api: &ApiClient) -> Result<CurrentUser, ClientError> {
    if api.credential().is_none() {
        return Err(ClientError::AuthRequired);
    }
    api.call(Method::Get, "/auth/me")
        .with_cookies()
        .failure_message("Failed to load current user")
        .send_json()
        .await
}

/// Load the stored credential and turn it into a `Session`.
pub async fn restore_session(api: &ApiClient, store: &dyn CredentialStore) -> Result<Session, ClientError> {
    let credential = store.load().ok_or(ClientError::AuthRequired)?;
    let scoped = api.with_credential(Some(credential.clone()));
    let user = current_user(&scoped).await?;
    log::info!("Session restored for {}", user.email);
    Ok(Session { user, credential })
}

/// End the session. The local credential is dropped even when the server call fails.
pub async fn sign_out(api: &ApiClient, store: &dyn CredentialStore) -> Result<(), ClientError> {
    let result = api
        .call(Method::Post, "/auth/signout")
        .with_cookies()
        .failure_message("Failed to sign out")
        .send()
        .await
        .map(|_| ());
    store.clear();
    if let Err(e) = &result {
        log::warn!("Sign-out request failed: {}", e);
    }
    result
}
