use crate::core::config::CREDENTIAL_STORAGE_KEY;
use crate::core::models::Credential;

/// Where the bearer credential lives between page loads.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Option<Credential>;
    fn clear(&self);
}

/// `window.localStorage` under the fixed `access_token` key.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserCredentialStore;

impl BrowserCredentialStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl CredentialStore for BrowserCredentialStore {
    fn load(&self) -> Option<Credential> {
        let storage = Self::storage()?;
        match storage.get_item(CREDENTIAL_STORAGE_KEY) {
            Ok(Some(token)) => Credential::new(token),
            Ok(None) => None,
            Err(_) => {
                log::error!("Failed to read credential from local storage");
                None
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(CREDENTIAL_STORAGE_KEY).is_err() {
                log::error!("Failed to remove credential from local storage");
            }
        }
    }
}

/// Process-local store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: std::sync::Mutex<Option<Credential>>,
}

#[cfg(test)]
impl MemoryCredentialStore {
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            token: std::sync::Mutex::new(Some(credential)),
        }
    }
}

#[cfg(test)]
impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<Credential> {
        self.token.lock().ok().and_then(|token| token.clone())
    }

    fn clear(&self) {
        if let Ok(mut token) = self.token.lock() {
            *token = None;
        }
    }
}
