use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::config::AppConfig;
use crate::core::error::ClientError;
use crate::core::models::Credential;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Send cookies along with the request (`credentials: "include"`).
    pub include_cookies: bool,
}

#[cfg(test)]
impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body.as_deref().and_then(|body| serde_json::from_str(body).ok())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The network seam. The browser build uses `FetchBackend`; tests swap in an
/// in-memory server.
#[async_trait(?Send)]
pub trait HttpBackend: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}

/// Base URL, backend and (optionally) the session credential for every call.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<AppConfig>,
    backend: Arc<dyn HttpBackend>,
    credential: Option<Credential>,
}

impl ApiClient {
    pub fn new(config: AppConfig, backend: Arc<dyn HttpBackend>) -> Self {
        Self {
            config: Arc::new(config),
            backend,
            credential: None,
        }
    }

    /// Same backend and config, scoped to a session credential.
    pub fn with_credential(&self, credential: Option<Credential>) -> Self {
        Self {
            config: Arc::clone(&self.config),
            backend: Arc::clone(&self.backend),
            credential,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn call(&self, method: Method, path: impl Into<String>) -> ApiCall<'_> {
        ApiCall {
            client: self,
            method,
            path: path.into(),
            body: None,
            include_cookies: false,
            failure_message: "Request failed",
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_base_url", &self.config.api_base_url)
            .field("authenticated", &self.credential.is_some())
            .finish()
    }
}

pub struct ApiCall<'a> {
    client: &'a ApiClient,
    method: Method,
    path: String,
    body: Option<String>,
    include_cookies: bool,
    failure_message: &'static str,
}

impl ApiCall<'_> {
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ClientError> {
        let encoded = serde_json::to_string(body)
            .map_err(|e| ClientError::Decode(format!("failed to encode request body: {}", e)))?;
        self.body = Some(encoded);
        Ok(self)
    }

    pub fn with_cookies(mut self) -> Self {
        self.include_cookies = true;
        self
    }

    /// Message used when a failed response carries no `detail`.
    pub fn failure_message(mut self, message: &'static str) -> Self {
        self.failure_message = message;
        self
    }

    fn build(&self) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(credential) = self.client.credential() {
            headers.push(("Authorization".to_string(), credential.authorization_header()));
        }

        HttpRequest {
            method: self.method,
            url: self.client.config().endpoint(&self.path),
            headers,
            body: self.body.clone(),
            include_cookies: self.include_cookies,
        }
    }

    /// Send the request and fail on any non-2xx status.
    pub async fn send(self) -> Result<HttpResponse, ClientError> {
        let request = self.build();
        log::debug!("{} {}", request.method.as_str(), request.url);

        let response = self.client.backend.send(request).await?;
        log::debug!("{} {} -> {}", self.method.as_str(), self.path, response.status);

        if response.is_success() {
            Ok(response)
        } else {
            Err(ClientError::from_status(response.status, &response.body, self.failure_message))
        }
    }

    pub async fn send_json<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        let response = self.send().await?;
        serde_json::from_str(&response.body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeTodoServer, TEST_TOKEN};
    use futures::executor::block_on;

    #[test]
    fn attaches_bearer_only_when_credential_present() {
        let server = FakeTodoServer::new();
        let anonymous = server.client();
        let signed_in = anonymous.with_credential(Credential::new(TEST_TOKEN));

        let rejected = block_on(anonymous.call(Method::Get, "/todos").send()).unwrap_err();
        assert!(rejected.is_auth_required());
        block_on(signed_in.call(Method::Get, "/todos").send()).unwrap();

        let requests = server.requests();
        assert_eq!(requests[0].header("authorization"), None);
        assert_eq!(requests[1].header("Authorization"), Some("Bearer test-token"));
        assert_eq!(requests[1].header("content-type"), Some("application/json"));
        assert_eq!(requests[1].url, "http://localhost:7689/api/todos");
    }

    #[test]
    fn non_success_uses_failure_message() {
        let server = FakeTodoServer::new();
        server.fail_next(500, "oops");
        let api = server.signed_in_client();

        let err = block_on(
            api.call(Method::Get, "/todos")
                .failure_message("Failed to fetch tasks")
                .send(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ClientError::Transport { status: 500, message: "Failed to fetch tasks".to_string() }
        );
    }
}
