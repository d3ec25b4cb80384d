//! In-memory stand-in for the todo, chat and auth backends.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::core::config::{AppConfig, DEFAULT_API_BASE_URL};
use crate::core::error::ClientError;
use crate::core::models::{Credential, Task};
use crate::core::services::http::{ApiClient, HttpBackend, HttpRequest, HttpResponse, Method};
use crate::features::chat::state::MAX_MESSAGE_CHARS;

pub const TEST_TOKEN: &str = "test-token";

#[derive(Default)]
struct ServerState {
    tasks: Vec<Task>,
    next_id: u64,
    conversations: u64,
    requests: Vec<HttpRequest>,
    fail_next: Option<(u16, String)>,
}

#[derive(Clone, Default)]
pub struct FakeTodoServer {
    state: Arc<Mutex<ServerState>>,
}

fn respond(status: u16, body: serde_json::Value) -> HttpResponse {
    HttpResponse {
        status,
        body: body.to_string(),
    }
}

fn not_found() -> HttpResponse {
    respond(404, json!({ "detail": "Task not found" }))
}

impl FakeTodoServer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ServerState> {
        self.state.lock().expect("fake server state poisoned")
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(AppConfig::default(), Arc::new(self.clone()))
    }

    pub fn signed_in_client(&self) -> ApiClient {
        self.client().with_credential(Credential::new(TEST_TOKEN))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().requests.clone()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.lock().tasks.clone()
    }

    /// Make the next request fail with `status`, whatever its route.
    pub fn fail_next(&self, status: u16, body: &str) {
        self.lock().fail_next = Some((status, body.to_string()));
    }

    pub fn seed_task(&self, title: &str) -> Task {
        let mut state = self.lock();
        Self::insert_task(&mut state, title, None)
    }

    fn insert_task(state: &mut ServerState, title: &str, description: Option<String>) -> Task {
        state.next_id += 1;
        let task = Task {
            id: state.next_id.to_string(),
            title: title.to_string(),
            description,
            completed: false,
            created_at: Utc.with_ymd_and_hms(2026, 2, 8, 12, 0, 0).unwrap(),
            updated_at: None,
        };
        state.tasks.push(task.clone());
        task
    }

    fn route(state: &mut ServerState, request: &HttpRequest) -> HttpResponse {
        let path = request
            .url
            .strip_prefix(DEFAULT_API_BASE_URL)
            .unwrap_or(&request.url)
            .trim_start_matches('/')
            .to_string();
        let segments: Vec<&str> = path.split('/').collect();

        if let (Method::Post, ["auth", "signout"]) = (request.method, segments.as_slice()) {
            return respond(200, json!({ "message": "Signed out" }));
        }

        let expected = format!("Bearer {}", TEST_TOKEN);
        if request.header("Authorization") != Some(expected.as_str()) {
            return respond(401, json!({ "detail": "Not authenticated" }));
        }

        let body = request.json_body().unwrap_or(serde_json::Value::Null);
        match (request.method, segments.as_slice()) {
            (Method::Get, ["auth", "me"]) => respond(200, json!({ "id": "user-1", "email": "user@example.com" })),
            (Method::Get, ["todos"]) => respond(200, json!(state.tasks)),
            (Method::Post, ["todos"]) => match body.get("title").and_then(|t| t.as_str()) {
                Some(title) if !title.trim().is_empty() => {
                    let description = body.get("description").and_then(|d| d.as_str()).map(str::to_string);
                    let task = Self::insert_task(state, title, description);
                    respond(201, json!(task))
                }
                _ => respond(422, json!({ "detail": "Title is required" })),
            },
            (Method::Put, ["todos", id]) => match state.tasks.iter_mut().find(|t| t.id == *id) {
                Some(task) => {
                    if let Some(title) = body.get("title").and_then(|t| t.as_str()) {
                        task.title = title.to_string();
                    }
                    if let Some(description) = body.get("description") {
                        task.description = description.as_str().map(str::to_string);
                    }
                    if let Some(completed) = body.get("completed").and_then(|c| c.as_bool()) {
                        task.completed = completed;
                    }
                    task.updated_at = Some(Utc.with_ymd_and_hms(2026, 2, 9, 8, 0, 0).unwrap());
                    respond(200, json!(task))
                }
                None => not_found(),
            },
            (Method::Delete, ["todos", id]) => {
                let before = state.tasks.len();
                state.tasks.retain(|t| t.id != *id);
                if state.tasks.len() == before {
                    not_found()
                } else {
                    HttpResponse { status: 204, body: String::new() }
                }
            }
            (Method::Patch, ["todos", id, "complete"]) => match state.tasks.iter_mut().find(|t| t.id == *id) {
                Some(task) => {
                    task.completed = !task.completed;
                    respond(200, json!(task))
                }
                None => not_found(),
            },
            (Method::Post, [_user_id, "chat"]) => Self::chat(state, &body),
            _ => respond(404, json!({ "detail": "Not Found" })),
        }
    }

    // A tiny agent: "add <title>" creates a task server-side, anything else is echoed.
    fn chat(state: &mut ServerState, body: &serde_json::Value) -> HttpResponse {
        let message = body.get("message").and_then(|m| m.as_str()).unwrap_or_default();
        let length = message.chars().count();
        if length == 0 || length > MAX_MESSAGE_CHARS {
            return respond(
                422,
                json!({ "detail": [{ "loc": ["body", "message"], "msg": "String should have at most 2000 characters" }] }),
            );
        }
        let conversation_id = match body.get("conversation_id").and_then(|c| c.as_str()) {
            Some(existing) => existing.to_string(),
            None => {
                state.conversations += 1;
                format!("c{}", state.conversations)
            }
        };

        let first_line = message.lines().next().unwrap_or_default();
        let response = match first_line.strip_prefix("add ") {
            Some(title) => {
                let task = Self::insert_task(state, title, None);
                format!("I've added '{}' to your list!", task.title)
            }
            None => format!("You said: {}", first_line),
        };

        respond(
            200,
            json!({
                "response": response,
                "conversation_id": conversation_id,
                "timestamp": "2026-02-08T12:00:00",
            }),
        )
    }
}

#[async_trait(?Send)]
impl HttpBackend for FakeTodoServer {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let mut state = self.lock();
        state.requests.push(request.clone());
        if let Some((status, body)) = state.fail_next.take() {
            return Ok(HttpResponse { status, body });
        }
        Ok(Self::route(&mut state, &request))
    }
}
