#![allow(dead_code)]

use axum::{
    Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    routing::get,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vk_link::infrastructure::vk::VkClient;

pub const TOKEN: &str = "test-token";

/// One request received by the fake API.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct FakeState {
    responses: Arc<HashMap<String, (StatusCode, String)>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    delay: Duration,
}

/// Local stand-in for `https://api.vk.ru/method`.
pub struct FakeVk {
    pub base_url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl FakeVk {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn client(&self) -> VkClient {
        self.client_with_timeout(Duration::from_secs(5))
    }

    pub fn client_with_timeout(&self, timeout: Duration) -> VkClient {
        VkClient::new(self.base_url.clone(), TOKEN, "5.199", timeout).unwrap()
    }
}

/// Builder for the canned responses of the fake API.
#[derive(Default)]
pub struct FakeVkBuilder {
    responses: HashMap<String, (StatusCode, String)>,
    delay: Duration,
}

impl FakeVkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, method: &str, body: Value) -> Self {
        self.responses
            .insert(method.to_string(), (StatusCode::OK, body.to_string()));
        self
    }

    pub fn respond_raw(mut self, method: &str, status: StatusCode, body: &str) -> Self {
        self.responses
            .insert(method.to_string(), (status, body.to_string()));
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub async fn spawn(self) -> FakeVk {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            responses: Arc::new(self.responses),
            calls: calls.clone(),
            delay: self.delay,
        };

        let app = Router::new()
            .route("/method/{method}", get(handle))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeVk {
            base_url: format!("http://{addr}/method"),
            calls,
        }
    }
}

async fn handle(
    State(state): State<FakeState>,
    Path(method): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.calls.lock().unwrap().push(RecordedCall {
        method: method.clone(),
        query,
        authorization,
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    state
        .responses
        .get(&method)
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, String::new()))
}

pub fn short_link_body(short_url: &str) -> Value {
    json!({
        "response": {
            "short_url": short_url,
            "url": "https://example.com",
            "key": short_url.rsplit('/').next().unwrap_or_default(),
            "access_key": "0123456789abcdef"
        }
    })
}

pub fn stats_body(views: &[u64]) -> Value {
    let stats: Vec<Value> = views
        .iter()
        .enumerate()
        .map(|(i, v)| json!({ "timestamp": 1_700_000_000 + i as i64 * 3600, "views": v }))
        .collect();
    json!({ "response": { "key": "abc123", "stats": stats } })
}

pub fn check_link_body(link: &str) -> Value {
    json!({ "response": { "status": "not_banned", "link": link } })
}

pub fn error_body(code: i64, msg: &str) -> Value {
    json!({
        "error": {
            "error_code": code,
            "error_msg": msg,
            "request_params": []
        }
    })
}

/// Returns an address nothing is listening on.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/method")
}
