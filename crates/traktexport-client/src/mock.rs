//! A scripted [`Transport`] for driving the request layer without a network

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use crate::error::ClientError;
use crate::transport::Transport;

pub(crate) struct MockTransport {
    responses: Mutex<HashMap<String, VecDeque<Result<Value, ClientError>>>>,
    calls: Mutex<Vec<String>>,
    authenticated: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            authenticated: true,
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            authenticated: false,
            ..Self::new()
        }
    }

    /// Queue a response for `endpoint`; queued responses are served in order
    pub fn push(&self, endpoint: &str, response: Result<Value, ClientError>) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .entry(endpoint.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn ok(&self, endpoint: &str, value: Value) -> &Self {
        self.push(endpoint, Ok(value))
    }

    pub fn rate_limited(&self, endpoint: &str, retry_after_secs: Option<u64>) -> &Self {
        self.push(endpoint, Err(ClientError::RateLimited { retry_after_secs }))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    /// Unscripted endpoints answer with an empty array
    async fn get_json(&self, endpoint: &str) -> Result<Value, ClientError> {
        self.calls.lock().unwrap().push(endpoint.to_string());
        self.responses
            .lock()
            .unwrap()
            .get_mut(endpoint)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Ok(json!([])))
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
