//! In-memory transport for unit tests

use crate::api::ApiClient;
use crate::error::{MarathonError, MarathonResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;

/// A request as seen by the transport
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub query: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Json(Value),
    NotFound,
    Status(u16),
}

/// Canned replies keyed by method and `path[?query]`; records every request
#[derive(Default)]
pub(crate) struct RecordingClient {
    replies: Mutex<HashMap<(&'static str, String), Reply>>,
    requests: Mutex<Vec<Recorded>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, method: &'static str, path: &str, reply: Reply) -> Self {
        self.replies.lock().insert((method, path.to_string()), reply);
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().clone()
    }

    fn handle(
        &self,
        method: &'static str,
        path: &str,
        query: Option<&str>,
        body: Option<&Value>,
    ) -> MarathonResult<Value> {
        self.requests.lock().push(Recorded {
            method,
            path: path.to_string(),
            query: query.map(str::to_string),
            body: body.cloned(),
        });

        let key = match query {
            Some(query) => format!("{}?{}", path, query),
            None => path.to_string(),
        };

        match self.replies.lock().get(&(method, key)).cloned() {
            Some(Reply::Json(value)) => Ok(value),
            Some(Reply::NotFound) => Err(MarathonError::NotFound(path.to_string())),
            Some(Reply::Status(status)) => Err(MarathonError::Api {
                status,
                message: "canned failure".into(),
            }),
            None => Err(MarathonError::Api {
                status: 500,
                message: format!("unexpected {} {}", method, path),
            }),
        }
    }
}

#[async_trait]
impl ApiClient for RecordingClient {
    async fn get(&self, path: &str, query: Option<&str>) -> MarathonResult<Value> {
        self.handle("GET", path, query, None)
    }

    async fn post(&self, path: &str, query: Option<&str>, body: &Value) -> MarathonResult<Value> {
        self.handle("POST", path, query, Some(body))
    }

    async fn put(&self, path: &str, query: Option<&str>, body: &Value) -> MarathonResult<Value> {
        self.handle("PUT", path, query, Some(body))
    }

    async fn delete(&self, path: &str, query: Option<&str>) -> MarathonResult<Value> {
        self.handle("DELETE", path, query, None)
    }
}
