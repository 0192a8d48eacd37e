//! Transport seam between the operations and the scheduler's REST API
//!
//! Operations only ever talk to an [`ApiClient`]. The production
//! implementation is [`HttpApiClient`](crate::HttpApiClient); tests substitute
//! an in-memory one.

use crate::error::MarathonResult;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Applications collection
pub const APPS_PATH: &str = "/v2/apps";

/// JSON request/response capability against a resource path
///
/// Implementations report a missing resource as
/// [`MarathonError::NotFound`](crate::MarathonError::NotFound), every other
/// non-success status as [`MarathonError::Api`](crate::MarathonError::Api),
/// and an empty success body as `Value::Null`.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn get(&self, path: &str, query: Option<&str>) -> MarathonResult<Value>;

    async fn post(&self, path: &str, query: Option<&str>, body: &Value) -> MarathonResult<Value>;

    async fn put(&self, path: &str, query: Option<&str>, body: &Value) -> MarathonResult<Value>;

    async fn delete(&self, path: &str, query: Option<&str>) -> MarathonResult<Value>;
}

#[async_trait]
impl<T: ApiClient + ?Sized> ApiClient for Arc<T> {
    async fn get(&self, path: &str, query: Option<&str>) -> MarathonResult<Value> {
        (**self).get(path, query).await
    }

    async fn post(&self, path: &str, query: Option<&str>, body: &Value) -> MarathonResult<Value> {
        (**self).post(path, query, body).await
    }

    async fn put(&self, path: &str, query: Option<&str>, body: &Value) -> MarathonResult<Value> {
        (**self).put(path, query, body).await
    }

    async fn delete(&self, path: &str, query: Option<&str>) -> MarathonResult<Value> {
        (**self).delete(path, query).await
    }
}

/// Resource path of one application
///
/// Application ids carry a leading `/`, which the collection path already
/// supplies.
pub fn app_path(name: &str) -> String {
    format!("{}/{}", APPS_PATH, name.trim_start_matches('/'))
}

/// Query overriding a deployment already in flight
pub(crate) fn force_query(force: bool) -> Option<&'static str> {
    force.then_some("force=true")
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> MarathonResult<T> {
    Ok(serde_json::from_value(value)?)
}
