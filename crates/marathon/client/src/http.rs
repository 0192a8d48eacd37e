//! HTTP transport for the Marathon REST API

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::{MarathonError, MarathonResult};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::debug;

/// [`ApiClient`] backed by `reqwest`
pub struct HttpApiClient {
    client: Client,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
}

impl HttpApiClient {
    /// Client for `endpoint` with default settings
    pub fn new(endpoint: &str) -> MarathonResult<Self> {
        Self::from_config(&ClientConfig::new(endpoint))
    }

    pub fn from_config(config: &ClientConfig) -> MarathonResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, query: Option<&str>) -> String {
        match query.filter(|q| !q.is_empty()) {
            Some(query) => format!("{}{}?{}", self.base_url, path, query),
            None => format!("{}{}", self.base_url, path),
        }
    }

    fn request(&self, method: Method, path: &str, query: Option<&str>) -> RequestBuilder {
        let url = self.url(path, query);
        debug!(%method, %url, "Sending request");

        let builder = self.client.request(method, &url);
        match &self.username {
            Some(username) => builder.basic_auth(username, self.password.as_deref()),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, path: &str) -> MarathonResult<Value> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            if bytes.iter().all(u8::is_ascii_whitespace) {
                Ok(Value::Null)
            } else {
                Ok(serde_json::from_slice(&bytes)?)
            }
        } else if status == StatusCode::NOT_FOUND {
            Err(MarathonError::NotFound(path.to_string()))
        } else {
            let message = match response.text().await {
                Ok(message) => message,
                Err(e) => {
                    debug!(error = %e, %path, "Could not read error body");
                    String::new()
                }
            };
            debug!(status = status.as_u16(), %path, "Request rejected");
            Err(MarathonError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get(&self, path: &str, query: Option<&str>) -> MarathonResult<Value> {
        let builder = self.request(Method::GET, path, query);
        self.send(builder, path).await
    }

    async fn post(&self, path: &str, query: Option<&str>, body: &Value) -> MarathonResult<Value> {
        let builder = self.request(Method::POST, path, query).json(body);
        self.send(builder, path).await
    }

    async fn put(&self, path: &str, query: Option<&str>, body: &Value) -> MarathonResult<Value> {
        let builder = self.request(Method::PUT, path, query).json(body);
        self.send(builder, path).await
    }

    async fn delete(&self, path: &str, query: Option<&str>) -> MarathonResult<Value> {
        let builder = self.request(Method::DELETE, path, query);
        self.send(builder, path).await
    }
}
