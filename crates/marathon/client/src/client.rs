//! Entry point for application operations

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::MarathonResult;
use crate::http::HttpApiClient;

/// Operations against one Marathon endpoint
///
/// Holds no state besides the transport: every call is a fresh request and
/// returned values are disconnected snapshots.
pub struct Marathon<C = HttpApiClient> {
    api: C,
}

impl Marathon<HttpApiClient> {
    /// Connect over HTTP using `config`
    pub fn from_config(config: &ClientConfig) -> MarathonResult<Self> {
        Ok(Self::new(HttpApiClient::from_config(config)?))
    }
}

impl<C: ApiClient> Marathon<C> {
    pub fn new(api: C) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &C {
        &self.api
    }
}
