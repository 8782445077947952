//! The network exchange used by the orchestrator.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::error::TransportError;

/// Performs one POST of a JSON body and returns the parsed JSON reply.
///
/// Any reply whose body is JSON is returned, whatever its HTTP status; only a
/// failed exchange or a non-JSON body is an error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, endpoint: &str, body: Value) -> Result<Value, TransportError>;
}

/// `reqwest`-backed transport rooted at the backend's base URL.
///
/// Endpoints resolve under the base path, so a server mounted at
/// `http://host/studio` receives `http://host/studio/api/generate`.
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    pub fn new(server_url: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut base = Url::parse(server_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolves an endpoint such as `/api/generate` against the base path.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, TransportError> {
        Ok(self.base.join(endpoint.trim_start_matches('/'))?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, endpoint: &str, body: Value) -> Result<Value, TransportError> {
        let url = self.endpoint_url(endpoint)?;
        debug!(%url, "POST");
        let response = self.client.post(url).json(&body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(%status, len = bytes.len(), "response received");
        Ok(serde_json::from_slice(&bytes)?)
    }
}
