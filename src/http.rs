//! Authenticated HTTP transport.
//!
//! The façade talks to the upstream services through the [`ApiTransport`]
//! trait; the reqwest-backed [`HttpClient`] is the production implementation.
//! Tests inject their own transport to exercise the façade without a network.

use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Result type for a single outbound call, before the façade names the
/// failed operation.
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// An authenticated JSON-over-HTTP collaborator.
///
/// Implementations attach the configured bearer credential to every request
/// and surface any network fault, non-2xx status or undecodable body as a
/// [`TransportError`].
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// GET `url` with the given query parameters, decoding the JSON body.
    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> TransportResult<Value>;

    /// POST a JSON body to `url`, decoding the JSON response.
    async fn post_json(&self, url: &str, body: &Value) -> TransportResult<Value>;
}

/// Builder for configuring the production HTTP client.
#[must_use]
pub struct HttpClientBuilder {
    bearer_token: String,
    timeout: Option<u64>,
    user_agent: Option<String>,
}

impl HttpClientBuilder {
    /// Create a builder with the bearer credential attached to every request.
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            bearer_token: bearer_token.into(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Set the request timeout in seconds.
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Set a custom User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Build the configured HTTP client.
    pub fn build(self) -> TransportResult<HttpClient> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(std::time::Duration::from_secs(timeout));
        }

        if let Some(ref ua) = self.user_agent {
            builder = builder.user_agent(ua.clone());
        }

        Ok(HttpClient {
            inner: builder.build()?,
            bearer_token: self.bearer_token,
        })
    }
}

/// reqwest-backed [`ApiTransport`] implementation.
pub struct HttpClient {
    inner: reqwest::Client,
    bearer_token: String,
}

impl HttpClient {
    /// Create a client with default settings and the given bearer credential.
    pub fn new(bearer_token: impl Into<String>) -> TransportResult<Self> {
        HttpClientBuilder::new(bearer_token).build()
    }

    async fn decode_response(response: reqwest::Response) -> TransportResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ApiTransport for HttpClient {
    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> TransportResult<Value> {
        debug!(%url, "GET");
        let mut request = self.inner.get(url).bearer_auth(&self.bearer_token);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        Self::decode_response(response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> TransportResult<Value> {
        debug!(%url, "POST");
        let response = self
            .inner
            .post(url)
            .bearer_auth(&self.bearer_token)
            .json(body)
            .send()
            .await?;

        Self::decode_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_default_settings() {
        let client = HttpClientBuilder::new("test-key").build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_builder_with_all_options() {
        let client = HttpClientBuilder::new("test-key")
            .timeout(30)
            .user_agent("coinkit-test/1.0")
            .build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_new_shortcut() {
        assert!(HttpClient::new("test-key").is_ok());
    }
}
