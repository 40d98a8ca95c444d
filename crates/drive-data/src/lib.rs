//! HTTP and GraphQL client utilities for DriveDesk.
//!
//! Every outbound call the storefront makes (GraphQL queries and mutations,
//! the payment-intent endpoint, the card processor) goes through a
//! [`FetchClient`], which applies a base URL, default headers and a total
//! timeout on top of a pluggable [`Transport`].
//!
//! # Example
//!
//! ```rust,ignore
//! use drive_data::{FetchClient, TimeoutConfig};
//!
//! let client = FetchClient::reqwest(TimeoutConfig::default())?
//!     .with_base_url("http://localhost:3000");
//!
//! let secret: String = client
//!     .post("/api/create-payment-intent")
//!     .json(&body)?
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod graphql;
mod request;
mod response;
mod timeout;
mod transport;

use std::collections::BTreeMap;
use std::sync::Arc;

pub use error::FetchError;
pub use graphql::GraphqlClient;
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use timeout::TimeoutConfig;
pub use transport::{ReqwestTransport, Transport};

/// HTTP client for making outbound requests.
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn Transport>,
    base_url: Option<String>,
    default_headers: BTreeMap<String, String>,
    timeouts: TimeoutConfig,
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("timeouts", &self.timeouts)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a client over an explicit transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: None,
            default_headers: BTreeMap::new(),
            timeouts: TimeoutConfig::default(),
        }
    }

    /// Create a client over a fresh [`ReqwestTransport`].
    pub fn reqwest(timeouts: TimeoutConfig) -> Result<Self, FetchError> {
        let transport = ReqwestTransport::new(timeouts)?;
        Ok(Self::new(Arc::new(transport)).with_timeouts(timeouts))
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Override the timeouts enforced around each request.
    pub fn with_timeouts(mut self, timeouts: TimeoutConfig) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// The timeouts enforced around each request.
    pub fn timeouts(&self) -> TimeoutConfig {
        self.timeouts
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/'))
            }
            _ => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            builder,
            transport: Arc::clone(&self.transport),
            timeouts: self.timeouts,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
    timeouts: TimeoutConfig,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize + ?Sized>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// The request as it will be sent.
    pub fn describe(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request, failing with [`FetchError::Timeout`] if the
    /// transport does not answer within the total timeout.
    pub async fn send(self) -> Result<Response, FetchError> {
        let method = self.builder.method;
        let url = self.builder.url.clone();
        tracing::debug!(method = method.as_str(), %url, "sending request");

        let total = self.timeouts.total;
        let response = tokio::time::timeout(total, self.transport.send(self.builder))
            .await
            .map_err(|_| FetchError::Timeout(total))?;

        match &response {
            Ok(resp) => tracing::debug!(method = method.as_str(), %url, status = resp.status, "received response"),
            Err(e) => tracing::warn!(method = method.as_str(), %url, error = %e, "request failed"),
        }
        response
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, GraphqlClient, Method, Response, TimeoutConfig, Transport};
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;

    /// Replays scripted responses and records every request it receives.
    #[derive(Default)]
    pub struct ScriptedTransport {
        pub responses: Mutex<VecDeque<Result<Response, FetchError>>>,
        pub requests: Mutex<Vec<RequestBuilder>>,
        pub delay: Option<Duration>,
    }

    impl ScriptedTransport {
        pub fn replying(responses: Vec<Response>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().map(Ok).collect()),
                ..Default::default()
            }
        }

        pub fn sent(&self) -> Vec<RequestBuilder> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
            self.requests.lock().unwrap().push(request);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::RequestError("no scripted response".into())))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::testing::ScriptedTransport;
    use super::*;

    #[tokio::test]
    async fn test_base_url_joins_relative_paths() {
        let transport = Arc::new(ScriptedTransport::replying(vec![Response::json_body(
            200,
            &serde_json::json!("ok"),
        )]));
        let client = FetchClient::new(transport.clone()).with_base_url("http://localhost:3000/");

        client.post("/api/create-payment-intent").send().await.unwrap();

        assert_eq!(
            transport.sent()[0].url,
            "http://localhost:3000/api/create-payment-intent"
        );
    }

    #[tokio::test]
    async fn test_absolute_url_bypasses_base() {
        let transport = Arc::new(ScriptedTransport::replying(vec![Response::json_body(
            200,
            &serde_json::json!({}),
        )]));
        let client = FetchClient::new(transport.clone())
            .with_base_url("http://localhost:3000")
            .with_default_header("X-Client", "drive");

        client.get("https://api.example.com/v1/x").send().await.unwrap();

        let sent = &transport.sent()[0];
        assert_eq!(sent.url, "https://api.example.com/v1/x");
        assert_eq!(sent.headers.get("X-Client").unwrap(), "drive");
    }

    #[tokio::test]
    async fn test_hung_transport_times_out() {
        let transport = Arc::new(ScriptedTransport {
            delay: Some(Duration::from_secs(5)),
            ..Default::default()
        });
        let client = FetchClient::new(transport)
            .with_timeouts(TimeoutConfig::from_total(Duration::from_millis(20)));

        let err = client.get("http://localhost/slow").send().await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout(d) if d == Duration::from_millis(20)));
        assert!(err.is_transport());
    }
}
