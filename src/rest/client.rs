//! Ariomex REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;

use crate::auth::{
    Credentials, CredentialsProvider, StaticCredentials, SystemTimestamp, TimestampProvider,
};
use crate::error::AriomexError;
use crate::rest::endpoints::{ARIOMEX_BASE_URL, Endpoint};
use crate::rest::params::Params;
use crate::rest::request::{API_KEY_HEADER, SIGNATURE_HEADER, prepare};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
/// Default number of redirects followed.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// The Ariomex REST API client.
///
/// One flat client exposes every endpoint. Calls share no mutable state, so a
/// client can be cloned and used from many tasks at once.
///
/// Every call returns the decoded response body as-is, whatever the HTTP
/// status. Only network failures become errors.
///
/// # Example
///
/// ```rust,no_run
/// use ariomex_api_client::rest::AriomexClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = AriomexClient::new();
///
///     let time = client.time().await?;
///     println!("Server time: {time}");
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use ariomex_api_client::rest::AriomexClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = AriomexClient::with_credentials("api_key", "api_secret");
///
///     let balance = client.get_balance().await?;
///     println!("Balance: {balance}");
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct AriomexClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Arc<dyn CredentialsProvider>,
    timestamp_provider: Arc<dyn TimestampProvider>,
}

impl AriomexClient {
    /// Create a new client without credentials.
    ///
    /// Private endpoints are still signed, with an empty key and secret.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a client with an API key and secret.
    pub fn with_credentials(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::builder()
            .credentials(Arc::new(StaticCredentials::new(api_key, api_secret)))
            .build()
    }

    /// Create a new client builder.
    pub fn builder() -> AriomexClientBuilder {
        AriomexClientBuilder::new()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn credentials(&self) -> &Credentials {
        self.credentials.get_credentials()
    }

    /// Send one request to an endpoint and return the decoded body.
    ///
    /// Endpoint methods on this client are thin wrappers around this call; it
    /// is public so endpoints not covered by a method can still be reached.
    pub async fn dispatch(&self, endpoint: Endpoint, params: Params) -> Result<Value, AriomexError> {
        let timestamp = self.timestamp_provider.now_millis();
        let request = prepare(&endpoint, params, self.credentials(), timestamp);

        tracing::debug!(
            method = %request.method,
            path = endpoint.path,
            private = endpoint.requires_auth(),
            "dispatching request"
        );

        let url = format!("{}{}", self.base_url, request.path_and_query);
        let mut builder = self
            .http_client
            .request(request.method.into(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(auth) = &request.auth {
            builder = builder
                .header(API_KEY_HEADER, auth.api_key.as_str())
                .header(SIGNATURE_HEADER, auth.signature.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(%status, path = endpoint.path, "received response");

        Ok(decode_body(body))
    }
}

/// Decode a response body.
///
/// JSON is parsed; anything else is handed back as a string, and an empty body
/// becomes `null`.
fn decode_body(body: String) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}

impl Default for AriomexClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AriomexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AriomexClient")
            .field("base_url", &self.base_url)
            .field("credentials", self.credentials())
            .finish()
    }
}

/// Builder for [`AriomexClient`].
pub struct AriomexClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    user_agent: Option<String>,
    timeout: Duration,
    max_redirects: usize,
}

impl AriomexClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: ARIOMEX_BASE_URL.to_string(),
            credentials: None,
            timestamp_provider: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the credentials provider for private requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom timestamp source.
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set how many redirects are followed before giving up.
    pub fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Build the client.
    pub fn build(self) -> AriomexClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("ariomex-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("ariomex-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(self.max_redirects))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let credentials = self
            .credentials
            .unwrap_or_else(|| Arc::new(StaticCredentials::default()));
        let timestamp_provider = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(SystemTimestamp::new()));

        AriomexClient {
            http_client: client,
            base_url: self.base_url,
            credentials,
            timestamp_provider,
        }
    }
}

impl Default for AriomexClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_json_body() {
        let value = decode_body(r#"{"status":"ok","data":[1,2]}"#.to_string());
        assert_eq!(value["status"], "ok");
        assert_eq!(value["data"][1], 2);
    }

    #[test]
    fn test_decode_non_json_body() {
        let value = decode_body("<html>Bad Gateway</html>".to_string());
        assert_eq!(value, Value::String("<html>Bad Gateway</html>".to_string()));
    }

    #[test]
    fn test_decode_empty_body() {
        assert_eq!(decode_body(String::new()), Value::Null);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = AriomexClient::builder()
            .base_url("http://localhost:8080/")
            .build();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_debug_hides_secret() {
        let client = AriomexClient::with_credentials("my_key", "super_secret");
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
    }
}
