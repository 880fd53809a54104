//! Request preparation: timestamp injection, signing and verb layout.

use crate::auth::{Credentials, sign_payload};
use crate::rest::endpoints::{Endpoint, HttpMethod};
use crate::rest::params::Params;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-ARX-APIKEY";
/// Header carrying the hex signature.
pub const SIGNATURE_HEADER: &str = "X-ARX-SIGNATURE";
/// Name of the injected timestamp parameter.
pub const TIMESTAMP_PARAM: &str = "timestamp";

/// A fully laid out request, ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    /// HTTP verb.
    pub method: HttpMethod,
    /// Endpoint path plus `?query` for GET and DELETE.
    pub path_and_query: String,
    /// JSON body for POST.
    pub body: Option<String>,
    /// The string that was signed. Empty for public endpoints.
    pub signed_payload: String,
    /// Auth headers for private endpoints.
    pub auth: Option<AuthHeaders>,
}

/// Values for the `X-ARX-APIKEY` and `X-ARX-SIGNATURE` headers.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// API key.
    pub api_key: String,
    /// Hex HMAC-SHA256 of the signed payload.
    pub signature: String,
}

impl std::fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthHeaders")
            .field("api_key", &self.api_key)
            .field("signature", &"[REDACTED]")
            .finish()
    }
}

/// Lay out one request.
///
/// For private endpoints `timestamp` is appended last and the canonical query
/// string of all parameters is signed, whatever the verb. GET and DELETE send
/// that same string as the query; POST sends the parameters as a JSON object.
pub fn prepare(
    endpoint: &Endpoint,
    mut params: Params,
    credentials: &Credentials,
    timestamp_millis: u64,
) -> PreparedRequest {
    if endpoint.requires_auth() {
        params.push(TIMESTAMP_PARAM, timestamp_millis.to_string());
    }

    let query = params.to_query_string();

    let auth = endpoint.requires_auth().then(|| AuthHeaders {
        api_key: credentials.api_key.clone(),
        signature: sign_payload(credentials, &query),
    });

    let (path_and_query, body) = if endpoint.method.sends_body() {
        // Params only hold strings and numbers, which always serialize.
        let body = serde_json::to_string(&params).unwrap_or_else(|_| "{}".to_string());
        (endpoint.path.to_string(), Some(body))
    } else if query.is_empty() {
        (endpoint.path.to_string(), None)
    } else {
        (format!("{}?{}", endpoint.path, query), None)
    };

    PreparedRequest {
        method: endpoint.method,
        path_and_query,
        body,
        signed_payload: if auth.is_some() { query } else { String::new() },
        auth,
    }
}
