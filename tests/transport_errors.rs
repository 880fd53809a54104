use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ariomex_api_client::AriomexError;
use ariomex_api_client::rest::AriomexClient;

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on port 1.
    let client = AriomexClient::builder()
        .base_url("http://127.0.0.1:1")
        .build();

    let error = client.ping().await.unwrap_err();
    assert!(error.is_transport());
    assert!(!error.message().is_empty());
    assert!(error.to_string().starts_with("Failed to send request: "));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/time"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "time": 1 }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = AriomexClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(200))
        .build();

    let error = client.time().await.unwrap_err();
    assert!(matches!(error, AriomexError::Transport { .. }));
}

#[tokio::test]
async fn test_redirect_loop_is_transport_error() {
    let server = MockServer::start().await;
    let location = format!("{}/v1/public/ping", server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/public/ping"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", location.as_str()))
        .mount(&server)
        .await;

    let client = AriomexClient::builder()
        .base_url(server.uri())
        .max_redirects(3)
        .build();

    let error = client.ping().await.unwrap_err();
    assert!(error.is_transport());
}

#[tokio::test]
async fn test_redirect_is_followed() {
    let server = MockServer::start().await;
    let location = format!("{}/v1/public/time", server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/public/ping"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", location.as_str()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/public/time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "time": 7 })))
        .mount(&server)
        .await;

    let client = AriomexClient::builder().base_url(server.uri()).build();
    let body = client.ping().await.unwrap();
    assert_eq!(body["time"], 7);
}
