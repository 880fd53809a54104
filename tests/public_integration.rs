use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ariomex_api_client::rest::AriomexClient;

fn build_public_client(server: &MockServer) -> AriomexClient {
    AriomexClient::builder().base_url(server.uri()).build()
}

#[tokio::test]
async fn test_ping_is_unsigned() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "status": 200, "message": "pong" });

    Mock::given(method("GET"))
        .and(path("/v1/public/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let body = client.ping().await.unwrap();
    assert_eq!(body, response);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert!(request.headers.get("X-ARX-APIKEY").is_none());
    assert!(request.headers.get("X-ARX-SIGNATURE").is_none());
    assert_eq!(request.url.query(), None);
    assert_eq!(
        request.headers.get("Content-Type").unwrap(),
        "application/json"
    );
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn test_public_endpoints_stay_unsigned_with_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "time": 1 })))
        .mount(&server)
        .await;

    let client = AriomexClient::builder()
        .base_url(server.uri())
        .credentials(std::sync::Arc::new(
            ariomex_api_client::auth::StaticCredentials::new("key", "secret"),
        ))
        .build();
    client.time().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("X-ARX-APIKEY").is_none());
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_exchange_info_with_symbol() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/exchange_info"))
        .and(query_param("symbol", "BTCUSDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let body = client.exchange_info(Some("BTCUSDT")).await.unwrap();
    assert_eq!(body["data"], serde_json::json!([]));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("symbol=BTCUSDT"));
}

#[tokio::test]
async fn test_omitted_symbol_is_absent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/last_prices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    client.last_prices(None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_candlesticks_param_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/candlesticks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "s": "ok" })))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    client
        .candlesticks("ETHUSDT", "60", Some(1_700_000_000), None)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("symbol=ETHUSDT&resolution=60&from=1700000000")
    );
}

#[tokio::test]
async fn test_non_success_status_is_returned() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "status": 404, "message": "symbol not found" });

    Mock::given(method("GET"))
        .and(path("/v1/public/orderbook"))
        .respond_with(ResponseTemplate::new(404).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let body = client.orderbook(Some("NOPE")).await.unwrap();
    assert_eq!(body, response);
}

#[tokio::test]
async fn test_non_json_body_is_returned_as_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/swagger"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let body = client.swagger().await.unwrap();
    assert_eq!(body, serde_json::Value::String("Bad Gateway".to_string()));
}
