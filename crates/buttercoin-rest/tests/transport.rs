//! HTTP-level tests for the Buttercoin transport and client
//!
//! A local mockito server stands in for the API; the client is pointed at it
//! through the base URL override.

use buttercoin_auth::{sign, HttpVerb};
use buttercoin_rest::{
    ApiResponse, Body, ButtercoinClient, ClientConfig, Credentials, RequestDescriptor, RestError,
};
use mockito::Matcher;
use serde_json::{json, Value};

const API_KEY: &str = "test_access_key";
const API_SECRET: &str = "abcdefghijklmnopqrstuvwxyz123456";
const TIMESTAMP: u64 = 1403558182457;

fn body(value: Value) -> Body {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

fn public_client(server: &mockito::Server) -> ButtercoinClient {
    ButtercoinClient::new(ClientConfig::new().with_base_url(server.url())).unwrap()
}

fn auth_client(server: &mockito::Server) -> ButtercoinClient {
    let creds = Credentials::new(API_KEY, API_SECRET).unwrap();
    ButtercoinClient::new(
        ClientConfig::new()
            .with_credentials(creds)
            .with_base_url(server.url()),
    )
    .unwrap()
}

fn expected_signature(verb: HttpVerb, path: &str, url: &str, body: &str) -> String {
    sign(verb, path, url, TIMESTAMP, body, API_SECRET.as_bytes())
}

// =============================================================================
// Public endpoints
// =============================================================================

#[tokio::test]
async fn test_public_ticker_unsigned() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/ticker")
        .match_header("X-Buttercoin-Signature", Matcher::Missing)
        .match_header("X-Buttercoin-Access-Key", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"price": 100}"#)
        .create_async()
        .await;

    let ticker = public_client(&server).get_ticker(None).await.unwrap();
    assert_eq!(ticker, json!({"price": 100}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_trade_history_unwraps_trades() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/trades")
        .with_status(200)
        .with_body(r#"{"trades": [{"price": 650.5, "quantity": 1.2}]}"#)
        .create_async()
        .await;

    let trades = public_client(&server).get_trade_history(None).await.unwrap();
    assert_eq!(trades, json!([{"price": 650.5, "quantity": 1.2}]));
    mock.assert_async().await;
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_missing_credentials_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let get_mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let post_mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let delete_mock = server
        .mock("DELETE", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = public_client(&server);
    let err = client.get_balances(None).await.unwrap_err();
    assert!(matches!(err, RestError::MissingCredentials));
    assert!(err.is_configuration_error());

    let err = client
        .create_order(body(json!({"side": "buy"})), None)
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::MissingCredentials));

    let err = client.cancel_order("abc", None).await.unwrap_err();
    assert!(matches!(err, RestError::MissingCredentials));

    get_mock.assert_async().await;
    post_mock.assert_async().await;
    delete_mock.assert_async().await;
}

#[tokio::test]
async fn test_signed_get_headers() {
    let mut server = mockito::Server::new_async().await;
    let url = format!("{}/v1/key", server.url());
    let signature = expected_signature(HttpVerb::Get, "key", &url, "");

    let mock = server
        .mock("GET", "/v1/key")
        .match_header("X-Buttercoin-Access-Key", API_KEY)
        .match_header("X-Buttercoin-Signature", signature.as_str())
        .match_header("X-Buttercoin-Date", TIMESTAMP.to_string().as_str())
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(r#"{"permissions": ["READ", "TRADE"]}"#)
        .create_async()
        .await;

    let permissions = auth_client(&server).get_key(Some(TIMESTAMP)).await.unwrap();
    assert_eq!(permissions, json!(["READ", "TRADE"]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_query_is_signed_and_keeps_colons() {
    let mut server = mockito::Server::new_async().await;
    let query = "limit=10&before=2024-01-01T00:00:00";
    let url = format!("{}/v1/orders?{}", server.url(), query);
    let signature = expected_signature(HttpVerb::Get, "orders", &url, "");

    let mock = server
        .mock("GET", "/v1/orders")
        .match_query(Matcher::Regex("before=2024-01-01T00:00:00".to_string()))
        .match_header("X-Buttercoin-Signature", signature.as_str())
        .with_status(200)
        .with_body(r#"{"results": [{"orderId": "a1"}]}"#)
        .create_async()
        .await;

    let params = body(json!({"limit": 10, "before": "2024-01-01T00:00:00"}));
    let orders = auth_client(&server)
        .get_orders(Some(params), Some(TIMESTAMP))
        .await
        .unwrap();
    assert_eq!(orders, json!([{"orderId": "a1"}]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_signs_the_sent_body() {
    let mut server = mockito::Server::new_async().await;
    let order = json!({
        "instrument": "BTC_USD",
        "side": "buy",
        "orderType": "limit",
        "price": "700.00",
        "quantity": "5"
    });
    let sent = serde_json::to_string(&order).unwrap();
    let url = format!("{}/v1/orders", server.url());
    let signature = expected_signature(HttpVerb::Post, "orders", &url, &sent);
    let location = format!("{}/v1/orders/123", server.url());

    let mock = server
        .mock("POST", "/v1/orders")
        .match_header("X-Buttercoin-Signature", signature.as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Exact(sent.clone()))
        .with_status(202)
        .with_header("Location", &location)
        .create_async()
        .await;

    let result = auth_client(&server)
        .create_order(body(order), Some(TIMESTAMP))
        .await
        .unwrap();
    assert_eq!(result, ApiResponse::Accepted(location));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generated_timestamp_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/account/balances")
        .match_header("X-Buttercoin-Date", Matcher::Regex(r"^\d{13}$".to_string()))
        .with_status(200)
        .with_body(r#"{"USD": 100.0, "BTC": 0.5}"#)
        .create_async()
        .await;

    let balances = auth_client(&server).get_balances(None).await.unwrap();
    assert_eq!(balances["BTC"], json!(0.5));
    mock.assert_async().await;
}

// =============================================================================
// Response classification
// =============================================================================

#[tokio::test]
async fn test_withdrawal_requires_confirmation() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/transactions/withdraw")
        .with_status(201)
        .with_body("not json")
        .create_async()
        .await;

    let result = auth_client(&server)
        .create_withdrawal(body(json!({"method": "wire", "currency": "USD", "amount": "100"})), None)
        .await
        .unwrap();
    assert!(matches!(result, ApiResponse::ConfirmationRequired { status: 201, .. }));
    assert_eq!(result.message(), Some("This operation requires email confirmation"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_cancel_order_no_content() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1/orders/abc")
        .with_status(204)
        .create_async()
        .await;

    let result = auth_client(&server).cancel_order("abc", None).await.unwrap();
    assert_eq!(result.status(), 204);
    assert_eq!(result.message(), Some("This operation has completed successfully"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_api_error_surfaces_message_and_ids() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/transactions/send")
        .with_status(400)
        .with_body(r#"{"errors":[{"message":"Insufficient funds"}], "unique_id":"abc123"}"#)
        .create_async()
        .await;

    let err = auth_client(&server)
        .send_bitcoin(body(json!({"currency": "BTC", "amount": "5", "destination": "1Abc"})), None)
        .await
        .unwrap_err();

    assert!(err.is_api_error());
    assert_eq!(err.status(), Some(400));
    let text = err.to_string();
    assert!(text.contains("Insufficient funds"));
    assert!(text.contains("abc123"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unlisted_status_is_unclassified() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/orderbook")
        .with_status(304)
        .create_async()
        .await;

    let err = public_client(&server).get_order_book(None).await.unwrap_err();
    assert!(matches!(err, RestError::UnclassifiedResponse { status: 304 }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_redirect_is_not_followed() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/ticker")
        .with_status(302)
        .with_header("Location", "https://elsewhere.example.com/v1/ticker")
        .create_async()
        .await;

    let err = public_client(&server).get_ticker(None).await.unwrap_err();
    assert!(matches!(err, RestError::UnclassifiedResponse { status: 302 }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_order_by_url_uses_path_suffix() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/orders/xyz")
        .with_status(200)
        .with_body(r#"{"orderId": "xyz", "status": "opened"}"#)
        .create_async()
        .await;

    let order = auth_client(&server)
        .get_order_by_url("https://api.buttercoin.com/v1/orders/xyz", None)
        .await
        .unwrap();
    assert_eq!(order["status"], json!("opened"));
    mock.assert_async().await;
}

#[test]
fn test_request_descriptor_is_read_only() {
    let request = RequestDescriptor::get("orders")
        .with_body(body(json!({"status": "opened"})))
        .with_timestamp(Some(TIMESTAMP))
        .public();

    assert_eq!(request.verb(), HttpVerb::Get);
    assert_eq!(request.path(), "orders");
    assert_eq!(request.body(), &body(json!({"status": "opened"})));
    assert_eq!(request.timestamp(), Some(TIMESTAMP));
    assert!(!request.authenticate());

    let copy = request.clone();
    assert_eq!(copy, request);
}

#[tokio::test]
async fn test_raw_request_descriptor() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1/transactions/t-1")
        .with_status(204)
        .create_async()
        .await;

    let result = auth_client(&server)
        .request(RequestDescriptor::delete("transactions/t-1"))
        .await
        .unwrap();
    assert!(matches!(result, ApiResponse::NoContent { .. }));
    mock.assert_async().await;
}

// =============================================================================
// Transport failures
// =============================================================================

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // nothing listens on the discard port
    let client =
        ButtercoinClient::new(ClientConfig::new().with_base_url("http://127.0.0.1:9")).unwrap();
    let err = client.get_ticker(None).await.unwrap_err();
    assert!(err.is_transport_error());
}
