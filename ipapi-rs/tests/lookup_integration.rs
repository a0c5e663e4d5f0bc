//! Integration tests for the ipapi client against a mock server.

use std::time::Duration;

use ipapi_rs::{Config, IpApi, IpApiError};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server_uri: &str, timeout: Duration) -> IpApi {
    let config = Config {
        base_url: server_uri.to_string(),
        timeout,
    };
    IpApi::init("test-key", Some(config)).unwrap()
}

#[tokio::test]
async fn test_lookup_success_returns_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/8.8.8.8"))
        .and(query_param("access_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "8.8.8.8",
            "type": "ipv4",
            "country_name": "United States",
            "city": "Mountain View",
            "latitude": 37.5,
            "longitude": -122.25,
            "location": { "country_flag": "https://assets.ipstack.com/flags/us.svg" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ipapi = client_for(&mock_server.uri(), Duration::from_secs(10));
    let result = ipapi.lookup("8.8.8.8").await.unwrap();

    assert_eq!(result.ip.as_deref(), Some("8.8.8.8"));
    assert_eq!(result.city.as_deref(), Some("Mountain View"));
    assert_eq!(result.latitude, Some(37.5));
    assert_eq!(result.longitude, Some(-122.25));
    assert_eq!(
        result.location.and_then(|l| l.country_flag).as_deref(),
        Some("https://assets.ipstack.com/flags/us.svg")
    );
}

#[tokio::test]
async fn test_lookup_ipv6_address_in_path() {
    let mock_server = MockServer::start().await;
    let address = "2001:4860:4860:0000:0000:0000:0000:8888";

    Mock::given(method("GET"))
        .and(path(format!("/{address}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ip": address })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ipapi = client_for(&mock_server.uri(), Duration::from_secs(10));
    let result = ipapi.lookup(address).await.unwrap();
    assert_eq!(result.ip.as_deref(), Some(address));
}

#[tokio::test]
async fn test_lookup_non_success_status_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/8.8.8.8"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "error": {
                "code": 101,
                "type": "invalid_access_key",
                "info": "You have not supplied a valid API Access Key."
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ipapi = client_for(&mock_server.uri(), Duration::from_secs(10));
    let err = ipapi.lookup("8.8.8.8").await.unwrap_err();

    match err {
        IpApiError::Api { status, message } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, "You have not supplied a valid API Access Key.");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_empty_error_body_uses_status_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let ipapi = client_for(&mock_server.uri(), Duration::from_secs(10));
    let err = ipapi.lookup("8.8.8.8").await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    assert_eq!(
        err.to_string(),
        "ipapi returned error (503 Service Unavailable): Service Unavailable"
    );
}

#[tokio::test]
async fn test_lookup_error_envelope_with_ok_status_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": {
                "code": 104,
                "type": "usage_limit_reached",
                "info": "Monthly limit reached."
            }
        })))
        .mount(&mock_server)
        .await;

    let ipapi = client_for(&mock_server.uri(), Duration::from_secs(10));
    let err = ipapi.lookup("8.8.8.8").await.unwrap_err();

    match err {
        IpApiError::Api { status, message } => {
            assert_eq!(status, StatusCode::OK);
            assert_eq!(message, "Monthly limit reached.");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let ipapi = client_for(&mock_server.uri(), Duration::from_secs(10));
    let err = ipapi.lookup("8.8.8.8").await.unwrap_err();
    assert!(matches!(err, IpApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_lookup_wrong_field_type_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "8.8.8.8",
            "latitude": "north"
        })))
        .mount(&mock_server)
        .await;

    let ipapi = client_for(&mock_server.uri(), Duration::from_secs(10));
    let err = ipapi.lookup("8.8.8.8").await.unwrap_err();
    assert!(matches!(err, IpApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_lookup_slow_response_is_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "ip": "8.8.8.8" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let timeout = Duration::from_millis(200);
    let ipapi = client_for(&mock_server.uri(), timeout);
    let err = ipapi.lookup("8.8.8.8").await.unwrap_err();

    match err {
        IpApiError::Timeout(elapsed) => assert_eq!(elapsed, timeout),
        other => panic!("expected Timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_unreachable_host_is_network_error() {
    // Grab a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let ipapi = client_for(&format!("http://{addr}"), Duration::from_secs(5));
    let err = ipapi.lookup("8.8.8.8").await.unwrap_err();
    assert!(matches!(err, IpApiError::Network(_)), "got {err:?}");
}
