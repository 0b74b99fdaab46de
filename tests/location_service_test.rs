use booth_reserve::adapters::HttpLocationProvider;
use booth_reserve::core::LocationProvider;
use booth_reserve::{GeoCoordinate, LocationOutcome};
use httpmock::prelude::*;
use std::time::Duration;

fn provider(url: String) -> HttpLocationProvider {
    HttpLocationProvider::new(url, Duration::from_millis(500)).unwrap()
}

#[tokio::test]
async fn test_position_from_service() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/me");
            then.status(200)
                .json_body(serde_json::json!({ "latitude": 49.4431, "longitude": 1.0993 }));
        })
        .await;

    let outcome = provider(server.url("/me")).request_current_position().await;
    mock.assert_async().await;
    assert_eq!(
        outcome,
        LocationOutcome::Available(GeoCoordinate {
            latitude: 49.4431,
            longitude: 1.0993
        })
    );
}

#[tokio::test]
async fn test_short_field_names_are_accepted() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/ip");
            then.status(200)
                .json_body(serde_json::json!({ "lat": 48.8566, "lon": 2.3522, "city": "Paris" }));
        })
        .await;

    let outcome = provider(server.url("/ip")).request_current_position().await;
    assert!(matches!(outcome, LocationOutcome::Available(_)));
}

#[tokio::test]
async fn test_forbidden_means_permission_denied() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/me");
            then.status(403);
        })
        .await;

    let outcome = provider(server.url("/me")).request_current_position().await;
    assert_eq!(outcome, LocationOutcome::PermissionDenied);
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/me");
            then.status(503);
        })
        .await;

    let outcome = provider(server.url("/me")).request_current_position().await;
    match outcome {
        LocationOutcome::Error(detail) => assert!(detail.contains("503")),
        other => panic!("expected error outcome, got {:?}", other),
    }
}

#[tokio::test]
async fn test_out_of_range_position_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/me");
            then.status(200)
                .json_body(serde_json::json!({ "latitude": 123.0, "longitude": 1.0 }));
        })
        .await;

    let outcome = provider(server.url("/me")).request_current_position().await;
    assert!(matches!(outcome, LocationOutcome::Error(_)));
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .delay(Duration::from_secs(3))
                .json_body(serde_json::json!({ "latitude": 49.0, "longitude": 1.0 }));
        })
        .await;

    let outcome = provider(server.url("/slow")).request_current_position().await;
    assert_eq!(outcome, LocationOutcome::Error("délai dépassé".to_string()));
}

#[tokio::test]
async fn test_unreachable_service_is_unavailable() {
    let outcome = provider("http://127.0.0.1:1/me".to_string())
        .request_current_position()
        .await;
    assert_eq!(outcome, LocationOutcome::Unavailable);
}
