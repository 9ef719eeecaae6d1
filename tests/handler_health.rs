mod common;

use axum_test::TestServer;
use warehouse_loader::domain::assignment::Strategy;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server(Strategy::LengthFirstFitDecreasing);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(
        json["checks"]["store"]["message"],
        "memory connected, 0 trucks available"
    );
}

#[tokio::test]
async fn test_health_counts_available_trucks() {
    let server = common::create_test_server(Strategy::LengthFirstFitDecreasing);
    common::add_truck(&server, 10.0, 2.0, 2.0).await;
    common::add_truck(&server, 8.0, 2.0, 2.0).await;

    let json = common::get_json(&server, "/health").await;

    assert_eq!(
        json["checks"]["store"]["message"],
        "memory connected, 2 trucks available"
    );
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server: TestServer = common::create_test_server(Strategy::VolumeBestFit);

    let json = common::get_json(&server, "/health").await;

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("store").is_some());
}

#[tokio::test]
async fn test_health_reports_default_strategy() {
    let server = common::create_test_server(Strategy::VolumeBestFit);

    let json = common::get_json(&server, "/health").await;

    assert_eq!(json["default_strategy"], "volume-best-fit");
}
