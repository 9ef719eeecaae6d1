mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use warehouse_loader::domain::assignment::Strategy;

#[tokio::test]
async fn test_add_package_success() {
    let server = common::create_test_server(Strategy::LengthFirstFitDecreasing);

    let response = server
        .post("/add-package")
        .json(&json!({ "length": 5, "width": 1, "height": 1 }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "created");

    let package_id = json["package_id"].as_str().unwrap();
    let package = common::get_json(&server, &format!("/packages/{}", package_id)).await;
    assert_eq!(package["volume"], 5.0);
    assert!(package["assigned_truck_id"].is_null());
}

#[tokio::test]
async fn test_add_package_zero_dimension() {
    let server = common::create_test_server(Strategy::LengthFirstFitDecreasing);

    let response = server
        .post("/add-package")
        .json(&json!({ "length": 0, "width": 1, "height": 1 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "invalid_dimension");
    assert_eq!(json["error"]["details"]["field"], "length");
}

#[tokio::test]
async fn test_get_package_not_found() {
    let server = common::create_test_server(Strategy::LengthFirstFitDecreasing);

    let response = server.get("/packages/missing").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "package_not_found"
    );
}

#[tokio::test]
async fn test_package_ids_are_unique() {
    let server = common::create_test_server(Strategy::LengthFirstFitDecreasing);

    let first = common::add_package(&server, 1.0, 1.0, 1.0).await;
    let second = common::add_package(&server, 1.0, 1.0, 1.0).await;

    assert_ne!(first, second);
}

#[tokio::test]
async fn test_add_package_volume_overflow_rejected() {
    let server = common::create_test_server(Strategy::LengthFirstFitDecreasing);

    let response = server
        .post("/add-package")
        .json(&json!({ "length": "1e200", "width": 1e200, "height": 1e200 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["details"]["field"],
        "volume"
    );
}
