#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;
use warehouse_loader::api::routes::routes;
use warehouse_loader::domain::assignment::{AssignmentEngine, Strategy};
use warehouse_loader::infrastructure::persistence::{
    PgAssignmentRepository, PgPackageRepository, PgTruckRepository,
};
use warehouse_loader::state::AppState;

/// State over a fresh in-memory store.
pub fn create_test_state(strategy: Strategy) -> AppState {
    AppState::in_memory(AssignmentEngine::new(strategy))
}

/// State over PostgreSQL, for `#[sqlx::test]` cases.
pub fn create_pg_state(pool: PgPool, strategy: Strategy) -> AppState {
    let pool = Arc::new(pool);
    AppState::new(
        Arc::new(PgTruckRepository::new(pool.clone())),
        Arc::new(PgPackageRepository::new(pool.clone())),
        Arc::new(PgAssignmentRepository::new(pool)),
        AssignmentEngine::new(strategy),
        "postgres",
    )
}

pub fn create_test_server(strategy: Strategy) -> TestServer {
    server_for(create_test_state(strategy))
}

pub fn server_for(state: AppState) -> TestServer {
    TestServer::new(routes().with_state(state)).unwrap()
}

pub async fn add_truck(server: &TestServer, length: f64, width: f64, height: f64) -> String {
    let response = server
        .post("/add-truck")
        .json(&json!({ "length": length, "width": width, "height": height }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["truck_id"]
        .as_str()
        .unwrap()
        .to_string()
}

pub async fn add_package(server: &TestServer, length: f64, width: f64, height: f64) -> String {
    let response = server
        .post("/add-package")
        .json(&json!({ "length": length, "width": width, "height": height }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["package_id"]
        .as_str()
        .unwrap()
        .to_string()
}

pub async fn get_json(server: &TestServer, path: &str) -> Value {
    let response = server.get(path).await;
    response.assert_status_ok();
    response.json::<Value>()
}
