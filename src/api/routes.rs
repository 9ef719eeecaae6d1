//! API route configuration.

use crate::api::handlers::{
    assign_handler, create_package_handler, create_truck_handler, get_package_handler,
    get_truck_handler, health_handler, truck_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /add-truck`      - Register a truck
/// - `POST /add-package`    - Register a package
/// - `POST /assign-truck`   - Run an assignment
/// - `GET  /trucks`         - List trucks (`?available=true` to filter)
/// - `GET  /trucks/{id}`    - Truck details
/// - `GET  /packages/{id}`  - Package details and assignment
/// - `GET  /health`         - Record store health check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add-truck", post(create_truck_handler))
        .route("/add-package", post(create_package_handler))
        .route("/assign-truck", post(assign_handler))
        .route("/trucks", get(truck_list_handler))
        .route("/trucks/{id}", get(get_truck_handler))
        .route("/packages/{id}", get(get_package_handler))
        .route("/health", get(health_handler))
}
