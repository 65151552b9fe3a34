use axum::{Router, routing::get};

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod params;
pub mod services;
pub mod users;
pub mod vehicles;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(users::router())
        .merge(services::router())
        .merge(vehicles::router())
}
