//! API route handlers

pub mod contracts;
pub mod health;
pub mod loans;
pub mod price;

use axum::{routing::get, Router};

use crate::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/price", price::router())
        .nest("/loans", loans::router())
        .nest("/contracts", contracts::router())
        .with_state(state)
}
