//! Zoo API library - exposes the modules and the router for the binary and the tests

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod seed;
pub mod services;

// Re-export of the main types for easier imports
pub use core::{AppError, AppState, Config};

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Creates the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::{animal, exhibit, health, not_found, staff};

    Router::new()
        .route("/health", get(health))
        .nest("/exhibits", exhibit::routes())
        .nest("/animals", animal::routes())
        .nest("/staff", staff::routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
