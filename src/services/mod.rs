//! Services module - HTTP handlers
//!
//! `resource` holds the generic CRUD handlers, `relationship` the exhibit
//! sub-collections; the per-entity modules wire them to routes.

pub mod animal;
pub mod exhibit;
pub mod relationship;
pub mod resource;
pub mod staff;

pub use resource::Resource;

use crate::core::AppError;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: String,
    pub code: u16,
    pub timestamp: DateTime<Utc>,
}

/// Health check
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "OK".to_string(),
        code: 200,
        timestamp: Utc::now(),
    })
}

/// Fallback for unmatched routes
pub async fn not_found() -> AppError {
    AppError::not_found("Not Found")
}
