//! Core Module - infrastructure components of the application
//!
//! - Configuration
//! - Database pool and migrations
//! - Error shaping and extractors
//! - Application state

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use state::AppState;
