//! Application State - repositories and configuration shared by every handler

use super::config::Config;
use crate::repositories::{AnimalRepository, ExhibitRepository, StaffRepository};
use sqlx::SqlitePool;

/// Global application state shared by all routes
pub struct AppState {
    /// Repository for exhibits
    pub exhibit: ExhibitRepository,

    /// Repository for animals
    pub animal: AnimalRepository,

    /// Repository for staff members
    pub staff: StaffRepository,

    pub config: Config,
}

impl AppState {
    /// Creates a new AppState, handing every repository a clone of the pool
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self {
            exhibit: ExhibitRepository::new(pool.clone()),
            animal: AnimalRepository::new(pool.clone()),
            staff: StaffRepository::new(pool),
            config,
        }
    }
}
