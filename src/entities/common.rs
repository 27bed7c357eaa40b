//! Shared columns - timestamp and soft-delete blocks embedded in every entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation / last-modification instants, both written by the repository
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    /// Timestamps of a freshly inserted row: both fields share the same instant
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
        }
    }
}

/// Soft-delete marker. A row is live while `deleted_at` is `None`
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct SoftDelete {
    pub deleted_at: Option<DateTime<Utc>>,
}

impl SoftDelete {
    pub fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}
