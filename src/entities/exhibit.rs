//! Exhibit entity - an area of the zoo that hosts animals and staff

use super::common::{SoftDelete, Timestamps};
use crate::dtos::UpdateExhibitDTO;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Exhibit {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    #[sqlx(flatten)]
    pub timestamps: Timestamps,
    #[sqlx(flatten)]
    pub soft_delete: SoftDelete,
}

impl Exhibit {
    /// Merges the supplied fields of `patch` into `self`; omitted fields stay as they are
    pub fn apply(&mut self, patch: &UpdateExhibitDTO) {
        if let Some(Some(name)) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(location) = &patch.location {
            self.location = location.clone();
        }
    }
}
