//! Animal entity - optionally housed in an exhibit

use super::common::{SoftDelete, Timestamps};
use crate::dtos::UpdateAnimalDTO;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Animal {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub species: Option<String>,
    // the referenced exhibit may itself be soft-deleted; orphans are tolerated
    pub exhibit_id: Option<i64>,
    #[sqlx(flatten)]
    pub timestamps: Timestamps,
    #[sqlx(flatten)]
    pub soft_delete: SoftDelete,
}

impl Animal {
    /// Merges the supplied fields of `patch` into `self`; omitted fields stay as they are
    pub fn apply(&mut self, patch: &UpdateAnimalDTO) {
        if let Some(Some(name)) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(species) = &patch.species {
            self.species = species.clone();
        }
        if let Some(exhibit_id) = patch.exhibit_id {
            self.exhibit_id = exhibit_id;
        }
    }
}
