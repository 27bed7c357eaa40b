//! Animal DTOs - read projection, create payload, partial-update payload

use super::patch::{double_option, reject_null};
use crate::entities::Animal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnimalDTO {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub species: Option<String>,
    pub exhibit_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Animal> for AnimalDTO {
    fn from(value: Animal) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            species: value.species,
            exhibit_id: value.exhibit_id,
            created_at: value.timestamps.created_at,
            updated_at: value.timestamps.updated_at,
            deleted_at: value.soft_delete.deleted_at,
        }
    }
}

/// DTO for creating an animal (id, timestamps and deleted_at are server-assigned)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateAnimalDTO {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub exhibit_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateAnimalDTO {
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub species: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub exhibit_id: Option<Option<i64>>,
}

impl Validate for UpdateAnimalDTO {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        reject_null(&mut errors, "name", &self.name);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
