//! Exhibit DTOs - read projection, create payload, partial-update payload

use super::patch::{double_option, reject_null};
use crate::entities::Exhibit;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Read view returned by every exhibit endpoint, soft-deleted rows included
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExhibitDTO {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Exhibit> for ExhibitDTO {
    fn from(value: Exhibit) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            location: value.location,
            created_at: value.timestamps.created_at,
            updated_at: value.timestamps.updated_at,
            deleted_at: value.soft_delete.deleted_at,
        }
    }
}

/// DTO for creating an exhibit (id, timestamps and deleted_at are server-assigned)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateExhibitDTO {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// DTO for updating an exhibit, see [`super::patch`] for the field encoding
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateExhibitDTO {
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
}

impl Validate for UpdateExhibitDTO {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        reject_null(&mut errors, "name", &self.name);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
