//! Staff DTOs - read projection, create payload, partial-update payload

use super::patch::{double_option, reject_null};
use crate::entities::Staff;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StaffDTO {
    pub id: i64,
    pub name: String,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub exhibit_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Staff> for StaffDTO {
    fn from(value: Staff) -> Self {
        Self {
            id: value.id,
            name: value.name,
            job_title: value.job_title,
            email: value.email,
            phone: value.phone,
            notes: value.notes,
            exhibit_id: value.exhibit_id,
            created_at: value.timestamps.created_at,
            updated_at: value.timestamps.updated_at,
            deleted_at: value.soft_delete.deleted_at,
        }
    }
}

/// DTO for creating a staff member (id, timestamps and deleted_at are server-assigned)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateStaffDTO {
    pub name: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    #[validate(email(message = "value is not a valid email address"))]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub exhibit_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateStaffDTO {
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub job_title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub exhibit_id: Option<Option<i64>>,
}

impl Validate for UpdateStaffDTO {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        reject_null(&mut errors, "name", &self.name);
        if let Some(Some(email)) = &self.email {
            if !email.validate_email() {
                let mut error = ValidationError::new("email");
                error.message = Some(Cow::from("value is not a valid email address"));
                errors.add("email", error);
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_malformed_email() {
        let body: CreateStaffDTO =
            serde_json::from_str(r#"{"name": "John Doe", "email": "not-an-email"}"#).unwrap();
        assert!(body.validate().is_err());
    }

    #[test]
    fn create_accepts_missing_email() {
        let body: CreateStaffDTO = serde_json::from_str(r#"{"name": "John Doe"}"#).unwrap();
        assert!(body.validate().is_ok());
    }

    #[test]
    fn update_allows_clearing_email_but_not_name() {
        let clear_email: UpdateStaffDTO = serde_json::from_str(r#"{"email": null}"#).unwrap();
        assert!(clear_email.validate().is_ok());

        let clear_name: UpdateStaffDTO = serde_json::from_str(r#"{"name": null}"#).unwrap();
        let errors = clear_name.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn update_rejects_malformed_email() {
        let body: UpdateStaffDTO = serde_json::from_str(r#"{"email": "nope"}"#).unwrap();
        let errors = body.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}
