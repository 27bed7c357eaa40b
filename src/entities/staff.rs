//! Staff entity - zoo employee, optionally assigned to an exhibit

use super::common::{SoftDelete, Timestamps};
use crate::dtos::UpdateStaffDTO;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub exhibit_id: Option<i64>,
    #[sqlx(flatten)]
    pub timestamps: Timestamps,
    #[sqlx(flatten)]
    pub soft_delete: SoftDelete,
}

impl Staff {
    /// Merges the supplied fields of `patch` into `self`; omitted fields stay as they are
    pub fn apply(&mut self, patch: &UpdateStaffDTO) {
        if let Some(Some(name)) = &patch.name {
            self.name = name.clone();
        }
        if let Some(job_title) = &patch.job_title {
            self.job_title = job_title.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(phone) = &patch.phone {
            self.phone = phone.clone();
        }
        if let Some(notes) = &patch.notes {
            self.notes = notes.clone();
        }
        if let Some(exhibit_id) = patch.exhibit_id {
            self.exhibit_id = exhibit_id;
        }
    }
}
