//! Patch helpers - distinguishing an omitted field from an explicit `null`
//!
//! Update DTOs model every column as `Option<Option<T>>`:
//! - `None` the field was not in the payload, leave the column untouched
//! - `Some(None)` the client sent `null`, clear the column
//! - `Some(Some(v))` the client sent a value, overwrite the column

use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

/// Use together with `#[serde(default)]`: serde only calls this when the key is present,
/// so a present key always yields `Some(_)`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Records a validation error when a NOT NULL column is explicitly set to `null`
pub fn reject_null<T>(errors: &mut ValidationErrors, field: &'static str, value: &Option<Option<T>>) {
    if matches!(value, Some(None)) {
        let mut error = ValidationError::new("null");
        error.message = Some(Cow::from(format!("{field} may not be null")));
        errors.add(field, error);
    }
}
