//! Staff resource

use super::resource::{Resource, create, delete, get_one, list, update};
use crate::core::AppState;
use crate::dtos::StaffDTO;
use crate::repositories::StaffRepository;
use axum::{Router, routing::get};
use std::sync::Arc;

impl Resource for StaffRepository {
    type ReadDTO = StaffDTO;

    fn from_state(state: &AppState) -> &Self {
        &state.staff
    }
}

/// Routes mounted under `/staff`
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(list::<StaffRepository>).post(create::<StaffRepository>),
        )
        .route(
            "/{id}",
            get(get_one::<StaffRepository>)
                .patch(update::<StaffRepository>)
                .delete(delete::<StaffRepository>),
        )
}
