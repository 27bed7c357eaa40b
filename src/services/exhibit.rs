//! Exhibit resource - CRUD plus the animals/staff sub-collections

use super::relationship::list_exhibit_children;
use super::resource::{Resource, create, delete, get_one, list, update};
use crate::core::AppState;
use crate::dtos::ExhibitDTO;
use crate::repositories::{AnimalRepository, ExhibitRepository, StaffRepository};
use axum::{Router, routing::get};
use std::sync::Arc;

impl Resource for ExhibitRepository {
    type ReadDTO = ExhibitDTO;

    fn from_state(state: &AppState) -> &Self {
        &state.exhibit
    }
}

/// Routes mounted under `/exhibits`
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(list::<ExhibitRepository>).post(create::<ExhibitRepository>),
        )
        .route(
            "/{id}",
            get(get_one::<ExhibitRepository>)
                .patch(update::<ExhibitRepository>)
                .delete(delete::<ExhibitRepository>),
        )
        .route(
            "/{id}/animals",
            get(list_exhibit_children::<AnimalRepository>),
        )
        .route("/{id}/staff", get(list_exhibit_children::<StaffRepository>))
}
