//! Animal resource

use super::resource::{Resource, create, delete, get_one, list, update};
use crate::core::AppState;
use crate::dtos::AnimalDTO;
use crate::repositories::AnimalRepository;
use axum::{Router, routing::get};
use std::sync::Arc;

impl Resource for AnimalRepository {
    type ReadDTO = AnimalDTO;

    fn from_state(state: &AppState) -> &Self {
        &state.animal
    }
}

/// Routes mounted under `/animals`
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(list::<AnimalRepository>).post(create::<AnimalRepository>),
        )
        .route(
            "/{id}",
            get(get_one::<AnimalRepository>)
                .patch(update::<AnimalRepository>)
                .delete(delete::<AnimalRepository>),
        )
}
