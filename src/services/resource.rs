//! Resource handlers - list / get / create / update / delete, written once for every entity
//!
//! A repository becomes routable by implementing [`Resource`]: it names its Read
//! projection and how to find itself in [`AppState`]. Handlers are then mounted as
//! `get(get_one::<ExhibitRepository>)` and so on.

use crate::core::{ApiJson, ApiPath, ApiQuery, AppError, AppState};
use crate::dtos::PaginationQuery;
use crate::repositories::{SoftDeleteRepository, Table};
use axum::extract::{Json, State};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

pub trait Resource: SoftDeleteRepository + 'static {
    /// Projection returned to clients; includes `deleted_at`
    type ReadDTO: From<Self::Entity> + Serialize + Send;

    fn from_state(state: &AppState) -> &Self;
}

/// Entity name used in logs and not-found messages
pub fn kind<R: Resource>() -> &'static str {
    <R::Entity as Table>::KIND
}

#[instrument(skip(state), fields(kind = kind::<R>()))]
pub async fn list<R: Resource>(
    State(state): State<Arc<AppState>>,
    ApiQuery(page): ApiQuery<PaginationQuery>,
) -> Result<Json<Vec<R::ReadDTO>>, AppError> {
    debug!("Listing live rows");
    page.validate().map_err(|e| AppError::invalid("query", e))?;

    let rows = R::from_state(&state)
        .list_live(page.offset, page.limit)
        .await?;
    info!("Found {} rows", rows.len());
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state), fields(kind = kind::<R>()))]
pub async fn get_one<R: Resource>(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<R::ReadDTO>, AppError> {
    debug!("Fetching row by ID");
    let row = R::from_state(&state).get_live(id).await?.ok_or_else(|| {
        warn!("Row not found or deleted");
        AppError::not_found_or_deleted(kind::<R>(), id)
    })?;
    Ok(Json(row.into()))
}

#[instrument(skip(state, body), fields(kind = kind::<R>()))]
pub async fn create<R>(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<R::CreateDTO>,
) -> Result<Json<R::ReadDTO>, AppError>
where
    R: Resource,
    R::CreateDTO: DeserializeOwned + Validate + Send,
{
    debug!("Creating row");
    body.validate()?;

    let row = R::from_state(&state).insert(&body).await?;
    info!("Row created");
    Ok(Json(row.into()))
}

#[instrument(skip(state, body), fields(kind = kind::<R>()))]
pub async fn update<R>(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<R::UpdateDTO>,
) -> Result<Json<R::ReadDTO>, AppError>
where
    R: Resource,
    R::UpdateDTO: DeserializeOwned + Validate + Send,
{
    debug!("Updating row");
    body.validate()?;

    let row = R::from_state(&state)
        .update_merge(id, &body)
        .await?
        .ok_or_else(|| {
            warn!("Row not found or deleted");
            AppError::not_found_or_deleted(kind::<R>(), id)
        })?;
    info!("Row updated");
    Ok(Json(row.into()))
}

#[instrument(skip(state), fields(kind = kind::<R>()))]
pub async fn delete<R: Resource>(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<R::ReadDTO>, AppError> {
    debug!("Soft deleting row");
    let row = R::from_state(&state).soft_delete(id).await?.ok_or_else(|| {
        warn!("Row not found or deleted");
        AppError::not_found_or_deleted(kind::<R>(), id)
    })?;
    info!("Row soft deleted");
    Ok(Json(row.into()))
}
