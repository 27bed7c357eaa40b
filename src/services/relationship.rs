//! Relationship listing - live children of a live exhibit

use super::resource::{Resource, kind};
use crate::core::{ApiPath, ApiQuery, AppError, AppState};
use crate::dtos::PaginationQuery;
use crate::repositories::{ExhibitChildRepository, ExhibitRepository, SoftDeleteRepository, Table};
use axum::extract::{Json, State};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Resolves the parent first (404 keyed to the parent's kind), then pages through its live children
pub async fn list_children<P, C>(
    parent: &P,
    children: &C,
    parent_id: i64,
    page: PaginationQuery,
) -> Result<Vec<C::Entity>, AppError>
where
    P: SoftDeleteRepository,
    C: ExhibitChildRepository,
{
    if parent.get_live(parent_id).await?.is_none() {
        warn!(parent_id, "Parent not found or deleted");
        return Err(AppError::not_found_or_deleted(
            <P::Entity as Table>::KIND,
            parent_id,
        ));
    }

    Ok(children
        .list_live_by_exhibit(parent_id, page.offset, page.limit)
        .await?)
}

#[instrument(skip(state), fields(kind = kind::<C>()))]
pub async fn list_exhibit_children<C>(
    State(state): State<Arc<AppState>>,
    ApiPath(exhibit_id): ApiPath<i64>,
    ApiQuery(page): ApiQuery<PaginationQuery>,
) -> Result<Json<Vec<C::ReadDTO>>, AppError>
where
    C: Resource + ExhibitChildRepository,
{
    debug!("Listing exhibit children");
    page.validate().map_err(|e| AppError::invalid("query", e))?;

    let rows = list_children(
        ExhibitRepository::from_state(&state),
        C::from_state(&state),
        exhibit_id,
        page,
    )
    .await?;
    info!("Found {} children", rows.len());
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
