//! Common repository traits
//!
//! This module defines the generic soft-delete contract every entity repository
//! implements. Methods return `impl Future + Send` so that generic HTTP handlers
//! can await them from a multi-threaded runtime; implementors simply write
//! `async fn`.

use sqlx::{FromRow, sqlite::SqliteRow};
use std::future::Future;

/// Static description of the table backing an entity
pub trait Table: for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    /// Table name
    const TABLE: &'static str;
    /// Column list shared across queries, in `FromRow` order
    const COLUMNS: &'static str;
    /// Entity name as exposed to clients in error messages (e.g. `Exhibits`)
    const KIND: &'static str;
}

/// Data access for one entity type, enforcing soft-delete visibility
///
/// # Type Parameters
/// * `Entity` - Row type returned by every operation
/// * `CreateDTO` - Payload for inserts (no server-assigned fields)
/// * `UpdateDTO` - Payload for partial updates (only supplied fields are merged)
pub trait SoftDeleteRepository: Send + Sync {
    type Entity: Table;
    type CreateDTO: Sync;
    type UpdateDTO: Sync;

    /// Reads a live entity by primary key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Row exists and `deleted_at` is null
    /// * `Ok(None)` - Row never existed OR was soft-deleted (indistinguishable on purpose)
    /// * `Err(sqlx::Error)` - Storage failure
    fn get_live(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Self::Entity>, sqlx::Error>> + Send;

    /// Lists live entities ordered by ascending id, skipping `offset` and returning at most `limit`
    fn list_live(
        &self,
        offset: i64,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<Self::Entity>, sqlx::Error>> + Send;

    /// Inserts a new entity; id and timestamps are assigned here
    fn insert(
        &self,
        data: &Self::CreateDTO,
    ) -> impl Future<Output = Result<Self::Entity, sqlx::Error>> + Send;

    /// Merges the supplied fields of `data` into a live entity and bumps `updated_at`
    ///
    /// # Returns
    /// * `Ok(None)` - No live entity with that id
    fn update_merge(
        &self,
        id: i64,
        data: &Self::UpdateDTO,
    ) -> impl Future<Output = Result<Option<Self::Entity>, sqlx::Error>> + Send;

    /// Marks a live entity as deleted and returns it in its deleted state
    ///
    /// # Returns
    /// * `Ok(None)` - No live entity with that id (deleting twice fails the second time)
    fn soft_delete(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Self::Entity>, sqlx::Error>> + Send;
}

/// Repositories whose entity carries an `exhibit_id` foreign key
pub trait ExhibitChildRepository: SoftDeleteRepository {
    /// Lists live entities belonging to `exhibit_id`, with the same ordering and
    /// pagination as [`SoftDeleteRepository::list_live`]
    fn list_live_by_exhibit(
        &self,
        exhibit_id: i64,
        offset: i64,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<Self::Entity>, sqlx::Error>> + Send;
}
