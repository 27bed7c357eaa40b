//! Soft-delete queries shared by every repository
//!
//! These helpers take a plain connection so callers decide whether they run on a
//! pooled connection or inside a transaction. Every query filters on
//! `deleted_at IS NULL`: a soft-deleted row is invisible to the API.

use super::traits::Table;
use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;

/// Fetches a live row by primary key
pub async fn fetch_live<T: Table>(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<T>, sqlx::Error> {
    let query = format!(
        "SELECT {} FROM {} WHERE id = ? AND deleted_at IS NULL",
        T::COLUMNS,
        T::TABLE
    );
    sqlx::query_as::<_, T>(&query)
        .bind(id)
        .fetch_optional(conn)
        .await
}

/// Fetches one page of live rows ordered by id
pub async fn fetch_page<T: Table>(
    conn: &mut SqliteConnection,
    offset: i64,
    limit: i64,
) -> Result<Vec<T>, sqlx::Error> {
    let query = format!(
        "SELECT {} FROM {} WHERE deleted_at IS NULL ORDER BY id LIMIT ? OFFSET ?",
        T::COLUMNS,
        T::TABLE
    );
    sqlx::query_as::<_, T>(&query)
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await
}

/// Fetches one page of live rows whose `exhibit_id` matches, ordered by id
pub async fn fetch_page_by_exhibit<T: Table>(
    conn: &mut SqliteConnection,
    exhibit_id: i64,
    offset: i64,
    limit: i64,
) -> Result<Vec<T>, sqlx::Error> {
    let query = format!(
        "SELECT {} FROM {} WHERE exhibit_id = ? AND deleted_at IS NULL ORDER BY id LIMIT ? OFFSET ?",
        T::COLUMNS,
        T::TABLE
    );
    sqlx::query_as::<_, T>(&query)
        .bind(exhibit_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await
}

/// Sets `deleted_at` on a live row and returns the row as stored afterwards
pub async fn mark_deleted<T: Table>(
    conn: &mut SqliteConnection,
    id: i64,
    now: DateTime<Utc>,
) -> Result<Option<T>, sqlx::Error> {
    let query = format!(
        "UPDATE {} SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL RETURNING {}",
        T::TABLE,
        T::COLUMNS
    );
    sqlx::query_as::<_, T>(&query)
        .bind(now)
        .bind(id)
        .fetch_optional(conn)
        .await
}
