//! ExhibitRepository - storage access for the `exhibits` table

use super::soft_delete::{fetch_live, fetch_page, mark_deleted};
use super::traits::{SoftDeleteRepository, Table};
use crate::dtos::{CreateExhibitDTO, UpdateExhibitDTO};
use crate::entities::Exhibit;
use chrono::Utc;
use sqlx::{Error, SqlitePool};

impl Table for Exhibit {
    const TABLE: &'static str = "exhibits";
    const COLUMNS: &'static str =
        "id, name, description, location, created_at, updated_at, deleted_at";
    const KIND: &'static str = "Exhibits";
}

pub struct ExhibitRepository {
    connection_pool: SqlitePool,
}

impl ExhibitRepository {
    pub fn new(connection_pool: SqlitePool) -> ExhibitRepository {
        Self { connection_pool }
    }

    /// Number of rows in the table, soft-deleted ones included
    pub async fn count_all(&self) -> Result<i64, Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM exhibits")
            .fetch_one(&self.connection_pool)
            .await
    }
}

impl SoftDeleteRepository for ExhibitRepository {
    type Entity = Exhibit;
    type CreateDTO = CreateExhibitDTO;
    type UpdateDTO = UpdateExhibitDTO;

    async fn get_live(&self, id: i64) -> Result<Option<Exhibit>, Error> {
        let mut conn = self.connection_pool.acquire().await?;
        fetch_live(&mut conn, id).await
    }

    async fn list_live(&self, offset: i64, limit: i64) -> Result<Vec<Exhibit>, Error> {
        let mut conn = self.connection_pool.acquire().await?;
        fetch_page(&mut conn, offset, limit).await
    }

    async fn insert(&self, data: &CreateExhibitDTO) -> Result<Exhibit, Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO exhibits (name, description, location, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {}",
            Exhibit::COLUMNS
        );
        sqlx::query_as::<_, Exhibit>(&query)
            .bind(&data.name)
            .bind(&data.description)
            .bind(&data.location)
            .bind(now)
            .bind(now)
            .fetch_one(&self.connection_pool)
            .await
    }

    async fn update_merge(
        &self,
        id: i64,
        data: &UpdateExhibitDTO,
    ) -> Result<Option<Exhibit>, Error> {
        // Write lock up front: concurrent merges queue on busy_timeout instead of failing the upgrade
        let mut tx = self.connection_pool.begin_with("BEGIN IMMEDIATE").await?;
        let Some(mut exhibit) = fetch_live::<Exhibit>(&mut tx, id).await? else {
            return Ok(None);
        };

        exhibit.apply(data);
        let query = format!(
            "UPDATE exhibits SET name = ?, description = ?, location = ?, updated_at = ?
             WHERE id = ?
             RETURNING {}",
            Exhibit::COLUMNS
        );
        let updated = sqlx::query_as::<_, Exhibit>(&query)
            .bind(&exhibit.name)
            .bind(&exhibit.description)
            .bind(&exhibit.location)
            .bind(Utc::now())
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    async fn soft_delete(&self, id: i64) -> Result<Option<Exhibit>, Error> {
        let mut conn = self.connection_pool.acquire().await?;
        mark_deleted(&mut conn, id, Utc::now()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    fn patch(json: &str) -> UpdateExhibitDTO {
        serde_json::from_str(json).expect("valid patch")
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("exhibits")))]
    async fn test_get_live_returns_seeded_row(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = ExhibitRepository::new(pool);

        let exhibit = repo.get_live(1).await?.expect("exhibit 1 is seeded");
        assert_eq!(exhibit.name, "Big Cat Exhibit");
        assert!(exhibit.soft_delete.is_live());

        assert!(repo.get_live(999).await?.is_none());
        Ok(())
    }

    #[sqlx::test]
    async fn test_insert_assigns_id_and_equal_timestamps(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = ExhibitRepository::new(pool);
        let exhibit = repo
            .insert(&CreateExhibitDTO {
                name: "Big Cat Exhibit".to_string(),
                description: None,
                location: None,
            })
            .await?;

        assert_eq!(exhibit.id, 1);
        assert_eq!(exhibit.timestamps.created_at, exhibit.timestamps.updated_at);
        assert_eq!(exhibit.soft_delete.deleted_at, None);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("exhibits")))]
    async fn test_list_live_is_ordered_and_contiguous(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = ExhibitRepository::new(pool);

        let all = repo.list_live(0, 100).await?;
        let ids: Vec<i64> = all.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let page = repo.list_live(1, 2).await?;
        let page_ids: Vec<i64> = page.iter().map(|e| e.id).collect();
        assert_eq!(page_ids, vec![2, 3]);

        assert!(repo.list_live(10, 100).await?.is_empty());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("exhibits")))]
    async fn test_list_live_skips_deleted(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = ExhibitRepository::new(pool);
        repo.soft_delete(2).await?.expect("exhibit 2 is live");

        let all = repo.list_live(0, 100).await?;
        assert!(all.iter().all(|e| e.soft_delete.is_live()));
        assert!(all.iter().all(|e| e.id != 2));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("exhibits")))]
    async fn test_update_merge_changes_only_supplied_fields(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = ExhibitRepository::new(pool);
        let before = repo.get_live(1).await?.expect("exhibit 1 is seeded");

        let after = repo
            .update_merge(1, &patch(r#"{"description": "updated"}"#))
            .await?
            .expect("exhibit 1 is live");

        assert_eq!(after.description.as_deref(), Some("updated"));
        assert_eq!(after.name, before.name);
        assert_eq!(after.location, before.location);
        assert_eq!(after.timestamps.created_at, before.timestamps.created_at);
        assert!(after.timestamps.updated_at > before.timestamps.updated_at);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("exhibits")))]
    async fn test_update_merge_null_clears_optional_field(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = ExhibitRepository::new(pool);

        let after = repo
            .update_merge(1, &patch(r#"{"location": null}"#))
            .await?
            .expect("exhibit 1 is live");

        assert_eq!(after.location, None);
        assert_eq!(after.description.as_deref(), Some("A big cat exhibit"));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("exhibits")))]
    async fn test_soft_delete_keeps_row_and_is_not_idempotent(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = ExhibitRepository::new(pool.clone());

        let deleted = repo.soft_delete(1).await?.expect("exhibit 1 is live");
        assert!(deleted.soft_delete.deleted_at.is_some());

        assert!(repo.get_live(1).await?.is_none());
        assert!(repo.soft_delete(1).await?.is_none());
        assert!(repo.update_merge(1, &patch(r#"{"name": "x"}"#)).await?.is_none());

        let still_stored: Option<i64> =
            sqlx::query_scalar("SELECT id FROM exhibits WHERE id = 1 AND deleted_at IS NOT NULL")
                .fetch_optional(&pool)
                .await?;
        assert_eq!(still_stored, Some(1));
        assert_eq!(repo.count_all().await?, 4);
        Ok(())
    }
}
