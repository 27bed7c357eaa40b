//! StaffRepository - storage access for the `staff` table

use super::soft_delete::{fetch_live, fetch_page, fetch_page_by_exhibit, mark_deleted};
use super::traits::{ExhibitChildRepository, SoftDeleteRepository, Table};
use crate::dtos::{CreateStaffDTO, UpdateStaffDTO};
use crate::entities::Staff;
use chrono::Utc;
use sqlx::{Error, SqlitePool};

impl Table for Staff {
    const TABLE: &'static str = "staff";
    const COLUMNS: &'static str = "id, name, job_title, email, phone, notes, exhibit_id, \
                                   created_at, updated_at, deleted_at";
    const KIND: &'static str = "Staff";
}

pub struct StaffRepository {
    connection_pool: SqlitePool,
}

impl StaffRepository {
    pub fn new(connection_pool: SqlitePool) -> StaffRepository {
        Self { connection_pool }
    }
}

impl SoftDeleteRepository for StaffRepository {
    type Entity = Staff;
    type CreateDTO = CreateStaffDTO;
    type UpdateDTO = UpdateStaffDTO;

    async fn get_live(&self, id: i64) -> Result<Option<Staff>, Error> {
        let mut conn = self.connection_pool.acquire().await?;
        fetch_live(&mut conn, id).await
    }

    async fn list_live(&self, offset: i64, limit: i64) -> Result<Vec<Staff>, Error> {
        let mut conn = self.connection_pool.acquire().await?;
        fetch_page(&mut conn, offset, limit).await
    }

    async fn insert(&self, data: &CreateStaffDTO) -> Result<Staff, Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO staff (name, job_title, email, phone, notes, exhibit_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {}",
            Staff::COLUMNS
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(&data.name)
            .bind(&data.job_title)
            .bind(&data.email)
            .bind(&data.phone)
            .bind(&data.notes)
            .bind(data.exhibit_id)
            .bind(now)
            .bind(now)
            .fetch_one(&self.connection_pool)
            .await
    }

    async fn update_merge(&self, id: i64, data: &UpdateStaffDTO) -> Result<Option<Staff>, Error> {
        // Write lock up front: concurrent merges queue on busy_timeout instead of failing the upgrade
        let mut tx = self.connection_pool.begin_with("BEGIN IMMEDIATE").await?;
        let Some(mut staff) = fetch_live::<Staff>(&mut tx, id).await? else {
            return Ok(None);
        };

        staff.apply(data);
        let query = format!(
            "UPDATE staff SET name = ?, job_title = ?, email = ?, phone = ?, notes = ?,
                 exhibit_id = ?, updated_at = ?
             WHERE id = ?
             RETURNING {}",
            Staff::COLUMNS
        );
        let updated = sqlx::query_as::<_, Staff>(&query)
            .bind(&staff.name)
            .bind(&staff.job_title)
            .bind(&staff.email)
            .bind(&staff.phone)
            .bind(&staff.notes)
            .bind(staff.exhibit_id)
            .bind(Utc::now())
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    async fn soft_delete(&self, id: i64) -> Result<Option<Staff>, Error> {
        let mut conn = self.connection_pool.acquire().await?;
        mark_deleted(&mut conn, id, Utc::now()).await
    }
}

impl ExhibitChildRepository for StaffRepository {
    async fn list_live_by_exhibit(
        &self,
        exhibit_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Staff>, Error> {
        let mut conn = self.connection_pool.acquire().await?;
        fetch_page_by_exhibit(&mut conn, exhibit_id, offset, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("exhibits", "staff")))]
    async fn test_duplicate_name_is_a_storage_error(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = StaffRepository::new(pool);
        let result = repo
            .insert(&CreateStaffDTO {
                name: "John Doe".to_string(),
                job_title: None,
                email: None,
                phone: None,
                notes: None,
                exhibit_id: None,
            })
            .await;

        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("exhibits", "staff")))]
    async fn test_update_merge_keeps_untouched_columns(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = StaffRepository::new(pool);
        let before = repo.get_live(1).await?.expect("john is seeded");

        let patch: UpdateStaffDTO = serde_json::from_str(r#"{"notes": "night shift"}"#).unwrap();
        let after = repo.update_merge(1, &patch).await?.expect("john is live");

        assert_eq!(after.notes.as_deref(), Some("night shift"));
        assert_eq!(after.name, before.name);
        assert_eq!(after.job_title, before.job_title);
        assert_eq!(after.email, before.email);
        assert_eq!(after.phone, before.phone);
        assert_eq!(after.exhibit_id, before.exhibit_id);
        assert!(after.timestamps.updated_at > before.timestamps.updated_at);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("exhibits", "staff")))]
    async fn test_list_by_exhibit(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = StaffRepository::new(pool);

        let keepers = repo.list_live_by_exhibit(3, 0, 100).await?;
        assert_eq!(keepers.len(), 1);
        assert_eq!(keepers[0].name, "Jane Doe");
        Ok(())
    }
}
