//! AnimalRepository - storage access for the `animals` table

use super::soft_delete::{fetch_live, fetch_page, fetch_page_by_exhibit, mark_deleted};
use super::traits::{ExhibitChildRepository, SoftDeleteRepository, Table};
use crate::dtos::{CreateAnimalDTO, UpdateAnimalDTO};
use crate::entities::Animal;
use chrono::Utc;
use sqlx::{Error, SqlitePool};

impl Table for Animal {
    const TABLE: &'static str = "animals";
    const COLUMNS: &'static str =
        "id, name, description, species, exhibit_id, created_at, updated_at, deleted_at";
    const KIND: &'static str = "Animals";
}

pub struct AnimalRepository {
    connection_pool: SqlitePool,
}

impl AnimalRepository {
    pub fn new(connection_pool: SqlitePool) -> AnimalRepository {
        Self { connection_pool }
    }
}

impl SoftDeleteRepository for AnimalRepository {
    type Entity = Animal;
    type CreateDTO = CreateAnimalDTO;
    type UpdateDTO = UpdateAnimalDTO;

    async fn get_live(&self, id: i64) -> Result<Option<Animal>, Error> {
        let mut conn = self.connection_pool.acquire().await?;
        fetch_live(&mut conn, id).await
    }

    async fn list_live(&self, offset: i64, limit: i64) -> Result<Vec<Animal>, Error> {
        let mut conn = self.connection_pool.acquire().await?;
        fetch_page(&mut conn, offset, limit).await
    }

    async fn insert(&self, data: &CreateAnimalDTO) -> Result<Animal, Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO animals (name, description, species, exhibit_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {}",
            Animal::COLUMNS
        );
        sqlx::query_as::<_, Animal>(&query)
            .bind(&data.name)
            .bind(&data.description)
            .bind(&data.species)
            .bind(data.exhibit_id)
            .bind(now)
            .bind(now)
            .fetch_one(&self.connection_pool)
            .await
    }

    async fn update_merge(&self, id: i64, data: &UpdateAnimalDTO) -> Result<Option<Animal>, Error> {
        // Write lock up front: concurrent merges queue on busy_timeout instead of failing the upgrade
        let mut tx = self.connection_pool.begin_with("BEGIN IMMEDIATE").await?;
        let Some(mut animal) = fetch_live::<Animal>(&mut tx, id).await? else {
            return Ok(None);
        };

        animal.apply(data);
        let query = format!(
            "UPDATE animals SET name = ?, description = ?, species = ?, exhibit_id = ?, updated_at = ?
             WHERE id = ?
             RETURNING {}",
            Animal::COLUMNS
        );
        let updated = sqlx::query_as::<_, Animal>(&query)
            .bind(&animal.name)
            .bind(&animal.description)
            .bind(&animal.species)
            .bind(animal.exhibit_id)
            .bind(Utc::now())
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    async fn soft_delete(&self, id: i64) -> Result<Option<Animal>, Error> {
        let mut conn = self.connection_pool.acquire().await?;
        mark_deleted(&mut conn, id, Utc::now()).await
    }
}

impl ExhibitChildRepository for AnimalRepository {
    async fn list_live_by_exhibit(
        &self,
        exhibit_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Animal>, Error> {
        let mut conn = self.connection_pool.acquire().await?;
        fetch_page_by_exhibit(&mut conn, exhibit_id, offset, limit).await
    }
}
