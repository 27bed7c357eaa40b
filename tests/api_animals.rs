//! Integration tests for the animal endpoints, including the full lifecycle walk-through

mod common;

#[cfg(test)]
mod animal_tests {
    use super::common::{not_found_detail, server_for};
    use serde_json::{Value, json};
    use sqlx::SqlitePool;

    #[sqlx::test]
    async fn test_exhibit_and_animal_lifecycle(pool: SqlitePool) -> sqlx::Result<()> {
        let server = server_for(pool);

        let exhibit: Value = server
            .post("/exhibits")
            .json(&json!({ "name": "Big Cat Exhibit" }))
            .await
            .json();
        assert_eq!(exhibit["id"], 1);
        assert_eq!(exhibit["deleted_at"], Value::Null);
        assert_eq!(exhibit["created_at"], exhibit["updated_at"]);

        let lion: Value = server
            .post("/animals")
            .json(&json!({ "name": "Lion", "species": "Panthera leo", "exhibit_id": 1 }))
            .await
            .json();
        assert_eq!(lion["id"], 1);
        assert_eq!(lion["exhibit_id"], 1);

        let listed: Vec<Value> = server.get("/exhibits/1/animals").await.json();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["name"], "Lion");

        let deleted = server.delete("/animals/1").await;
        deleted.assert_status_ok();
        assert!(deleted.json::<Value>()["deleted_at"].is_string());

        let gone = server.get("/animals/1").expect_failure().await;
        gone.assert_status_not_found();
        gone.assert_json(&not_found_detail("Animals", 1));

        let listed: Vec<Value> = server.get("/exhibits/1/animals").await.json();
        assert!(listed.is_empty());

        let patched: Value = server
            .patch("/exhibits/1")
            .json(&json!({ "description": "updated" }))
            .await
            .json();
        assert_eq!(patched["name"], "Big Cat Exhibit");
        assert_eq!(patched["description"], "updated");

        let missing = server.get("/exhibits/999").expect_failure().await;
        missing.assert_status_not_found();
        missing.assert_json(&not_found_detail("Exhibits", 999));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("exhibits", "animals")))]
    async fn test_list_animals_skips_deleted(pool: SqlitePool) -> sqlx::Result<()> {
        let server = server_for(pool);
        server.delete("/animals/2").await.assert_status_ok();

        let animals: Vec<Value> = server.get("/animals?limit=100").await.json();
        let ids: Vec<_> = animals.iter().map(|a| a["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, [1, 3, 4, 5]);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("exhibits", "animals")))]
    async fn test_patch_animal_moves_and_detaches(pool: SqlitePool) -> sqlx::Result<()> {
        let server = server_for(pool);

        let moved: Value = server
            .patch("/animals/3")
            .json(&json!({ "exhibit_id": 2 }))
            .await
            .json();
        assert_eq!(moved["exhibit_id"], 2);
        assert_eq!(moved["species"], "Acinonyx jubatus");

        let on_two: Vec<Value> = server.get("/exhibits/2/animals").await.json();
        assert_eq!(on_two.len(), 1);
        assert_eq!(on_two[0]["name"], "Cheetah");

        let detached: Value = server
            .patch("/animals/3")
            .json(&json!({ "exhibit_id": null }))
            .await
            .json();
        assert_eq!(detached["exhibit_id"], Value::Null);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("exhibits")))]
    async fn test_create_animal_with_unknown_exhibit_fails(pool: SqlitePool) -> sqlx::Result<()> {
        let server = server_for(pool);

        let response = server
            .post("/animals")
            .json(&json!({ "name": "Ghost", "exhibit_id": 999 }))
            .expect_failure()
            .await;

        response.assert_status_internal_server_error();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("exhibits", "animals")))]
    async fn test_delete_missing_animal_returns_404(pool: SqlitePool) -> sqlx::Result<()> {
        let server = server_for(pool);

        let response = server.delete("/animals/42").expect_failure().await;

        response.assert_status_not_found();
        response.assert_json(&not_found_detail("Animals", 42));
        Ok(())
    }
}
