//! Seed data - a starter zoo inserted into an empty database

use crate::core::AppState;
use crate::dtos::{CreateAnimalDTO, CreateExhibitDTO, CreateStaffDTO};
use crate::repositories::SoftDeleteRepository;
use tracing::{info, instrument};

const EXHIBITS: [(&str, &str); 4] = [
    ("Big Cat Exhibit", "A big cat exhibit"),
    ("Bird Exhibit", "A bird exhibit"),
    ("Reptile Exhibit", "A reptile exhibit"),
    ("Aquatic Exhibit", "An aquatic exhibit"),
];

const BIG_CATS: [(&str, &str, &str); 5] = [
    ("Lion", "Ferocious kitty with mane", "Panthera leo"),
    ("Tiger", "Ferocious kitty with stripes", "Panthera tigris"),
    ("Cheetah", "Ferocious fast kitty", "Acinonyx jubatus"),
    ("Leopard", "Ferocious spotted kitty", "Panthera pardus"),
    ("Cougar", "Ferocious mountain kitty", "Puma concolor"),
];

/// Inserts the starter data when the exhibits table has never held a row.
/// Returns whether anything was inserted.
#[instrument(skip(state))]
pub async fn seed_if_empty(state: &AppState) -> Result<bool, sqlx::Error> {
    if state.exhibit.count_all().await? > 0 {
        info!("Database already populated, skipping seed data");
        return Ok(false);
    }

    let mut exhibit_ids = Vec::with_capacity(EXHIBITS.len());
    for (name, description) in EXHIBITS {
        let exhibit = state
            .exhibit
            .insert(&CreateExhibitDTO {
                name: name.to_string(),
                description: Some(description.to_string()),
                location: Some("North America".to_string()),
            })
            .await?;
        exhibit_ids.push(exhibit.id);
    }
    let big_cats = exhibit_ids[0];
    let reptiles = exhibit_ids[2];

    let staff = [
        CreateStaffDTO {
            name: "John Doe".to_string(),
            job_title: Some("Zookeeper".to_string()),
            email: Some("john-does-loves-kitties@gmail.com".to_string()),
            phone: Some("555-555-5555".to_string()),
            notes: Some("John Doe is a great zookeeper and loves cats!".to_string()),
            exhibit_id: Some(big_cats),
        },
        CreateStaffDTO {
            name: "Jane Doe".to_string(),
            job_title: Some("Zookeeper".to_string()),
            email: Some("jane-doe@yahoo.com".to_string()),
            phone: Some("555-444-6666".to_string()),
            notes: Some("Jane Doe is a highly skilled bird keeper!".to_string()),
            exhibit_id: Some(reptiles),
        },
    ];
    for member in &staff {
        state.staff.insert(member).await?;
    }

    for (name, description, species) in BIG_CATS {
        state
            .animal
            .insert(&CreateAnimalDTO {
                name: name.to_string(),
                description: Some(description.to_string()),
                species: Some(species.to_string()),
                exhibit_id: Some(big_cats),
            })
            .await?;
    }

    info!(
        exhibits = EXHIBITS.len(),
        staff = staff.len(),
        animals = BIG_CATS.len(),
        "Seed data inserted"
    );
    Ok(true)
}
