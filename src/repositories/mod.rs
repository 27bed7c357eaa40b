//! Repositories module - storage access for every entity
//!
//! Each repository owns a clone of the connection pool and implements
//! [`SoftDeleteRepository`]. Queries are built from the entity's [`Table`]
//! metadata and checked at runtime (`query_as::<_, T>`), so the crate builds
//! without a live database.

pub mod animal;
pub mod exhibit;
pub mod soft_delete;
pub mod staff;
pub mod traits;

pub use traits::{ExhibitChildRepository, SoftDeleteRepository, Table};

pub use animal::AnimalRepository;
pub use exhibit::ExhibitRepository;
pub use staff::StaffRepository;
