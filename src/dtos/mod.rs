//! DTOs module - Data Transfer Objects
//!
//! DTOs separate the API representation from the stored entities: a Read view
//! (`XxxDTO`), a Create payload and a partial Update payload per entity.

pub mod animal;
pub mod exhibit;
pub mod patch;
pub mod query;
pub mod staff;

pub use animal::{AnimalDTO, CreateAnimalDTO, UpdateAnimalDTO};
pub use exhibit::{CreateExhibitDTO, ExhibitDTO, UpdateExhibitDTO};
pub use query::{MAX_PAGE_SIZE, PaginationQuery};
pub use staff::{CreateStaffDTO, StaffDTO, UpdateStaffDTO};
