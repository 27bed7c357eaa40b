//! Entities module - rows persisted in the database
//!
//! Each entity maps one table. Shared columns are embedded as sub-structs
//! (`Timestamps`, `SoftDelete`) rather than repeated per table.

pub mod animal;
pub mod common;
pub mod exhibit;
pub mod staff;

pub use animal::Animal;
pub use common::{SoftDelete, Timestamps};
pub use exhibit::Exhibit;
pub use staff::Staff;
