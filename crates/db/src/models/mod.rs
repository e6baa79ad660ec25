//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where the entity is
//!   mutable

pub mod activity;
pub mod contact;
pub mod employee;
pub mod expense;
pub mod invoice;
pub mod payment;
pub mod quotation;
pub mod rental;
pub mod settings;
pub mod user;
