//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Entities with multiple representation shapes (Movie, MovieSession, Order)
//! additionally define list and detail projection structs, plus the filter
//! spec their list query accepts.

pub mod actor;
pub mod auth_session;
pub mod cinema_hall;
pub mod genre;
pub mod movie;
pub mod movie_session;
pub mod order;
pub mod user;
