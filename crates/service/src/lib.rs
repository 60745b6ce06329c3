//! Service layer for the social backend: users, posts, comments, images, roles and permissions.
//! - Records and their update whitelists live in `domain`.
//! - `storage` holds the generic repository and its SQL and map backends.
//! - `AppServices` wires one service per entity over a chosen backend.

pub mod app;
pub mod crud;
pub mod domain;
pub mod errors;
pub mod seed;
pub mod services;
pub mod storage;
#[cfg(test)]
pub mod test_support;

pub use app::{AppServices, Inventory};
pub use crud::CrudService;
pub use errors::ServiceError;
