//! Storage schema: one sea-orm entity per table plus connection helpers.
//!
//! These types describe rows only. Domain records and the mapping between
//! the two live in the `service` crate.

pub mod db;
pub mod image;
pub mod user;
pub mod post;
pub mod comment;
pub mod role;
pub mod permission;

#[cfg(test)]
mod tests;
