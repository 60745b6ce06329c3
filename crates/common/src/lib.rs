//! Shared helpers used by the service crate and the binaries.

pub mod env;
pub mod pagination;
pub mod utils;
