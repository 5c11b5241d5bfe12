//! User-specific domain rules: validation, email uniqueness and soft delete.

pub mod entity;
pub mod error;

pub use error::*;
