//! Typed client handles over the generic resource actors.

#[macro_use]
mod macros;
mod user_client;

pub use user_client::*;
