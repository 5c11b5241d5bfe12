//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod logging;
pub mod user_system;

pub use config::*;
pub use logging::*;
pub use user_system::*;
