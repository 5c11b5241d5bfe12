use std::num::NonZeroUsize;

use clap::Parser;

/// Runtime settings for the user registry service.
#[derive(Parser, Debug, Clone)]
#[command(name = "user_registry", version, about = "In-memory user registry over HTTP")]
pub struct AppConfig {
    /// Address to bind the HTTP server to.
    #[arg(long, env = "USER_REGISTRY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP server to.
    #[arg(long, env = "USER_REGISTRY_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Capacity of the user store's request mailbox.
    #[arg(long, env = "USER_REGISTRY_MAILBOX_SIZE", default_value = "32")]
    pub mailbox_size: NonZeroUsize,

    /// Start with an empty store instead of the two demo users.
    #[arg(long, env = "USER_REGISTRY_NO_SEED", default_value_t = false)]
    pub no_seed: bool,

    /// Number of HTTP worker threads. Defaults to the number of CPUs.
    #[arg(long, env = "USER_REGISTRY_WORKERS")]
    pub workers: Option<NonZeroUsize>,
}
