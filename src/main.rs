//! # User Registry
//!
//! An in-memory user registry served over HTTP.
//!
//! - **Store** - a single [`ResourceActor`](actor_framework::ResourceActor)
//!   owns every record and handles requests one at a time
//! - **Client** - [`UserClient`](clients::UserClient) is the cloneable handle
//!   handlers use to talk to the store
//! - **HTTP** - actix-web handlers in [`http`] map requests onto client calls
//!
//! Run with `RUST_LOG=debug cargo run` to see per-request actor tracing.

mod domain;
mod clients;

mod app_system;
mod http;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod user_actor;

use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use tracing::{error, info};
use crate::app_system::{setup_tracing, AppConfig, UserSystem};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = AppConfig::parse();
    info!(?config, "Starting user registry");

    let system = if config.no_seed {
        UserSystem::new(config.mailbox_size.get())
    } else {
        UserSystem::seeded(config.mailbox_size.get())
            .await
            .map_err(|e| std::io::Error::other(format!("failed to seed user store: {e}")))?
    };

    let users = web::Data::new(system.user_client.clone());
    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(users.clone())
            .wrap(middleware::Logger::default())
            .configure(http::configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers.get());
    }

    let server = server.bind((config.host.as_str(), config.port))?;
    info!(host = %config.host, port = config.port, "Listening");
    let served = server.run().await;

    if let Err(e) = system.shutdown().await {
        error!(error = %e, "Shutdown failed");
    }

    served?;
    info!("Application completed successfully");
    Ok(())
}
