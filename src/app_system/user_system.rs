use tracing::{error, info};
use crate::clients::UserClient;
use crate::actor_framework::ResourceActor;
use crate::domain::{User, UserCreate};
use crate::user_actor::UserError;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Records present at every fresh start unless seeding is disabled.
pub const SEED_USERS: [(&str, &str); 2] = [
    ("John Doe", "jhondoe@gmail.com"),
    ("Jane Doe", "janedow@gmail.com"),
];

/// Owns the user store actor and hands out clients to it.
///
/// Responsible for starting the actor, seeding it, and shutting it down.
pub struct UserSystem {
    pub user_client: UserClient,
    handle: tokio::task::JoinHandle<()>,
}

impl UserSystem {
    pub fn new(buffer_size: usize) -> Self {
        // Ids come from a private counter, never from the store size, so
        // they stay unique across soft deletes.
        let user_id_counter = Arc::new(AtomicU64::new(1));
        let next_user_id = move || user_id_counter.fetch_add(1, Ordering::SeqCst);

        let (user_actor, user_resource_client) = ResourceActor::<User>::new(buffer_size, next_user_id);
        let user_client = UserClient::new(user_resource_client);
        let handle = tokio::spawn(user_actor.run());

        Self { user_client, handle }
    }

    /// Starts the system and inserts [`SEED_USERS`] through the normal
    /// create path, so they receive ids 1 and 2.
    pub async fn seeded(buffer_size: usize) -> Result<Self, UserError> {
        let system = Self::new(buffer_size);
        for (name, email) in SEED_USERS {
            let user = system.user_client.create_user(UserCreate::new(name, email)).await?;
            info!(user_id = user.id, user_name = %user.name, "Seeded user");
        }
        Ok(system)
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // Handlers may still hold client clones, so ask the actor to stop
        // rather than waiting for every sender to drop.
        self.user_client.shutdown().await.map_err(|e| e.to_string())?;

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
