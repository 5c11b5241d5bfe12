use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks and DTOs)
// =============================================================================

/// Failures raised by the actor plumbing itself rather than by an entity hook.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Ord + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Error: From<FrameworkError> + Send + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Validate a create payload against everything already stored,
    /// tombstones included. Runs before an id is drawn.
    fn check_create(
        _payload: &Self::CreatePayload,
        _existing: &BTreeMap<Self::Id, Self>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks ---

    fn on_update(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;

    /// Called on delete. An entity that reports `is_deleted()` afterwards is
    /// kept as a tombstone, anything else is removed from the store.
    fn on_delete(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Soft-deleted entities are invisible to get, list, update and delete.
    fn is_deleted(&self) -> bool {
        false
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T, T::Error>,
    },
    List {
        respond_to: Response<Vec<T>, T::Error>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T, T::Error>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<(), T::Error>,
    },
    Shutdown,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Main loop. Requests are handled strictly one at a time, so every
    /// mutation is serialized and readers never see a partial write.
    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(self.handle_get(&id));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_list()));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(&id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(&id));
                }
                ResourceRequest::Shutdown => {
                    info!("ResourceActor shutting down");
                    break;
                }
            }
        }
        info!("ResourceActor stopped");
    }

    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T, T::Error> {
        debug!(?payload, "Processing create request");
        T::check_create(&payload, &self.store)?;
        let id = (self.next_id_fn)();
        let item = T::from_create(id, payload)?;
        info!(id = %item.id(), "Item created");
        self.store.insert(item.id().clone(), item.clone());
        Ok(item)
    }

    fn handle_get(&self, id: &T::Id) -> Result<T, T::Error> {
        debug!(%id, "Processing get request");
        self.visible(id).cloned()
    }

    fn handle_list(&self) -> Vec<T> {
        let items: Vec<T> = self
            .store
            .values()
            .filter(|item| !item.is_deleted())
            .cloned()
            .collect();
        debug!(count = items.len(), "Processing list request");
        items
    }

    fn handle_update(&mut self, id: &T::Id, patch: T::Patch) -> Result<T, T::Error> {
        debug!(%id, "Processing update request");
        let item = self.visible_mut(id)?;
        item.on_update(patch)?;
        Ok(item.clone())
    }

    fn handle_delete(&mut self, id: &T::Id) -> Result<(), T::Error> {
        debug!(%id, "Processing delete request");
        let item = self.visible_mut(id)?;
        item.on_delete()?;
        if !item.is_deleted() {
            self.store.remove(id);
        }
        Ok(())
    }

    fn visible(&self, id: &T::Id) -> Result<&T, T::Error> {
        self.store
            .get(id)
            .filter(|item| !item.is_deleted())
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()).into())
    }

    fn visible_mut(&mut self, id: &T::Id) -> Result<&mut T, T::Error> {
        self.store
            .get_mut(id)
            .filter(|item| !item.is_deleted())
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()).into())
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T>,
    ) -> Result<R, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, T::Error> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<T, T::Error> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, T::Error> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), T::Error> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    /// Ask the actor to stop after the requests already queued.
    pub async fn shutdown(&self) -> Result<(), T::Error> {
        self.sender
            .send(ResourceRequest::Shutdown)
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        Ok(())
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
