use tracing::{debug, instrument};
use crate::domain::{User, UserCreate, UserPatch};
use crate::user_actor::UserError;
use crate::actor_framework::ResourceClient;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    #[instrument(skip(self, user), fields(user_name = %user.name, user_email = %user.email))]
    pub async fn create_user(&self, user: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(user).await
    }

    /// Renames a user. Callers get confirmation only, not the updated record.
    #[instrument(skip(self))]
    pub async fn update_user(&self, id: u64, patch: UserPatch) -> Result<(), UserError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_framework::{create_mock_client, expect_create, expect_delete, expect_update};

    #[tokio::test]
    async fn test_create_user_forwards_payload() {
        let (inner, mut rx) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move {
            client.create_user(UserCreate::new("Alice", "a@x.com")).await
        });

        let (payload, responder) = expect_create(&mut rx).await.expect("Expected Create request");
        assert_eq!(payload.name, "Alice");
        assert_eq!(payload.email, "a@x.com");
        responder.send(Ok(User::new(3, "Alice", "a@x.com"))).unwrap();

        let created = task.await.unwrap().unwrap();
        assert_eq!(created.id, 3);
    }

    #[tokio::test]
    async fn test_update_user_drops_record() {
        let (inner, mut rx) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move {
            client.update_user(1, UserPatch { name: "Johnny".into() }).await
        });

        let (id, patch, responder) = expect_update(&mut rx).await.expect("Expected Update request");
        assert_eq!(id, 1);
        assert_eq!(patch.name, "Johnny");
        responder.send(Ok(User::new(1, "Johnny", "jhondoe@gmail.com"))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(()));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_communication_error() {
        let (inner, mut rx) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move { client.delete_user(9).await });

        let (id, responder) = expect_delete(&mut rx).await.expect("Expected Delete request");
        assert_eq!(id, 9);
        drop(responder);

        assert_eq!(
            task.await.unwrap(),
            Err(UserError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }

    #[tokio::test]
    async fn test_closed_actor_is_communication_error() {
        let (inner, rx) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);
        drop(rx);

        assert_eq!(
            client.get_user(1).await,
            Err(UserError::ActorCommunicationError("Actor closed".to_string()))
        );
    }
}
