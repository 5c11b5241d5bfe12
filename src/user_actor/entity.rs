use std::collections::BTreeMap;

use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserPatch};
use super::error::UserError;

impl Entity for User {
    type Id = u64;
    type CreatePayload = UserCreate;
    type Patch = UserPatch;
    type Error = UserError;

    fn id(&self) -> &u64 {
        &self.id
    }

    /// Rejects empty fields and emails already held by any record,
    /// soft-deleted ones included.
    fn check_create(params: &UserCreate, existing: &BTreeMap<u64, Self>) -> Result<(), UserError> {
        if params.name.is_empty() {
            return Err(UserError::InvalidInput("name is required".to_string()));
        }
        if params.email.is_empty() {
            return Err(UserError::InvalidInput("email is required".to_string()));
        }
        if existing.values().any(|user| user.has_email(&params.email)) {
            return Err(UserError::DuplicateEmail(params.email.clone()));
        }
        Ok(())
    }

    /// Creates a new User from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the user
    /// * `params` - User creation parameters containing name and email
    fn from_create(id: u64, params: UserCreate) -> Result<Self, UserError> {
        Ok(Self::new(id, params.name, params.email))
    }

    /// Renames the user. Email and id never change after creation.
    fn on_update(&mut self, patch: UserPatch) -> Result<(), UserError> {
        if patch.name.is_empty() {
            return Err(UserError::InvalidInput("name is required".to_string()));
        }
        self.name = patch.name;
        Ok(())
    }

    fn on_delete(&mut self) -> Result<(), UserError> {
        self.deleted = true;
        Ok(())
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }
}
