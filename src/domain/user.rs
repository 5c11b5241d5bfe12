use serde::Serialize;

/// Represents a registered user in the system.
///
/// `deleted` is store bookkeeping for soft deletes and never leaves the
/// process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(skip)]
    pub deleted: bool,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

/// Payload for updating an existing user. Only the name is mutable.
#[derive(Debug, Clone)]
pub struct UserPatch {
    pub name: String,
}

impl User {
    /// Creates a live (not deleted) user record.
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            deleted: false,
        }
    }

    /// Email comparison used for uniqueness checks.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

impl UserCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
