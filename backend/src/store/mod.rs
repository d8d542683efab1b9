//! User record store
//!
//! The narrow repository contract the credential engine depends on, plus
//! the Postgres implementation and an in-memory implementation for
//! deterministic tests. The engine never sees store internals beyond the
//! three-way `StoreError` classification.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use live_chat_shared::types::UserDto;
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

mod memory;
mod postgres;

pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;

/// A persisted user record
///
/// `password_hash` is always a credential-hasher digest, never raw input,
/// and is skipped on serialization so it cannot leak into responses.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
        }
    }
}

/// Input for creating a user; the store assigns `id` and `created_at`
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Unique field a registration can collide on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Email,
    Username,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueField::Email => f.write_str("email"),
            UniqueField::Username => f.write_str("username"),
        }
    }
}

/// Store error classification
///
/// A closed set of tagged variants; callers never match on error text.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} already exists")]
    Conflict(UniqueField),

    #[error("record not found")]
    NotFound,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// User record store contract
///
/// Uniqueness of email and username is enforced atomically by the
/// implementation; concurrent conflicting creates are signaled through
/// `StoreError::Conflict`, never detected by callers up front.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user and return the stored record
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> Result<User, StoreError>;

    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<User, StoreError>;
}
