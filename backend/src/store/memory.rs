//! In-memory user store
//!
//! Backs the test suite and local experiments. Matches the Postgres
//! implementation's conflict semantics: email collisions are reported
//! before username collisions.

use super::{NewUser, StoreError, UniqueField, User, UserStore};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// HashMap-backed user store
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delete a user, returning the removed record if it existed
    ///
    /// Not part of the `UserStore` contract; used by tests that need a
    /// token whose subject no longer resolves.
    pub async fn remove(&self, id: Uuid) -> Option<User> {
        self.users.write().await.remove(&id)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        // Conflict check and insert under one write lock, so concurrent
        // creates cannot race past the uniqueness rules
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict(UniqueField::Email));
        }
        if users.values().any(|u| u.username == user.username) {
            return Err(StoreError::Conflict(UniqueField::Username));
        }

        let stored = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn find_by_email(&self, email: &str) -> Result<User, StoreError> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<User, StoreError> {
        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}
