//! Postgres user store
//!
//! Uniqueness of email and username is enforced by the database's unique
//! constraints; a violation is translated into `StoreError::Conflict` with
//! the colliding field, identified by constraint name rather than by
//! matching on error text.

use super::{NewUser, StoreError, UniqueField, User, UserStore};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Constraint names from the users-table migration
const EMAIL_CONSTRAINT: &str = "users_email_key";
const USERNAME_CONSTRAINT: &str = "users_username_key";

/// sqlx-backed user store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password_hash, created_at
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(classify_create_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Other(e.into()))?
        .ok_or(StoreError::NotFound)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Other(e.into()))?
        .ok_or(StoreError::NotFound)
    }
}

fn classify_create_error(err: sqlx::Error) -> StoreError {
    let conflicted = match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => match db.constraint() {
            Some(EMAIL_CONSTRAINT) => Some(UniqueField::Email),
            Some(USERNAME_CONSTRAINT) => Some(UniqueField::Username),
            _ => None,
        },
        _ => None,
    };

    match conflicted {
        Some(field) => StoreError::Conflict(field),
        None => StoreError::Other(err.into()),
    }
}
