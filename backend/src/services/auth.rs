//! Authentication service
//!
//! Orchestrates registration, login, and token resolution: password policy,
//! credential hashing, the user store, and the token codec are sequenced
//! here and every failure is reclassified into the closed `AuthError` set.
//!
//! The service holds no mutable state — an immutable token codec and the
//! store handle — so any number of requests can run through one instance
//! concurrently. Hashing runs per-request on the blocking thread pool.

use crate::auth::{AuthError, JwtService, PasswordPolicy, PasswordService};
use crate::store::{NewUser, StoreError, User, UserStore};
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

/// A successfully authenticated user with a freshly issued token
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub user: User,
    pub token: String,
}

/// Authentication service
///
/// Dependencies are injected at construction; tests pass an
/// `InMemoryUserStore` for deterministic behavior.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    jwt: JwtService,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, jwt: JwtService) -> Self {
        Self { store, jwt }
    }

    /// Register a new user and issue their first token
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Authenticated, AuthError> {
        PasswordPolicy::validate(password)?;

        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(|err| {
                error!(error = %err, "password hashing failed");
                AuthError::Internal(err)
            })?;

        let user = self
            .store
            .create(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await
            .map_err(|err| match err {
                StoreError::Conflict(field) => AuthError::Conflict(field),
                other => store_fault("user create failed", other),
            })?;

        let token = self.jwt.issue(user.id, &user.email, None)?;

        Ok(Authenticated { user, token })
    }

    /// Login with email and password
    ///
    /// Policy failure, unknown email, and wrong password all collapse into
    /// the same `InvalidCredentials` value so a caller cannot probe which
    /// step failed.
    pub async fn login(&self, email: &str, password: &str) -> Result<Authenticated, AuthError> {
        // A password that cannot pass policy cannot be a stored one;
        // reject before the store round trip
        if PasswordPolicy::validate(password).is_err() {
            debug!("login attempt with policy-invalid password");
            return Err(AuthError::InvalidCredentials);
        }

        let user = match self.store.find_by_email(email).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => {
                debug!("login attempt for unknown email");
                return Err(AuthError::InvalidCredentials);
            }
            Err(other) => return Err(store_fault("user lookup failed", other)),
        };

        let verified =
            PasswordService::verify_async(user.password_hash.clone(), password.to_string()).await;
        if !verified {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.jwt.issue(user.id, &user.email, None)?;

        Ok(Authenticated { user, token })
    }

    /// Verify a bearer token and resolve it to the user it identifies
    ///
    /// A subject that no longer exists is indistinguishable from a bad
    /// token.
    pub async fn resolve_token(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.jwt.parse_and_verify(token)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)?;

        match self.store.find_by_id(user_id).await {
            Ok(user) => Ok(user),
            Err(StoreError::NotFound) => Err(AuthError::InvalidToken),
            Err(other) => Err(store_fault("token subject lookup failed", other)),
        }
    }
}

/// Log an unexpected store failure with detail, surface it opaquely
fn store_fault(context: &'static str, err: StoreError) -> AuthError {
    error!(error = %err, "{}", context);
    AuthError::Internal(anyhow::Error::new(err).context(context))
}
