//! Authentication middleware
//!
//! Axum extractor that resolves a bearer token to the user it identifies.
//! Resolution goes through the auth service, so a token whose subject has
//! been deleted is rejected even when its signature still verifies.

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::User;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};

/// The user resolved from the request's bearer token
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("missing authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("invalid authorization format".to_string()))?;

        let user = app_state.auth().resolve_token(token).await?;

        Ok(CurrentUser(user))
    }
}
