//! Authentication routes
//!
//! Registration, login, and the token-protected identity echo. Handlers
//! only marshal requests and responses; all credential decisions happen in
//! the auth service.

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use live_chat_shared::types::{AuthResponse, LoginRequest, RegisterRequest, UserDto};
use validator::Validate;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
}

/// Register a new user
///
/// POST /api/v1/auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let auth = state
        .auth()
        .register(&req.username, &req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: auth.user.into(),
            token: auth.token,
        }),
    ))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let auth = state.auth().login(&req.email, &req.password).await?;

    Ok(Json(AuthResponse {
        user: auth.user.into(),
        token: auth.token,
    }))
}

/// Get the user identified by the bearer token
///
/// GET /api/v1/auth/me
async fn me(CurrentUser(user): CurrentUser) -> ApiResult<Json<UserDto>> {
    Ok(Json(user.into()))
}
