//! Handlers for the `/auth` resource (register, login, refresh, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use kino_core::error::CoreError;
use kino_core::types::DbId;
use kino_db::models::user::RegisterUser;
use kino_db::repositories::{AuthSessionRepo, UserRepo};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh` and `POST /auth/logout`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account and log it in immediately.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterUser>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    input.validate()?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(&state.pool, &input.username, &input.email, &password_hash).await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    let response = create_auth_response(&state, user.id, &user.username, &user.email).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let response = create_auth_response(&state, user.id, &user.username, &user.email).await?;

    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens. The old
/// refresh token is invalidated (token rotation).
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = AuthSessionRepo::find_by_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    if session.expires_at <= Utc::now() {
        AuthSessionRepo::delete_by_token_hash(&state.pool, &token_hash).await?;
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid or expired refresh token".into(),
        )));
    }

    AuthSessionRepo::delete_by_token_hash(&state.pool, &token_hash).await?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let response = create_auth_response(&state, user.id, &user.username, &user.email).await?;

    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Invalidate the presented refresh token. Returns 204 No Content whether or
/// not the token was still active.
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<RefreshRequest>,
) -> AppResult<StatusCode> {
    let token_hash = hash_refresh_token(&input.refresh_token);
    AuthSessionRepo::delete_by_token_hash(&state.pool, &token_hash).await?;

    tracing::info!(user_id = auth_user.user_id, "User logged out");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate access + refresh tokens, persist a session row, and build the response.
async fn create_auth_response(
    state: &AppState,
    user_id: DbId,
    username: &str,
    email: &str,
) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(user_id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    AuthSessionRepo::create(&state.pool, user_id, &refresh_hash, expires_at).await?;

    let expires_in = state.config.jwt.access_token_expiry_mins * 60;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in,
        user: UserInfo {
            id: user_id,
            username: username.to_string(),
            email: email.to_string(),
        },
    })
}
