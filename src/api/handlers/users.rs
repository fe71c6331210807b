//! Handlers for user management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::{UserBody, UserDto};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /api/users`
///
/// Returns a plain JSON array of user objects; empty array if none exist.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserDto>>, AppError> {
    let users = state.user_service.get_all_users().await?;

    Ok(Json(users))
}

/// Retrieves a single user.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no user has that id.
pub async fn get_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserDto>, AppError> {
    let user = state.user_service.get_user_by_id(id).await?;

    Ok(Json(user))
}

/// Creates a new user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// The body carries `name` and `email`; the store assigns the id. Returns
/// 201 Created with the persisted user.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserBody>,
) -> Result<(StatusCode, Json<UserDto>), AppError> {
    let user = state.user_service.create_user(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Replaces the user at the given id.
///
/// # Endpoint
///
/// `PUT /api/users/{id}`
///
/// Full replacement of `name` and `email`; the identity is fixed to the path
/// parameter. An id that does not exist yet is created (the store upserts),
/// so this endpoint never returns 404.
pub async fn update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UserBody>,
) -> Result<Json<UserDto>, AppError> {
    let user = state.user_service.update_user(id, payload).await?;

    Ok(Json(user))
}

/// Deletes the user at the given id.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
///
/// Idempotent: returns 204 No Content whether or not the id existed.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
