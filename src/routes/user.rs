use crate::{
    dto::{UserEnvelope, UserPayload},
    errors::ApiError,
    models::User,
    states::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .store
        .list_users()
        .await
        .map_err(|e| ApiError::Storage("Failed to fetch users", e))?;

    Ok(Json(users))
}

/// POST /users/create
/// Body: { "nom": "...", "prenom": "...", "email": "...", "address": "...", "password": "..." }
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let user = state
        .store
        .create_user(payload)
        .await
        .map_err(|e| ApiError::Storage("Failed to create user", e))?;

    info!("User created: {}", user.id);

    Ok(Json(UserEnvelope {
        msg: "User Created",
        user,
    }))
}

/// PUT /users/update/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let user = state
        .store
        .update_user(id, payload)
        .await
        .map_err(|e| ApiError::Storage("Failed to update user", e))?
        .ok_or(ApiError::NotFound("User not found"))?;

    info!("User updated: {}", user.id);

    Ok(Json(UserEnvelope {
        msg: "User Updated",
        user,
    }))
}

/// DELETE /users/delete/{id}
/// 404 when no row matched, unlike the post variant.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let user = state
        .store
        .delete_user(id)
        .await
        .map_err(|e| ApiError::Storage("Failed to delete user", e))?
        .ok_or(ApiError::NotFound("User not found"))?;

    info!("User deleted: {}", user.id);

    Ok(Json(UserEnvelope {
        msg: "User Deleted",
        user,
    }))
}
