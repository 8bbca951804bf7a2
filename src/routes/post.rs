use crate::{
    dto::{PostEnvelope, PostPayload},
    errors::ApiError,
    models::Post,
    states::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

/// GET /
/// Response: 200 with an array of every post, in storage order.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state
        .store
        .list_posts()
        .await
        .map_err(ApiError::PostListFailed)?;

    Ok(Json(posts))
}

/// POST /create
/// Body: { "title": "...", "content": "...", "description": "...", "dateCreation": "..." }
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<PostPayload>,
) -> Result<Json<PostEnvelope>, ApiError> {
    let post = state
        .store
        .create_post(payload)
        .await
        .map_err(|e| ApiError::Storage("Failed to add post", e))?;

    info!("Post created: {}", post.id);

    Ok(Json(PostEnvelope {
        msg: "Post Added",
        post: Some(post),
    }))
}

/// PUT /update/{id}
/// Overwrites every non-id field with the payload values; 404 if no row matched.
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PostPayload>,
) -> Result<Json<PostEnvelope>, ApiError> {
    let post = state
        .store
        .update_post(id, payload)
        .await
        .map_err(|e| ApiError::Storage("Failed to update post", e))?
        .ok_or(ApiError::NotFound("Post not found"))?;

    info!("Post updated: {}", post.id);

    Ok(Json(PostEnvelope {
        msg: "Post Updated",
        post: Some(post),
    }))
}

/// DELETE /delete/{id}
/// Answers 200 even when no row matched; the `post` key is then absent
/// from the body. Users 404 in the same situation — kept asymmetric on
/// purpose (see DESIGN.md).
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PostEnvelope>, ApiError> {
    let post = state
        .store
        .delete_post(id)
        .await
        .map_err(|e| ApiError::Storage("Failed to delete post", e))?;

    if let Some(post) = &post {
        info!("Post deleted: {}", post.id);
    }

    Ok(Json(PostEnvelope {
        msg: "Post Deleted",
        post,
    }))
}
