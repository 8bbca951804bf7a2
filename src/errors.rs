use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Failure raised by a [`crate::store::Store`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Everything a handler can answer with besides 200.
///
/// Storage detail is logged here and never serialized to the caller;
/// the wire only carries the short generic message.
#[derive(Debug)]
pub enum ApiError {
    /// 404 with `{"msg": …}` — an id-targeted statement matched no row.
    NotFound(&'static str),
    /// 500 with `{"msg": …}` — the storage round-trip itself failed.
    Storage(&'static str, StoreError),
    /// 500 for the post listing, which reports failures under an
    /// `"error"` key instead of `"msg"` (kept for wire compatibility).
    PostListFailed(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "msg": msg })),
            )
                .into_response(),
            ApiError::Storage(msg, err) => {
                error!("{}: {}", msg, err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "msg": msg })),
                )
                    .into_response()
            }
            ApiError::PostListFailed(err) => {
                error!("Failed to fetch posts: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "Failed to fetch posts" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_msg() {
        let response = ApiError::NotFound("Post not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "msg": "Post not found" })
        );
    }

    #[tokio::test]
    async fn storage_maps_to_500_without_detail() {
        let err = StoreError::Database(sqlx::Error::PoolTimedOut);
        let response = ApiError::Storage("Failed to add post", err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "msg": "Failed to add post" })
        );
    }

    #[tokio::test]
    async fn post_list_failure_uses_legacy_error_key() {
        let err = StoreError::Database(sqlx::Error::PoolTimedOut);
        let response = ApiError::PostListFailed(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "error": "Failed to fetch posts" })
        );
    }
}
