pub mod config;
pub mod dto;
pub mod errors;
pub mod models;
pub mod routes;
pub mod states;
pub mod store;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use states::AppState;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the full application router over the given state.
///
/// Kept in the library so integration tests can drive the exact router
/// the binary serves, with a test-double store injected.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Posts
        .route("/", get(routes::post::list_posts))
        .route("/create", post(routes::post::create_post))
        .route("/update/{id}", put(routes::post::update_post))
        .route("/delete/{id}", delete(routes::post::delete_post))
        // Users
        .route("/users", get(routes::user::list_users))
        .route("/users/create", post(routes::user::create_user))
        .route("/users/update/{id}", put(routes::user::update_user))
        .route("/users/delete/{id}", delete(routes::user::delete_user))
        // Auxiliary
        .route("/health", get(routes::health::health_check))
        .route("/api-docs", get(routes::docs::api_docs))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
