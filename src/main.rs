use posts_api::{app, config::Config, states::AppState, store::PgStore};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env();

    let store = match PgStore::connect(&config.database_url).await {
        Ok(store) => {
            info!("Connected to PostgreSQL");
            store
        }
        Err(err) => {
            error!("Error connecting to PostgreSQL: {}", err);
            std::process::exit(1);
        }
    };

    let state = AppState {
        store: Arc::new(store),
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("Server running on http://{}", addr);
    info!("API docs available at http://{}/api-docs", addr);

    axum::serve(listener, app(state)).await.unwrap();
}
