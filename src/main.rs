use std::sync::Arc;

use anyhow::Context;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tracing::info;

use persona_chat_backend::{
    config::Config, logging, routes, services::inference::InferenceClient, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = Config::from_env()?;
    let inference = InferenceClient::new(config.inference.clone())?;
    let state = Arc::new(AppState::new(inference));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router()
        .route("/", get(|| async { "YOU ARE CONNECTED" }))
        .with_state(state)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(
        addr = %config.bind_addr,
        model = %config.inference.model,
        endpoint = %config.inference.api_url,
        "persona chat backend listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
