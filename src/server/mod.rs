pub mod handlers;
pub mod types;

use crate::{
    Result,
    chat::ChatProxy,
    config::Config,
    inference::{HuggingFaceClient, InferenceClient},
};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

pub use handlers::AppState;

/// Any origin, method and header, with credentials. Wildcards cannot be
/// combined with credentials, so the request values are mirrored.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/chat", post(handlers::chat))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn app(config: &Config, client: Arc<dyn InferenceClient>) -> Router {
    let proxy = ChatProxy::new(client, &config.inference);
    router(AppState {
        proxy: Arc::new(proxy),
    })
}

pub async fn run(config: Config) -> Result<()> {
    if config.inference.api_key.is_empty() {
        warn!("HF_API_KEY is not set; the inference API will reject requests");
    }

    let client = HuggingFaceClient::new(config.inference.clone())?;
    info!("Forwarding chat requests to {}", client.api_url());

    let app = app(&config, Arc::new(client));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
