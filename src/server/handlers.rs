use super::types::{ChatRequest, ChatResponse, HealthResponse};
use crate::{Result, chat::ChatProxy};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::info;

pub const GREETING: &str = "Dhruv Rathee Chatbot API is running!";

#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<ChatProxy>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: GREETING.to_string(),
    })
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let response = state.proxy.handle(&request.user_input).await?;
    info!("Chat request answered ({} bytes)", response.len());

    Ok(Json(ChatResponse { response }))
}
