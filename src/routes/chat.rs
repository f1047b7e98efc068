// src/routes/chat.rs
use axum::{Json, extract::State};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::{
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

/// Always answers 200; inference failures surface as the fallback text.
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let ChatRequest { persona, messages } = payload;

    let span = info_span!("chat", request_id = %Uuid::new_v4());
    let answer = async {
        info!(turns = messages.len(), "generating persona reply");
        generate_reply(&state.inference, &persona, &messages).await
    }
    .instrument(span)
    .await;

    Json(ChatResponse { answer })
}
