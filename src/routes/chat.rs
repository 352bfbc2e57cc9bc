use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload.inspect_err(|rejection| {
        tracing::warn!(status = %rejection.status(), "Rejected chat body: {}", rejection.body_text());
    })?;

    let response = state.relay.respond(&payload.message).await?;

    Ok(Json(ChatResponse { response }))
}
