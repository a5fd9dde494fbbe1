use actix_web::{web, HttpResponse, Responder};
use thiserror::Error;
use tracing::Instrument;
use crate::core::replies::APOLOGY;
use crate::models::{ChatRequest, ChatResponse};
use crate::routes::AppState;

/// Reasons a chat request could not be answered normally
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Invalid chat payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Chat payload larger than {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Failed to read chat payload: {0}")]
    PayloadRead(String),
}

/// Configure chat routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/ai-chat", web::post().to(ai_chat));
}

/// Chat endpoint
///
/// POST /api/ai-chat
///
/// Request body:
/// ```json
/// { "message": "string" }
/// ```
///
/// Always answers 200 with `{ "reply": "string" }`; failures become an apology.
/// The body is read here rather than through an extractor so that an oversized
/// or broken payload still gets a reply.
async fn ai_chat(state: web::Data<AppState>, payload: web::Payload) -> impl Responder {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("ai_chat", %request_id);

    async move {
        let reply = match answer(&state, payload).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::info!("Answering with apology: {}", e);
                APOLOGY.to_string()
            }
        };

        HttpResponse::Ok().json(ChatResponse { reply })
    }
    .instrument(span)
    .await
}

async fn answer(state: &AppState, payload: web::Payload) -> Result<String, ChatError> {
    let body = payload
        .to_bytes_limited(state.chat_body_limit)
        .await
        .map_err(|_| ChatError::PayloadTooLarge(state.chat_body_limit))?
        .map_err(|e| ChatError::PayloadRead(e.to_string()))?;

    let request: ChatRequest = serde_json::from_slice(&body)?;
    tracing::debug!("Chat message: {:?}", request.message);
    Ok(state.assistant.respond(&request.message).await)
}
