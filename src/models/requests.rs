use serde::{Deserialize, Serialize};
use crate::models::domain::EventStatus;

/// Chat message sent by the in-app assistant widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Query string for the hackathon listing endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListHackathonsQuery {
    #[serde(default)]
    pub status: Option<EventStatus>,
}
