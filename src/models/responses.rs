use serde::{Deserialize, Serialize};
use crate::models::domain::HackathonView;

/// Reply to a chat message; always returned with HTTP 200
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Response for the hackathon listing endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ListHackathonsResponse {
    pub hackathons: Vec<HackathonView>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
