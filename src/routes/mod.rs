// Route exports
pub mod chat;
pub mod hackathons;

use actix_web::web;
use crate::core::{Assistant, StatusClassifier};
use crate::services::HackathonSource;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub assistant: Assistant,
    pub source: Arc<dyn HackathonSource>,
    /// Status policy of the listing endpoint
    pub listing_status: StatusClassifier,
    /// Largest chat body read before answering with an apology
    pub chat_body_limit: usize,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(chat::configure)
            .configure(hackathons::configure),
    );
}
