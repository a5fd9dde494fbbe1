//! HackHub Assist - chat assistant service for the HackHub hackathon platform
//!
//! This library answers free-text questions about hackathons. Messages go
//! through an ordered intent cascade and are answered from the hackathon
//! listing of the HackHub backend, ranked by lexical token overlap.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Assistant, Intent, StatusBoundary, StatusClassifier, detect, normalize, token_overlap};
pub use crate::models::{Hackathon, Round, EventStatus, ScoredHackathon, ReplyOptions, ChatRequest, ChatResponse};
pub use crate::services::{BackendClient, BackendError, HackathonSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        assert_eq!(normalize("Hi, there!  "), "hi there");
        assert_eq!(detect("upcoming"), Intent::Status(EventStatus::Upcoming));
    }
}
