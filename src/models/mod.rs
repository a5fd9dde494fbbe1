// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Hackathon, Round, EventStatus, ScoredHackathon, HackathonView, ReplyOptions};
pub use requests::{ChatRequest, ListHackathonsQuery};
pub use responses::{ChatResponse, ListHackathonsResponse, HealthResponse, ErrorResponse};
