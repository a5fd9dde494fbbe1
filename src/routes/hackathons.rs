use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use crate::models::{ErrorResponse, HackathonView, HealthResponse, ListHackathonsQuery, ListHackathonsResponse};
use crate::routes::AppState;

/// Configure hackathon listing and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/hackathons", web::get().to(list_hackathons));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// List hackathons with their derived status
///
/// GET /api/hackathons?status={upcoming|ongoing|ended}
async fn list_hackathons(
    state: web::Data<AppState>,
    query: web::Query<ListHackathonsQuery>,
) -> impl Responder {
    let hackathons = match state.source.list_hackathons().await {
        Ok(hackathons) => hackathons,
        Err(e) => {
            tracing::error!("Failed to list hackathons: {}", e);
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "Failed to fetch hackathons".to_string(),
                message: e.to_string(),
                status_code: 502,
            });
        }
    };

    let now = Utc::now();
    let views: Vec<HackathonView> = hackathons
        .into_iter()
        .map(|hackathon| HackathonView {
            status: state.listing_status.classify(&hackathon, now),
            hackathon,
        })
        .filter(|view| query.status.map_or(true, |wanted| view.status == Some(wanted)))
        .collect();

    tracing::debug!("Returning {} hackathons (filter: {:?})", views.len(), query.status);

    HttpResponse::Ok().json(ListHackathonsResponse {
        total: views.len(),
        hackathons: views,
    })
}
