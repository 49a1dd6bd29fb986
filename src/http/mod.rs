mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::artifacts::ArtifactStore;
use crate::recommender::Recommender;

/// Shared state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub store: ArtifactStore,
}

/// Assemble the service router: the three operations plus a health probe.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/recommend", post(handlers::recommend))
        .route("/career-prediction", post(handlers::career_prediction))
        .route("/skill-gaps", post(handlers::skill_gaps))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
