use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::debug;

use crate::artifacts::ARTIFACT_FILES;
use crate::career::{CareerPrediction, UserProfile};
use crate::error::MlError;
use crate::gaps::SkillGapReport;
use crate::recommend::Recommendation;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
}

pub async fn recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, MlError> {
    debug!("Recommend request with {} skills", req.skills.len());

    let recommendations = state.recommender.recommend(&req.skills)?;
    Ok(Json(RecommendResponse { recommendations }))
}

#[derive(Debug, Deserialize)]
pub struct CareerPredictionRequest {
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: f32,
}

#[derive(Debug, Serialize)]
pub struct CareerPredictionResponse {
    pub predictions: Vec<CareerPrediction>,
}

pub async fn career_prediction(
    State(state): State<AppState>,
    Json(req): Json<CareerPredictionRequest>,
) -> Result<Json<CareerPredictionResponse>, MlError> {
    debug!(
        "Career prediction request with {} skills, {} years experience",
        req.skills.len(),
        req.experience
    );

    let profile = UserProfile {
        skills: req.skills.into_iter().collect(),
        experience: req.experience,
    };
    let predictions = state.recommender.predict_career(&profile)?;
    Ok(Json(CareerPredictionResponse { predictions }))
}

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    pub current_skills: Vec<String>,
    pub target_role: String,
}

pub async fn skill_gaps(
    State(state): State<AppState>,
    Json(req): Json<SkillGapRequest>,
) -> Result<Json<SkillGapReport>, MlError> {
    debug!("Skill gap request for role '{}'", req.target_role);

    let report = state
        .recommender
        .analyze_gap(&req.current_skills, &req.target_role)?;
    Ok(Json(report))
}

/// Health probe reporting presence of every trained artifact.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let mut components = HashMap::new();
    let mut present = 0;

    for file in ARTIFACT_FILES {
        let available = state.store.is_present(file);
        if available {
            present += 1;
        }
        let status = if available { "available" } else { "missing" };
        components.insert(file.trim_end_matches(".json").to_string(), status.to_string());
    }

    let status = if present == ARTIFACT_FILES.len() {
        "healthy"
    } else if present > 0 {
        "degraded"
    } else {
        "not_trained"
    };

    Json(json!({
        "status": status,
        "components": components,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
