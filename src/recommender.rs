use tracing::debug;

use crate::artifacts::ArtifactStore;
use crate::career::{self, CareerPrediction, UserProfile};
use crate::config::RecommendConfig;
use crate::error::{ArtifactError, MlError};
use crate::gaps::{self, SkillGapReport};
use crate::recommend::{self, Recommendation};

/// The three matching operations behind the service endpoints.
///
/// Artifacts are read through the store on every call, so a fresh
/// training run is picked up without restarting the service. Missing
/// artifacts surface as business errors, never as I/O faults.
#[derive(Debug, Clone)]
pub struct Recommender {
    store: ArtifactStore,
    top_k: usize,
    courses_per_skill: usize,
}

impl Recommender {
    pub fn new(store: ArtifactStore, config: &RecommendConfig) -> Self {
        Self {
            store,
            top_k: config.top_k,
            courses_per_skill: config.courses_per_skill,
        }
    }

    /// Rank catalog courses against the user's skills.
    pub fn recommend(&self, skills: &[String]) -> Result<Vec<Recommendation>, MlError> {
        let vectorizer = self
            .store
            .load_vectorizer()?
            .ok_or(MlError::ModelsNotTrained)?;
        let catalog = self.store.load_catalog()?.ok_or(MlError::ModelsNotTrained)?;

        // Course vectors must live in the space the vectorizer produces,
        // or the cosine scores silently compare unrelated terms
        if let Some(entry) = catalog
            .entries
            .iter()
            .find(|e| e.vector.dim != vectorizer.dimensions())
        {
            return Err(ArtifactError::Misaligned(format!(
                "course vector has dimension {} but the vectorizer produces {}",
                entry.vector.dim,
                vectorizer.dimensions()
            ))
            .into());
        }

        debug!("Recommending from {} skills over {} courses", skills.len(), catalog.len());

        let query = vectorizer.transform(&skills.join(" "));
        Ok(recommend::recommend_courses(&query, &catalog, self.top_k))
    }

    /// Predict the user's most likely career paths.
    pub fn predict_career(&self, profile: &UserProfile) -> Result<Vec<CareerPrediction>, MlError> {
        let model = self
            .store
            .load_career_model()?
            .ok_or(MlError::ModelsNotTrained)?;

        debug!(
            "Predicting careers for {} skills, {} years experience",
            profile.skills.len(),
            profile.experience
        );

        Ok(career::predict_careers(profile, &model, self.top_k))
    }

    /// Compare current skills against a target role's requirements.
    pub fn analyze_gap(
        &self,
        current_skills: &[String],
        target_role: &str,
    ) -> Result<SkillGapReport, MlError> {
        let paths = self
            .store
            .load_career_paths()?
            .ok_or(MlError::CareerDataUnavailable)?;
        let courses = self.store.load_courses()?.unwrap_or_default();

        gaps::analyze(
            current_skills,
            target_role,
            &paths,
            &courses,
            self.courses_per_skill,
        )
    }
}
