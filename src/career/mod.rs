mod classifier;
mod features;

pub use classifier::CareerClassifier;
pub use features::build_features;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use crate::artifacts::CareerModel;

/// A user's declared skills and years of experience.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub skills: BTreeSet<String>,
    pub experience: f32,
}

/// One ranked career suggestion with the skill overlap that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPrediction {
    pub career_id: i64,
    pub title: String,
    pub probability: f32,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Rank career paths for a profile using the pre-trained classifier.
///
/// Sorted by probability descending; the sort is stable, so paths with
/// equal probabilities keep their catalog order. Skill lists come out
/// sorted because they are drawn from ordered sets.
pub fn predict_careers(
    profile: &UserProfile,
    model: &CareerModel,
    top_k: usize,
) -> Vec<CareerPrediction> {
    let features = build_features(profile, &model.paths);
    let probabilities = model.classifier.predict(&features);

    let mut predictions: Vec<CareerPrediction> = model
        .paths
        .iter()
        .zip(probabilities)
        .map(|(path, probability)| CareerPrediction {
            career_id: path.id,
            title: path.title.clone(),
            probability,
            matching_skills: path
                .required_skills
                .intersection(&profile.skills)
                .cloned()
                .collect(),
            missing_skills: path
                .required_skills
                .difference(&profile.skills)
                .cloned()
                .collect(),
        })
        .collect();

    predictions.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    predictions.truncate(top_k);

    debug!("Predicted {} career paths", predictions.len());

    predictions
}
