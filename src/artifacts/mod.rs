mod store;

pub use store::{ArtifactStore, ARTIFACT_FILES};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::career::CareerClassifier;
use crate::vectorizer::SparseVector;

/// A course as exported by the training pipeline. Courses align by
/// position with the course-vector artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub skills: BTreeSet<String>,
}

/// A career path with the skills and experience the role requires.
/// List order is significant: the classifier was trained against
/// exactly this ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPath {
    pub id: i64,
    pub title: String,
    pub required_skills: BTreeSet<String>,
    pub required_experience: f32,
}

/// One course plus its TF-IDF vector.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub course: Course,
    pub vector: SparseVector,
}

/// Course metadata zipped with course vectors, length-checked at load.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    pub entries: Vec<CatalogEntry>,
}

impl CourseCatalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Career paths zipped with the classifier trained against them,
/// dimension-checked at load.
#[derive(Debug, Clone)]
pub struct CareerModel {
    pub paths: Vec<CareerPath>,
    pub classifier: CareerClassifier,
}
