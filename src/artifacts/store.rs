use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::career::CareerClassifier;
use crate::error::ArtifactError;
use crate::vectorizer::{SparseVector, TfidfVectorizer};

use super::{CareerModel, CareerPath, CatalogEntry, Course, CourseCatalog};

pub const VECTORIZER_FILE: &str = "vectorizer.json";
pub const COURSE_VECTORS_FILE: &str = "courses_vectors.json";
pub const COURSES_FILE: &str = "courses_data.json";
pub const CAREER_PATHS_FILE: &str = "career_paths_data.json";
pub const CLASSIFIER_FILE: &str = "career_predictor.json";

/// Every artifact the training pipeline exports, in reporting order.
pub const ARTIFACT_FILES: [&str; 5] = [
    VECTORIZER_FILE,
    COURSE_VECTORS_FILE,
    COURSES_FILE,
    CAREER_PATHS_FILE,
    CLASSIFIER_FILE,
];

/// Classifier export: one weight row and one intercept per career path.
#[derive(Debug, Deserialize)]
struct ClassifierDoc {
    weights: Vec<Vec<f32>>,
    intercepts: Vec<f32>,
}

/// Read access to the trained artifacts in the models directory.
///
/// Loaders return `Ok(None)` when the artifact file is absent; the
/// recommender maps absence to business errors. `Err` means a file
/// exists but is unreadable, malformed, or inconsistent with its
/// companion artifacts. Artifacts are re-read on every call so a fresh
/// training run is picked up without a restart.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    models_dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(models_dir: impl Into<PathBuf>) -> Self {
        Self {
            models_dir: models_dir.into(),
        }
    }

    /// Create the models directory when missing. Startup bootstrap only;
    /// the loaders never create anything.
    pub fn ensure_models_dir(&self) -> Result<(), ArtifactError> {
        fs::create_dir_all(&self.models_dir).map_err(|source| ArtifactError::Io {
            name: self.models_dir.display().to_string(),
            source,
        })?;
        info!("Models directory ready at {}", self.models_dir.display());
        Ok(())
    }

    /// True when the named artifact file exists.
    pub fn is_present(&self, file: &str) -> bool {
        self.models_dir.join(file).exists()
    }

    pub fn load_vectorizer(&self) -> Result<Option<TfidfVectorizer>, ArtifactError> {
        let model: TfidfVectorizer = match self.read_json(VECTORIZER_FILE)? {
            Some(model) => model,
            None => return Ok(None),
        };
        for (term, &slot) in &model.vocabulary {
            if slot >= model.idf.len() {
                return Err(ArtifactError::Invalid {
                    name: VECTORIZER_FILE.to_string(),
                    reason: format!(
                        "vocabulary slot {} for term '{}' exceeds {} idf weights",
                        slot,
                        term,
                        model.idf.len()
                    ),
                });
            }
        }
        Ok(Some(model))
    }

    pub fn load_courses(&self) -> Result<Option<Vec<Course>>, ArtifactError> {
        self.read_json(COURSES_FILE)
    }

    /// Course vectors zipped with course metadata. Both artifacts must be
    /// present, well formed, and the same length.
    pub fn load_catalog(&self) -> Result<Option<CourseCatalog>, ArtifactError> {
        let vectors: Vec<SparseVector> = match self.read_json(COURSE_VECTORS_FILE)? {
            Some(vectors) => vectors,
            None => return Ok(None),
        };
        let courses = match self.load_courses()? {
            Some(courses) => courses,
            None => return Ok(None),
        };
        if vectors.len() != courses.len() {
            return Err(ArtifactError::Misaligned(format!(
                "{} course vectors but {} course records",
                vectors.len(),
                courses.len()
            )));
        }
        for (i, vector) in vectors.iter().enumerate() {
            vector.validate().map_err(|reason| ArtifactError::Invalid {
                name: COURSE_VECTORS_FILE.to_string(),
                reason: format!("vector {}: {}", i, reason),
            })?;
        }
        let entries = courses
            .into_iter()
            .zip(vectors)
            .map(|(course, vector)| CatalogEntry { course, vector })
            .collect();
        Ok(Some(CourseCatalog { entries }))
    }

    pub fn load_career_paths(&self) -> Result<Option<Vec<CareerPath>>, ArtifactError> {
        self.read_json(CAREER_PATHS_FILE)
    }

    /// Career paths zipped with the classifier trained against them. The
    /// classifier must score one output per path from two features per
    /// path.
    pub fn load_career_model(&self) -> Result<Option<CareerModel>, ArtifactError> {
        let doc: ClassifierDoc = match self.read_json(CLASSIFIER_FILE)? {
            Some(doc) => doc,
            None => return Ok(None),
        };
        let paths = match self.load_career_paths()? {
            Some(paths) => paths,
            None => return Ok(None),
        };
        let classifier =
            CareerClassifier::from_parts(doc.weights, doc.intercepts).map_err(|reason| {
                ArtifactError::Invalid {
                    name: CLASSIFIER_FILE.to_string(),
                    reason,
                }
            })?;
        if classifier.outputs() != paths.len() || classifier.features() != 2 * paths.len() {
            return Err(ArtifactError::Misaligned(format!(
                "classifier scores {} outputs from {} features, but {} career paths need {} features",
                classifier.outputs(),
                classifier.features(),
                paths.len(),
                2 * paths.len()
            )));
        }
        Ok(Some(CareerModel { paths, classifier }))
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, ArtifactError> {
        let path = self.models_dir.join(name);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Artifact {} not present", name);
                return Ok(None);
            }
            Err(source) => {
                return Err(ArtifactError::Io {
                    name: name.to_string(),
                    source,
                })
            }
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| ArtifactError::Malformed {
                name: name.to_string(),
                source,
            })
    }
}
