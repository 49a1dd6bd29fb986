use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures raised by the artifact store when a model file exists but
/// cannot be used. A missing file is not an error at this level; loaders
/// report absence as `Ok(None)` and the recommender turns that into the
/// matching business error.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed artifact {name}: {source}")]
    Malformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid artifact {name}: {reason}")]
    Invalid { name: String, reason: String },

    #[error("Misaligned artifacts: {0}")]
    Misaligned(String),
}

/// Business-level error type for the three core operations.
/// Implements `IntoResponse` so axum handlers can return `Result<T, MlError>`.
#[derive(Debug, Error)]
pub enum MlError {
    /// The vectorizer, course vectors, or classifier artifact is absent.
    #[error("Models not trained yet")]
    ModelsNotTrained,

    /// The career-paths artifact is absent.
    #[error("Career data not available")]
    CareerDataUnavailable,

    /// No career path matches the requested target role.
    #[error("Target role not found")]
    TargetRoleNotFound,

    /// An artifact exists but is unreadable, malformed, or misaligned.
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

impl IntoResponse for MlError {
    fn into_response(self) -> Response {
        let status = match &self {
            MlError::ModelsNotTrained | MlError::CareerDataUnavailable => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            MlError::TargetRoleNotFound => StatusCode::NOT_FOUND,
            MlError::Artifact(e) => {
                tracing::error!("Artifact error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
