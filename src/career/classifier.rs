use ndarray::{Array1, Array2, ArrayView1};

/// Pre-trained one-vs-rest logistic layer: one weight row and one
/// intercept per career path, exported by the training pipeline.
#[derive(Debug, Clone)]
pub struct CareerClassifier {
    weights: Array2<f32>,
    intercepts: Array1<f32>,
}

impl CareerClassifier {
    /// Assemble from row-major weight rows and per-output intercepts.
    /// Returns a description of the problem when the shapes disagree.
    pub fn from_parts(weights: Vec<Vec<f32>>, intercepts: Vec<f32>) -> Result<Self, String> {
        let rows = weights.len();
        let cols = weights.first().map(Vec::len).unwrap_or(0);
        if let Some(row) = weights.iter().find(|row| row.len() != cols) {
            return Err(format!(
                "weight rows have mixed lengths ({} and {})",
                cols,
                row.len()
            ));
        }
        if intercepts.len() != rows {
            return Err(format!(
                "{} weight rows but {} intercepts",
                rows,
                intercepts.len()
            ));
        }
        let flat: Vec<f32> = weights.into_iter().flatten().collect();
        let weights = Array2::from_shape_vec((rows, cols), flat).map_err(|e| e.to_string())?;
        Ok(Self {
            weights,
            intercepts: Array1::from_vec(intercepts),
        })
    }

    /// Number of career paths the model scores.
    pub fn outputs(&self) -> usize {
        self.weights.nrows()
    }

    /// Length of the feature vector the model expects. Callers must pass
    /// exactly this many features to `predict`; the artifact store only
    /// hands out classifiers sized for the career-path list they were
    /// loaded with.
    pub fn features(&self) -> usize {
        self.weights.ncols()
    }

    /// Independent probability per career path: sigmoid(W·x + b). The
    /// outputs are each in [0, 1] but are not constrained to sum to 1.
    pub fn predict(&self, features: &[f32]) -> Vec<f32> {
        let x = ArrayView1::from(features);
        let logits = self.weights.dot(&x) + &self.intercepts;
        logits.mapv(sigmoid).to_vec()
    }
}

fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}
