use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sparse vector over a fixed vocabulary, stored as parallel index/value
/// arrays. Indices are strictly ascending; `validate` checks the
/// representation when a vector comes from an artifact rather than from
/// the vectorizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    /// Dimensionality of the dense space this vector lives in.
    pub dim: usize,
    pub indices: Vec<u32>,
    pub values: Vec<f32>,
}

impl SparseVector {
    /// Dot product via a merge walk over the two ascending index lists.
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let mut sum = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f32 {
        self.values.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    /// Cosine similarity, defined as 0.0 when either vector has zero norm.
    pub fn cosine(&self, other: &SparseVector) -> f32 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            return 0.0;
        }
        self.dot(other) / denom
    }

    /// Check the representation invariants, returning a description of the
    /// first violation found.
    pub fn validate(&self) -> Result<(), String> {
        if self.indices.len() != self.values.len() {
            return Err(format!(
                "{} indices but {} values",
                self.indices.len(),
                self.values.len()
            ));
        }
        for pair in self.indices.windows(2) {
            if pair[0] >= pair[1] {
                return Err(format!("indices not strictly ascending around {}", pair[1]));
            }
        }
        if let Some(&last) = self.indices.last() {
            if last as usize >= self.dim {
                return Err(format!(
                    "index {} out of range for dimension {}",
                    last, self.dim
                ));
            }
        }
        Ok(())
    }
}
