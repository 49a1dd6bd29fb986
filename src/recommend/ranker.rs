use std::cmp::Ordering;
use tracing::debug;

use crate::artifacts::CourseCatalog;
use crate::vectorizer::SparseVector;

/// Score every catalog entry against the query and return the top_k as
/// (catalog index, cosine score), best first. Equal scores rank the
/// lower index first, so results are stable across runs and reloads.
pub fn rank(query: &SparseVector, catalog: &CourseCatalog, top_k: usize) -> Vec<(usize, f32)> {
    let mut scores: Vec<(usize, f32)> = catalog
        .entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| (idx, query.cosine(&entry.vector)))
        .collect();

    debug!("Scored {} catalog entries", scores.len());

    scores.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    scores.truncate(top_k);
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::{CatalogEntry, Course};

    fn catalog(vectors: Vec<SparseVector>) -> CourseCatalog {
        let entries = vectors
            .into_iter()
            .enumerate()
            .map(|(i, vector)| CatalogEntry {
                course: Course {
                    id: i as i64,
                    title: format!("Course {}", i),
                    description: String::new(),
                    skills: Default::default(),
                },
                vector,
            })
            .collect();
        CourseCatalog { entries }
    }

    fn vector(entries: &[(u32, f32)]) -> SparseVector {
        SparseVector {
            dim: 4,
            indices: entries.iter().map(|(i, _)| *i).collect(),
            values: entries.iter().map(|(_, v)| *v).collect(),
        }
    }

    #[test]
    fn test_rank_orders_by_similarity() {
        let catalog = catalog(vec![
            vector(&[(0, 1.0), (1, 1.0)]),
            vector(&[(2, 1.0)]),
            vector(&[(0, 1.0)]),
        ]);
        let query = vector(&[(0, 3.0)]);

        let ranked = rank(&query, &catalog, 5);
        assert_eq!(ranked.len(), 3);
        // Exact direction match first, partial overlap second, disjoint last
        assert_eq!(ranked[0].0, 2);
        assert_eq!(ranked[1].0, 0);
        assert_eq!(ranked[2].0, 1);
        assert!((ranked[0].1 - 1.0).abs() < 1e-6);
        assert_eq!(ranked[2].1, 0.0);
    }

    #[test]
    fn test_rank_ties_prefer_lower_index() {
        let catalog = catalog(vec![
            vector(&[(1, 1.0)]),
            vector(&[(0, 2.0)]),
            vector(&[(0, 5.0)]),
        ]);
        let query = vector(&[(0, 1.0)]);

        let ranked = rank(&query, &catalog, 5);
        // Entries 1 and 2 both have cosine 1.0 with the query
        assert_eq!(ranked[0].0, 1);
        assert_eq!(ranked[1].0, 2);
        assert_eq!(ranked[2].0, 0);
    }

    #[test]
    fn test_rank_order_unchanged_by_query_scaling() {
        let catalog = catalog(vec![
            vector(&[(0, 1.0), (1, 1.0)]),
            vector(&[(2, 1.0)]),
            vector(&[(0, 1.0)]),
            vector(&[(1, 2.0), (3, 1.0)]),
        ]);
        let query = vector(&[(0, 3.0), (1, 1.0)]);
        let mut scaled = query.clone();
        for v in &mut scaled.values {
            *v *= 3.7;
        }

        let order = |q: &SparseVector| -> Vec<usize> {
            rank(q, &catalog, 5).iter().map(|(i, _)| *i).collect()
        };
        // Cosine normalizes the query, so positive scaling cannot reorder
        assert_eq!(order(&query), order(&scaled));
    }

    #[test]
    fn test_rank_zero_norm_query_scores_everything_zero() {
        let catalog = catalog(vec![vector(&[(0, 1.0)]), vector(&[(1, 1.0)])]);
        let query = vector(&[]);

        let ranked = rank(&query, &catalog, 5);
        assert_eq!(ranked, vec![(0, 0.0), (1, 0.0)]);
    }

    #[test]
    fn test_rank_truncates_to_top_k() {
        let catalog = catalog((0..10).map(|i| vector(&[(i % 4, 1.0)])).collect());
        let query = vector(&[(0, 1.0)]);

        let ranked = rank(&query, &catalog, 5);
        assert_eq!(ranked.len(), 5);
    }

    #[test]
    fn test_rank_empty_catalog() {
        let catalog = catalog(vec![]);
        let query = vector(&[(0, 1.0)]);

        assert!(rank(&query, &catalog, 5).is_empty());
    }
}
