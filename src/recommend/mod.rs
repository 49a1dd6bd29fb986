mod ranker;

pub use ranker::rank;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::artifacts::CourseCatalog;
use crate::vectorizer::SparseVector;

/// One recommended course with its similarity to the user's skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub course_id: i64,
    pub title: String,
    pub description: String,
    pub match_score: f32,
    pub skills_covered: BTreeSet<String>,
}

/// Materialize the top-ranked catalog entries for a skill query vector.
pub fn recommend_courses(
    query: &SparseVector,
    catalog: &CourseCatalog,
    top_k: usize,
) -> Vec<Recommendation> {
    rank(query, catalog, top_k)
        .into_iter()
        .map(|(idx, score)| {
            let course = &catalog.entries[idx].course;
            Recommendation {
                course_id: course.id,
                title: course.title.clone(),
                description: course.description.clone(),
                match_score: score,
                skills_covered: course.skills.clone(),
            }
        })
        .collect()
}
