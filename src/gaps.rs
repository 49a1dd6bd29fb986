use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use crate::artifacts::{CareerPath, Course};
use crate::error::MlError;

/// Course pointer carried in a learning path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRef {
    pub course_id: i64,
    pub title: String,
}

/// A missing skill with courses that teach it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningStep {
    pub skill: String,
    pub recommended_courses: Vec<CourseRef>,
}

/// Gap analysis between a user's current skills and a target role.
/// All skill lists are sorted, and the learning path follows the order
/// of `missing_skills`, so repeated analyses serialize identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub target_role: String,
    pub completion_percentage: f32,
    pub missing_skills: Vec<String>,
    pub mastered_skills: Vec<String>,
    pub additional_skills: Vec<String>,
    pub learning_path: Vec<LearningStep>,
}

/// Compare current skills against the target role's requirements.
///
/// Role titles match case-insensitively; skill names compare exactly.
/// `courses` may be empty when the course artifact is absent, which
/// degrades the learning path to empty course lists. A role with no
/// required skills reports 0.0 completion.
pub fn analyze(
    current_skills: &[String],
    target_role: &str,
    paths: &[CareerPath],
    courses: &[Course],
    courses_per_skill: usize,
) -> Result<SkillGapReport, MlError> {
    let target = paths
        .iter()
        .find(|path| path.title.eq_ignore_ascii_case(target_role))
        .ok_or(MlError::TargetRoleNotFound)?;

    let current: BTreeSet<String> = current_skills.iter().cloned().collect();

    let missing: Vec<String> = target
        .required_skills
        .difference(&current)
        .cloned()
        .collect();
    let mastered: Vec<String> = target
        .required_skills
        .intersection(&current)
        .cloned()
        .collect();
    let additional: Vec<String> = current
        .difference(&target.required_skills)
        .cloned()
        .collect();

    let completion_percentage = if target.required_skills.is_empty() {
        0.0
    } else {
        100.0 * mastered.len() as f32 / target.required_skills.len() as f32
    };

    let learning_path = missing
        .iter()
        .map(|skill| LearningStep {
            skill: skill.clone(),
            recommended_courses: courses_for_skill(skill, courses, courses_per_skill),
        })
        .collect();

    debug!(
        "Gap analysis for '{}': {} missing, {} mastered",
        target.title,
        missing.len(),
        mastered.len()
    );

    Ok(SkillGapReport {
        target_role: target.title.clone(),
        completion_percentage,
        missing_skills: missing,
        mastered_skills: mastered,
        additional_skills: additional,
        learning_path,
    })
}

/// First `limit` catalog courses whose skill set contains the skill.
fn courses_for_skill(skill: &str, courses: &[Course], limit: usize) -> Vec<CourseRef> {
    courses
        .iter()
        .filter(|course| course.skills.contains(skill))
        .take(limit)
        .map(|course| CourseRef {
            course_id: course.id,
            title: course.title.clone(),
        })
        .collect()
}
