use crate::artifacts::CareerPath;

use super::UserProfile;

/// Build the classifier input: two features per career path, in path
/// order. Feature 2i is the share of the path's required skills the
/// profile covers; feature 2i+1 is 1.0 when the profile meets the
/// path's experience requirement.
///
/// A path with no required skills scores a 0.0 match ratio rather than
/// dividing by zero, so half-seeded career data stays rankable.
pub fn build_features(profile: &UserProfile, paths: &[CareerPath]) -> Vec<f32> {
    let mut features = Vec::with_capacity(paths.len() * 2);
    for path in paths {
        let skill_match = if path.required_skills.is_empty() {
            0.0
        } else {
            let matched = path.required_skills.intersection(&profile.skills).count();
            matched as f32 / path.required_skills.len() as f32
        };
        let experience_match = if profile.experience >= path.required_experience {
            1.0
        } else {
            0.0
        };
        features.push(skill_match);
        features.push(experience_match);
    }
    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn profile(skills: &[&str], experience: f32) -> UserProfile {
        UserProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience,
        }
    }

    fn path(required: &[&str], experience: f32) -> CareerPath {
        CareerPath {
            id: 1,
            title: "Data Scientist".to_string(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            required_experience: experience,
        }
    }

    #[test]
    fn test_two_features_per_path() {
        let paths = vec![path(&["Python"], 1.0), path(&["SQL"], 2.0)];
        let features = build_features(&profile(&["Python"], 1.0), &paths);
        assert_eq!(features.len(), 4);
        assert_eq!(features, vec![1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_skill_match_is_a_ratio() {
        let paths = vec![path(&["Python", "SQL", "Statistics"], 3.0)];
        let features = build_features(&profile(&["Python", "SQL"], 0.0), &paths);
        assert!((features[0] - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_experience_boundary_is_inclusive() {
        let paths = vec![path(&["Python"], 3.0)];
        assert_eq!(build_features(&profile(&[], 3.0), &paths)[1], 1.0);
        assert_eq!(build_features(&profile(&[], 2.9), &paths)[1], 0.0);
    }

    #[test]
    fn test_empty_required_skills_score_zero() {
        let paths = vec![path(&[], 0.0)];
        let features = build_features(&profile(&["Python"], 1.0), &paths);
        assert_eq!(features[0], 0.0);
        assert!(!features[0].is_nan());
    }

    #[test]
    fn test_skill_comparison_is_case_sensitive() {
        let paths = vec![path(&["Python"], 0.0)];
        let features = build_features(&profile(&["python"], 0.0), &paths);
        assert_eq!(features[0], 0.0);
    }
}
