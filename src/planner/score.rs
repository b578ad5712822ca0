use crate::models::{Candidate, TargetProfile};

/// Percentage of the target a candidate matches, in `[0, 100]`.
///
/// One point per target trait the candidate has, one each for matching size
/// and gender, and one per required body part whose color matches, where
/// "no color set" on both sides counts as a match. Every comparison is exact
/// equality; there is no partial credit. Pure function of its inputs: call
/// it again after any edit, never cache across mutations.
pub fn match_percentage(
    candidate: &Candidate,
    target: &TargetProfile,
    required_parts: &[&str],
) -> f64 {
    let total = target.traits.len() + 2 + required_parts.len();
    if total == 0 {
        return 0.0;
    }

    let mut matches = 0usize;
    for name in &target.traits {
        if candidate.has_trait(name) {
            matches += 1;
        }
    }
    if candidate.size == target.size {
        matches += 1;
    }
    if candidate.gender == target.gender {
        matches += 1;
    }
    for part in required_parts {
        let wanted = target.body_colors.get(*part).map(String::as_str).unwrap_or("");
        let actual = candidate.body_color(part).unwrap_or("");
        if wanted == actual {
            matches += 1;
        }
    }

    100.0 * matches as f64 / total as f64
}
