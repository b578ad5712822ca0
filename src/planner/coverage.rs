use crate::models::{Candidate, TargetProfile};

/// Target traits that no roster entry has, preserving target order.
///
/// An empty result means every target trait is covered by at least one
/// candidate. An empty roster misses everything.
pub fn missing_traits(target: &TargetProfile, roster: &[Candidate]) -> Vec<String> {
    target
        .traits
        .iter()
        .filter(|name| !roster.iter().any(|c| c.has_trait(name)))
        .cloned()
        .collect()
}
