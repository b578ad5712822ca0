use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Candidate fields proposed from a block of screen-captured text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitProposal {
    pub name: String,
    pub traits: BTreeMap<String, bool>,
}

/// Propose candidate fields from OCR'd trait-screen text.
///
/// The first line is the animal's name; a trait is proposed as present when
/// any line contains its name, case-insensitively. OCR output is noisy, so
/// this is substring matching over whole lines rather than anything
/// positional. The capture and recognition pipeline lives outside the core;
/// this only turns its text into attribute values for the caller to review.
pub fn propose_traits(text: &str, known_traits: &[String]) -> TraitProposal {
    let name = text.lines().next().unwrap_or("").trim().to_string();

    let mut traits: BTreeMap<String, bool> =
        known_traits.iter().map(|t| (t.clone(), false)).collect();

    for line in text.lines() {
        let line = line.to_lowercase();
        for trait_name in known_traits {
            if line.contains(&trait_name.to_lowercase()) {
                traits.insert(trait_name.clone(), true);
            }
        }
    }

    TraitProposal { name, traits }
}
