use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ColorFact;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("parent color name must not be empty")]
    EmptyParent,
}

/// The set of known crosses, in insertion/replacement order.
///
/// Serializes as a bare JSON array of facts; this type *is* the combination
/// registry document. At most one fact exists per unordered parent pair;
/// saving a fact for an existing pair replaces it and moves it to the end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComboRegistry {
    facts: Vec<ColorFact>,
}

impl ComboRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_facts(facts: Vec<ColorFact>) -> Self {
        Self { facts }
    }

    pub fn facts(&self) -> &[ColorFact] {
        &self.facts
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// All facts whose results contain `color`, in storage order.
    pub fn facts_producing(&self, color: &str) -> Vec<&ColorFact> {
        self.facts.iter().filter(|f| f.produces(color)).collect()
    }

    /// Record a cross, replacing any existing fact for the unordered pair.
    ///
    /// The stored result list is the caller's sequence de-duplicated by first
    /// occurrence, with whichever parents are missing appended in
    /// (parent1, parent2) order. A cross can always reproduce one of its own
    /// parents, whether or not the caller listed them.
    ///
    /// Empty parent names are a caller contract violation and fail fast.
    pub fn upsert(
        &mut self,
        parent1: &str,
        parent2: &str,
        results: Vec<String>,
    ) -> Result<ColorFact, RegistryError> {
        if parent1.trim().is_empty() || parent2.trim().is_empty() {
            return Err(RegistryError::EmptyParent);
        }

        self.facts.retain(|f| !f.matches_pair(parent1, parent2));

        let mut deduped: Vec<String> = Vec::with_capacity(results.len() + 2);
        for color in results {
            if !deduped.contains(&color) {
                deduped.push(color);
            }
        }
        for parent in [parent1, parent2] {
            if !deduped.iter().any(|r| r == parent) {
                deduped.push(parent.to_string());
            }
        }

        let fact = ColorFact {
            parent1: parent1.to_string(),
            parent2: parent2.to_string(),
            results: deduped,
        };
        self.facts.push(fact.clone());
        Ok(fact)
    }
}
