use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body parts that carry a color requirement, in display order.
///
/// Matches the in-game trait screen layout, top-left to bottom-right.
pub const BODY_PARTS: [&str; 9] = [
    "Coat Top",
    "Coat Bottom",
    "Hair",
    "Hoof",
    "Nose",
    "Sock",
    "Paint",
    "Pattern",
    "Keratin",
];

/// Horse size category, largest to smallest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Size {
    Draft,
    Giant,
    Huge,
    Big,
    Normal,
    Little,
    Small,
    Tiny,
    Teeny,
}

impl Size {
    pub const ALL: [Size; 9] = [
        Self::Draft,
        Self::Giant,
        Self::Huge,
        Self::Big,
        Self::Normal,
        Self::Little,
        Self::Small,
        Self::Tiny,
        Self::Teeny,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Giant => "Giant",
            Self::Huge => "Huge",
            Self::Big => "Big",
            Self::Normal => "Normal",
            Self::Little => "Little",
            Self::Small => "Small",
            Self::Tiny => "Tiny",
            Self::Teeny => "Teeny",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }
}

/// The desired outcome of the breeding program.
///
/// There is exactly one target per profile document. It is replaced wholesale
/// on every settings save, never patched field by field; after a save the
/// roster must be passed through [`reconcile_traits`] so every candidate's
/// trait map matches the new trait list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetProfile {
    pub name: String,
    pub size: Size,
    pub gender: Gender,
    /// Trait names in display order. Order is meaningful and preserved
    /// across edits; names are unique within the list.
    pub traits: Vec<String>,
    /// Required color per body part. An absent part means no requirement.
    #[serde(rename = "bodyColors", default)]
    pub body_colors: BTreeMap<String, String>,
}

impl Default for TargetProfile {
    fn default() -> Self {
        Self {
            name: "Dream Horse".to_string(),
            size: Size::Normal,
            gender: Gender::Female,
            traits: vec![
                "Speed".to_string(),
                "Color".to_string(),
                "Temperament".to_string(),
            ],
            body_colors: BTreeMap::new(),
        }
    }
}

impl TargetProfile {
    /// Trim trait names, drop empties, and de-duplicate by first occurrence.
    ///
    /// Settings forms submit the raw edit list; this restores the uniqueness
    /// invariant without disturbing the order of the surviving names.
    pub fn normalize(&mut self) {
        let mut seen: Vec<String> = Vec::with_capacity(self.traits.len());
        for raw in self.traits.drain(..) {
            let name = raw.trim().to_string();
            if !name.is_empty() && !seen.contains(&name) {
                seen.push(name);
            }
        }
        self.traits = seen;
    }
}

/// One breeding-roster entry, evaluated against the target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub size: Size,
    pub gender: Gender,
    /// Trait name to "has it" flag. Absence reads as false.
    #[serde(default)]
    pub traits: BTreeMap<String, bool>,
    #[serde(rename = "bodyColors", default)]
    pub body_colors: BTreeMap<String, String>,
}

impl Candidate {
    /// A fresh roster entry inheriting the target's size and gender, with
    /// every target trait present and unset.
    pub fn for_target(target: &TargetProfile) -> Self {
        Self {
            name: "New Horse".to_string(),
            size: target.size,
            gender: target.gender,
            traits: target.traits.iter().map(|t| (t.clone(), false)).collect(),
            body_colors: BTreeMap::new(),
        }
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.get(name).copied().unwrap_or(false)
    }

    pub fn body_color(&self, part: &str) -> Option<&str> {
        self.body_colors.get(part).map(String::as_str)
    }
}

/// Rebuild every candidate's trait map against the current target trait list.
///
/// Traits added to the target appear unset; traits removed from the target are
/// deleted. Required after every target save; candidates edited under an old
/// trait list would otherwise score against stale keys.
pub fn reconcile_traits(target: &TargetProfile, roster: &[Candidate]) -> Vec<Candidate> {
    roster
        .iter()
        .map(|candidate| {
            let traits = target
                .traits
                .iter()
                .map(|name| (name.clone(), candidate.has_trait(name)))
                .collect();
            Candidate {
                traits,
                ..candidate.clone()
            }
        })
        .collect()
}

/// The persisted profile document: the target plus the breeding roster.
///
/// Roster order is meaningful for display only, not for scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileDocument {
    #[serde(default)]
    pub target: TargetProfile,
    #[serde(default)]
    pub breeding: Vec<Candidate>,
}

/// Input for editing a roster entry. All fields are optional for partial updates.
///
/// Trait entries for names outside the current target trait list and body
/// colors for unknown parts are ignored, keeping the candidate invariants
/// intact between target saves. An empty body-color value clears the part.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCandidateInput {
    pub name: Option<String>,
    pub size: Option<Size>,
    pub gender: Option<Gender>,
    #[serde(default)]
    pub traits: BTreeMap<String, bool>,
    #[serde(rename = "bodyColors", default)]
    pub body_colors: BTreeMap<String, String>,
}

/// A roster entry decorated with its computed match percentage, used for
/// roster responses. Never persisted; the score is recomputed on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub match_percent: f64,
}

/// Coverage report: target traits no roster entry satisfies, in target order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageReport {
    pub missing: Vec<String>,
}
