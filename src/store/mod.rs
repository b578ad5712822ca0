mod catalog;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::models::{
    reconcile_traits, Candidate, CatalogColor, ColorFact, ProfileDocument, TargetProfile,
    UpdateCandidateInput, BODY_PARTS,
};
use crate::planner::ComboRegistry;

const PROFILE_FILE: &str = "horse-info.json";
const COMBOS_FILE: &str = "color-combos.json";
const COLORS_FILE: &str = "colors.csv";

/// Document storage for the planner: the profile document, the combination
/// registry document, and the read-only color catalog, all in one data
/// directory.
///
/// Absent or unreadable documents are "no data": reads fall back to
/// defaults and never fail the caller. Only writes propagate errors.
/// Clones share one lock, so read-modify-write operations are serialized
/// across API handlers.
pub struct Store {
    dir: Arc<Mutex<PathBuf>>,
}

impl Store {
    pub fn open(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)?;
        // The UI polls the registry before any fact is saved; make sure the
        // document exists from the start.
        let combos = dir.join(COMBOS_FILE);
        if !combos.exists() {
            fs::write(&combos, "[]")?;
        }
        Ok(Self {
            dir: Arc::new(Mutex::new(dir)),
        })
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "paddock")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Self::open(dirs.data_dir().to_path_buf())
    }

    // ============================================================
    // Profile document
    // ============================================================

    pub fn load_profile(&self) -> Result<ProfileDocument> {
        let dir = self.dir.lock().expect("store lock poisoned");
        Ok(read_profile(&dir))
    }

    pub fn save_profile(&self, doc: &ProfileDocument) -> Result<()> {
        let dir = self.dir.lock().expect("store lock poisoned");
        write_profile(&dir, doc)
    }

    /// Replace the target wholesale, reconcile every candidate's trait map
    /// against the new trait list, and persist.
    ///
    /// This is the only way target edits are applied; the reconciliation is
    /// part of the save, not cleanup the caller may skip.
    pub fn replace_target(&self, mut target: TargetProfile) -> Result<ProfileDocument> {
        target.normalize();
        let dir = self.dir.lock().expect("store lock poisoned");
        let mut doc = read_profile(&dir);
        doc.breeding = reconcile_traits(&target, &doc.breeding);
        doc.target = target;
        write_profile(&dir, &doc)?;
        Ok(doc)
    }

    // ============================================================
    // Roster operations
    // ============================================================

    /// Append a fresh candidate inheriting the target's size and gender.
    pub fn add_candidate(&self) -> Result<Candidate> {
        let dir = self.dir.lock().expect("store lock poisoned");
        let mut doc = read_profile(&dir);
        let candidate = Candidate::for_target(&doc.target);
        doc.breeding.push(candidate.clone());
        write_profile(&dir, &doc)?;
        Ok(candidate)
    }

    /// Apply field edits to the candidate at `index`. Returns `None` when the
    /// index is out of range.
    ///
    /// Trait entries for names outside the current target trait list and body
    /// colors for unknown parts are dropped; an empty body-color value clears
    /// the part.
    pub fn update_candidate(
        &self,
        index: usize,
        input: UpdateCandidateInput,
    ) -> Result<Option<Candidate>> {
        let dir = self.dir.lock().expect("store lock poisoned");
        let mut doc = read_profile(&dir);
        let target_traits = doc.target.traits.clone();
        let Some(candidate) = doc.breeding.get_mut(index) else {
            return Ok(None);
        };

        if let Some(name) = input.name {
            candidate.name = name;
        }
        if let Some(size) = input.size {
            candidate.size = size;
        }
        if let Some(gender) = input.gender {
            candidate.gender = gender;
        }
        for (name, value) in input.traits {
            if target_traits.contains(&name) {
                candidate.traits.insert(name, value);
            }
        }
        for (part, color) in input.body_colors {
            if !BODY_PARTS.contains(&part.as_str()) {
                continue;
            }
            if color.is_empty() {
                candidate.body_colors.remove(&part);
            } else {
                candidate.body_colors.insert(part, color);
            }
        }

        let updated = candidate.clone();
        write_profile(&dir, &doc)?;
        Ok(Some(updated))
    }

    /// Delete the candidate at `index`. Returns false when out of range.
    pub fn remove_candidate(&self, index: usize) -> Result<bool> {
        let dir = self.dir.lock().expect("store lock poisoned");
        let mut doc = read_profile(&dir);
        if index >= doc.breeding.len() {
            return Ok(false);
        }
        doc.breeding.remove(index);
        write_profile(&dir, &doc)?;
        Ok(true)
    }

    /// Move the candidate at `from` to position `to` (display order only;
    /// scoring ignores roster order). Returns false when either index is out
    /// of range.
    pub fn reorder_candidates(&self, from: usize, to: usize) -> Result<bool> {
        let dir = self.dir.lock().expect("store lock poisoned");
        let mut doc = read_profile(&dir);
        if from >= doc.breeding.len() || to >= doc.breeding.len() {
            return Ok(false);
        }
        let moved = doc.breeding.remove(from);
        doc.breeding.insert(to, moved);
        write_profile(&dir, &doc)?;
        Ok(true)
    }

    // ============================================================
    // Combination registry document
    // ============================================================

    pub fn load_registry(&self) -> Result<ComboRegistry> {
        let dir = self.dir.lock().expect("store lock poisoned");
        Ok(read_registry(&dir))
    }

    /// Record a cross and persist the registry. Returns the stored fact,
    /// parents included in its results.
    pub fn upsert_fact(
        &self,
        parent1: &str,
        parent2: &str,
        results: Vec<String>,
    ) -> Result<ColorFact> {
        let dir = self.dir.lock().expect("store lock poisoned");
        let mut registry = read_registry(&dir);
        let fact = registry.upsert(parent1, parent2, results)?;
        let raw = serde_json::to_string_pretty(&registry)?;
        fs::write(dir.join(COMBOS_FILE), raw)?;
        Ok(fact)
    }

    // ============================================================
    // Color catalog
    // ============================================================

    /// The static display catalog, sorted by name. Missing file → empty.
    pub fn load_catalog(&self) -> Result<Vec<CatalogColor>> {
        let dir = self.dir.lock().expect("store lock poisoned");
        match fs::read_to_string(dir.join(COLORS_FILE)) {
            Ok(raw) => Ok(catalog::parse_catalog(&raw)),
            Err(_) => Ok(Vec::new()),
        }
    }
}

impl Clone for Store {
    fn clone(&self) -> Self {
        Self {
            dir: self.dir.clone(),
        }
    }
}

fn read_profile(dir: &Path) -> ProfileDocument {
    match fs::read_to_string(dir.join(PROFILE_FILE)) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Unreadable profile document, using defaults: {}", e);
            ProfileDocument::default()
        }),
        Err(_) => ProfileDocument::default(),
    }
}

fn write_profile(dir: &Path, doc: &ProfileDocument) -> Result<()> {
    let raw = serde_json::to_string_pretty(doc)?;
    fs::write(dir.join(PROFILE_FILE), raw)?;
    Ok(())
}

fn read_registry(dir: &Path) -> ComboRegistry {
    match fs::read_to_string(dir.join(COMBOS_FILE)) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Unreadable combination registry, using empty: {}", e);
            ComboRegistry::new()
        }),
        Err(_) => ComboRegistry::new(),
    }
}
