use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::models::*;
use crate::planner;
use crate::store::Store;

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
/// The full error is logged server-side for debugging, but clients only
/// see a generic message to avoid leaking internal details.
///
/// Registry contract violations (empty parent name) are validation errors
/// the UI should show as-is, so they pass through with BAD_REQUEST.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    let msg = e.to_string();

    if msg.contains("must not be empty") {
        tracing::warn!("Validation error: {}", msg);
        return (StatusCode::BAD_REQUEST, msg);
    }

    tracing::error!("Internal error: {}", msg);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

fn candidate_not_found() -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, "Candidate not found".to_string())
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Target profile
// ============================================================

pub async fn get_target(
    State(store): State<Store>,
) -> Result<Json<TargetProfile>, (StatusCode, String)> {
    store
        .load_profile()
        .map(|doc| Json(doc.target))
        .map_err(internal_error)
}

/// Wholesale replacement. Reconciles every roster entry's trait map against
/// the new trait list before persisting.
pub async fn put_target(
    State(store): State<Store>,
    Json(target): Json<TargetProfile>,
) -> Result<Json<TargetProfile>, (StatusCode, String)> {
    store
        .replace_target(target)
        .map(|doc| Json(doc.target))
        .map_err(internal_error)
}

// ============================================================
// Roster
// ============================================================

pub async fn list_roster(
    State(store): State<Store>,
) -> Result<Json<Vec<ScoredCandidate>>, (StatusCode, String)> {
    let doc = store.load_profile().map_err(internal_error)?;
    let scored = doc
        .breeding
        .iter()
        .map(|candidate| ScoredCandidate {
            match_percent: planner::match_percentage(candidate, &doc.target, &BODY_PARTS),
            candidate: candidate.clone(),
        })
        .collect();
    Ok(Json(scored))
}

pub async fn add_candidate(
    State(store): State<Store>,
) -> Result<(StatusCode, Json<Candidate>), (StatusCode, String)> {
    store
        .add_candidate()
        .map(|c| (StatusCode::CREATED, Json(c)))
        .map_err(internal_error)
}

pub async fn update_candidate(
    State(store): State<Store>,
    Path(index): Path<usize>,
    Json(input): Json<UpdateCandidateInput>,
) -> Result<Json<Candidate>, (StatusCode, String)> {
    store
        .update_candidate(index, input)
        .map_err(internal_error)?
        .map(Json)
        .ok_or_else(candidate_not_found)
}

pub async fn delete_candidate(
    State(store): State<Store>,
    Path(index): Path<usize>,
) -> Result<StatusCode, (StatusCode, String)> {
    if store.remove_candidate(index).map_err(internal_error)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(candidate_not_found())
    }
}

#[derive(Debug, Deserialize)]
pub struct ReorderInput {
    pub from: usize,
    pub to: usize,
}

pub async fn reorder_roster(
    State(store): State<Store>,
    Json(input): Json<ReorderInput>,
) -> Result<StatusCode, (StatusCode, String)> {
    if store
        .reorder_candidates(input.from, input.to)
        .map_err(internal_error)?
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(candidate_not_found())
    }
}

// ============================================================
// Coverage
// ============================================================

pub async fn get_coverage(
    State(store): State<Store>,
) -> Result<Json<CoverageReport>, (StatusCode, String)> {
    let doc = store.load_profile().map_err(internal_error)?;
    Ok(Json(CoverageReport {
        missing: planner::missing_traits(&doc.target, &doc.breeding),
    }))
}

// ============================================================
// Reference data
// ============================================================

/// The fixed size categories, largest to smallest, for UI dropdowns.
pub async fn list_sizes() -> impl IntoResponse {
    let sizes: Vec<&str> = Size::ALL.iter().map(Size::as_str).collect();
    Json(sizes)
}

pub async fn list_colors(
    State(store): State<Store>,
) -> Result<Json<Vec<CatalogColor>>, (StatusCode, String)> {
    store.load_catalog().map(Json).map_err(internal_error)
}

// ============================================================
// Combination registry
// ============================================================

pub async fn list_combinations(
    State(store): State<Store>,
) -> Result<Json<planner::ComboRegistry>, (StatusCode, String)> {
    store.load_registry().map(Json).map_err(internal_error)
}

/// Upsert one fact. The input shape is the fact itself; the response is the
/// stored fact with both parents folded into its results.
pub async fn put_combination(
    State(store): State<Store>,
    Json(input): Json<ColorFact>,
) -> Result<Json<ColorFact>, (StatusCode, String)> {
    store
        .upsert_fact(&input.parent1, &input.parent2, input.results)
        .map(Json)
        .map_err(internal_error)
}

// ============================================================
// Ancestry
// ============================================================

pub async fn get_ancestry(
    State(store): State<Store>,
    Path(color): Path<String>,
) -> Result<Json<AncestryNode>, (StatusCode, String)> {
    let registry = store.load_registry().map_err(internal_error)?;
    Ok(Json(planner::build_ancestry_tree(&color, &registry)))
}

// ============================================================
// Trait recognition
// ============================================================

#[derive(Debug, Deserialize)]
pub struct RecognizeInput {
    pub text: String,
}

/// Turn OCR'd trait-screen text into proposed candidate fields, matched
/// against the current target trait list.
pub async fn recognize(
    State(store): State<Store>,
    Json(input): Json<RecognizeInput>,
) -> Result<Json<planner::TraitProposal>, (StatusCode, String)> {
    let doc = store.load_profile().map_err(internal_error)?;
    Ok(Json(planner::propose_traits(
        &input.text,
        &doc.target.traits,
    )))
}
