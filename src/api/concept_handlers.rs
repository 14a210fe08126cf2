//! Concept API handlers

use crate::store::models::{ConceptDraft, ConceptNode, ConceptPatch, DEFAULT_MAP_ID};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::handlers::{AppError, AtlasState, Envelope};

// ============================================================================
// Request types
// ============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptListQuery {
    pub map_id: Option<String>,
}

/// Create-concept body. `id` and `label` are required but parsed as options
/// so their absence maps to 400 rather than a deserialization failure.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConceptRequest {
    pub id: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub map_id: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/concepts?mapId= — list concepts for a map (default map when
/// omitted). Capped at the store's fixed page size.
pub async fn list_concepts(
    State(state): State<AtlasState>,
    Query(params): Query<ConceptListQuery>,
) -> Result<Json<Envelope<Vec<ConceptNode>>>, AppError> {
    let map_id = params.map_id.as_deref().unwrap_or(DEFAULT_MAP_ID);
    let concepts = state.store.get_concepts_by_map(map_id).await?;
    Ok(Envelope::ok(concepts))
}

/// POST /api/concepts — create or merge a concept.
pub async fn create_concept(
    State(state): State<AtlasState>,
    Json(req): Json<CreateConceptRequest>,
) -> Result<(StatusCode, Json<Envelope<ConceptNode>>), AppError> {
    let (Some(id), Some(label)) = (req.id, req.label) else {
        return Err(AppError::BadRequest("id and label are required".to_string()));
    };
    if id.trim().is_empty() || label.trim().is_empty() {
        return Err(AppError::BadRequest("id and label are required".to_string()));
    }

    let draft = ConceptDraft {
        id,
        label,
        description: req.description,
        map_id: req.map_id,
    };
    let concept = state.store.upsert_concept(&draft).await?;
    Ok((StatusCode::CREATED, Envelope::ok(concept)))
}

/// PATCH /api/concepts/{id} — field-level partial update.
pub async fn update_concept(
    State(state): State<AtlasState>,
    Path(id): Path<String>,
    Json(patch): Json<ConceptPatch>,
) -> Result<Json<Envelope<ConceptNode>>, AppError> {
    let concept = state
        .store
        .update_concept(&id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("concept '{}' not found", id)))?;
    Ok(Envelope::ok(concept))
}

/// DELETE /api/concepts/{id} — remove a concept and its relationships.
pub async fn delete_concept(
    State(state): State<AtlasState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<serde_json::Value>>, AppError> {
    let deleted = state.store.delete_concept(&id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound(format!("concept '{}' not found", id)));
    }
    Ok(Envelope::ok(serde_json::json!({ "deleted": deleted })))
}
