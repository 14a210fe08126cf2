//! Graph traversal API handlers: relations, paths, relationship creation

use crate::query::{ConceptRelations, PathResult, TraversalMode};
use crate::store::models::ConceptContext;
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
pub struct PathQuery {
    pub start_id: Option<String>,
    pub end_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelationshipRequest {
    pub source_id: Option<String>,
    pub target_id: Option<String>,
    #[serde(rename = "type")]
    pub rel_type: Option<String>,
    pub weight: Option<f64>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/graph/concepts/{id}/relations — the concept with its 1-hop
/// relationships in both directions. 404 for missing ids; an isolated
/// concept returns empty lists.
pub async fn get_relations(
    State(state): State<AtlasState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<ConceptRelations>>, AppError> {
    let relations = state.relations.get_relations(&id).await?;
    Ok(Envelope::ok(relations))
}

/// GET /api/graph/path?startId=&endId= — shortest accessible path between
/// two concepts, ignoring stored edge direction, at most 10 hops.
pub async fn find_path(
    State(state): State<AtlasState>,
    Query(params): Query<PathQuery>,
) -> Result<Json<Envelope<PathResult>>, AppError> {
    let (Some(start_id), Some(end_id)) = (params.start_id, params.end_id) else {
        return Err(AppError::BadRequest(
            "startId and endId are required".to_string(),
        ));
    };

    let path = state
        .paths
        .find_path(&start_id, &end_id, TraversalMode::Undirected)
        .await?;
    Ok(Envelope::ok(path))
}

/// POST /api/graph/relationships — create a typed directed relationship.
pub async fn create_relationship(
    State(state): State<AtlasState>,
    Json(req): Json<CreateRelationshipRequest>,
) -> Result<(StatusCode, Json<Envelope<serde_json::Value>>), AppError> {
    let (Some(source_id), Some(target_id), Some(rel_type)) =
        (req.source_id, req.target_id, req.rel_type)
    else {
        return Err(AppError::BadRequest(
            "sourceId, targetId and type are required".to_string(),
        ));
    };

    let created = state
        .store
        .create_relationship(&source_id, &target_id, &rel_type, req.weight)
        .await?;
    if !created {
        return Err(AppError::NotFound(
            "source or target concept not found".to_string(),
        ));
    }

    Ok((
        StatusCode::CREATED,
        Envelope::ok(serde_json::json!({
            "source": source_id,
            "target": target_id,
        })),
    ))
}

/// GET /api/narration/concepts/{id}/context — the concept projection the
/// LLM narration collaborator consumes. The narration layer depends on this
/// accessor; the core has no dependency in the other direction.
pub async fn get_narration_context(
    State(state): State<AtlasState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<ConceptContext>>, AppError> {
    let context = state
        .store
        .get_concept_context(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("concept '{}' not found", id)))?;
    Ok(Envelope::ok(context))
}
