//! Map API handlers

use crate::store::models::{MapNode, MapPatch};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::handlers::{AppError, AtlasState, Envelope};

const DEFAULT_MAP_EMOJI: &str = "🧠";

// ============================================================================
// Request types
// ============================================================================

#[derive(Deserialize)]
pub struct CreateMapRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub emoji: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderMapsRequest {
    pub ordered_ids: Option<Vec<String>>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/maps — all maps, sorted maps first in their assigned order.
pub async fn list_maps(
    State(state): State<AtlasState>,
) -> Result<Json<Envelope<Vec<MapNode>>>, AppError> {
    let maps = state.store.list_maps().await?;
    Ok(Envelope::ok(maps))
}

/// POST /api/maps — create a map.
pub async fn create_map(
    State(state): State<AtlasState>,
    Json(req): Json<CreateMapRequest>,
) -> Result<(StatusCode, Json<Envelope<MapNode>>), AppError> {
    let (Some(id), Some(name)) = (req.id, req.name) else {
        return Err(AppError::BadRequest("id and name are required".to_string()));
    };
    if id.trim().is_empty() || name.trim().is_empty() {
        return Err(AppError::BadRequest("id and name are required".to_string()));
    }

    let map = MapNode {
        id,
        name,
        description: req.description,
        emoji: req.emoji.unwrap_or_else(|| DEFAULT_MAP_EMOJI.to_string()),
        sort_order: None,
        created_at: Some(chrono::Utc::now()),
    };
    let created = state.store.create_map(&map).await?;
    Ok((StatusCode::CREATED, Envelope::ok(created)))
}

/// GET /api/maps/{id} — a single map.
pub async fn get_map(
    State(state): State<AtlasState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<MapNode>>, AppError> {
    let map = state
        .store
        .get_map(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("map '{}' not found", id)))?;
    Ok(Envelope::ok(map))
}

/// PATCH /api/maps/{id} — partial update.
pub async fn update_map(
    State(state): State<AtlasState>,
    Path(id): Path<String>,
    Json(patch): Json<MapPatch>,
) -> Result<Json<Envelope<MapNode>>, AppError> {
    let map = state
        .store
        .update_map(&id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("map '{}' not found", id)))?;
    Ok(Envelope::ok(map))
}

/// DELETE /api/maps/{id} — delete the map and all concepts referencing it.
pub async fn delete_map(
    State(state): State<AtlasState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<serde_json::Value>>, AppError> {
    let deleted_concepts = state
        .store
        .delete_map(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("map '{}' not found", id)))?;
    Ok(Envelope::ok(serde_json::json!({
        "deletedConcepts": deleted_concepts
    })))
}

/// POST /api/maps/reorder — full replace of map ordering.
pub async fn reorder_maps(
    State(state): State<AtlasState>,
    Json(req): Json<ReorderMapsRequest>,
) -> Result<Json<Envelope<serde_json::Value>>, AppError> {
    let Some(ordered_ids) = req.ordered_ids else {
        return Err(AppError::BadRequest("orderedIds is required".to_string()));
    };
    state.store.reorder_maps(&ordered_ids).await?;
    Ok(Envelope::ok(serde_json::json!({
        "reordered": ordered_ids.len()
    })))
}
