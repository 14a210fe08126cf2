//! Graph models for concepts, maps, and their relationships

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Map id assigned to concepts created without an explicit map.
///
/// Legacy records may lack the `mapId` property entirely; queries for this
/// value must also match those records.
pub const DEFAULT_MAP_ID: &str = "default";

/// Fixed page size for map-scoped concept listings. There is no pagination
/// cursor; callers needing more than one page are out of luck for now.
pub const MAP_PAGE_SIZE: usize = 100;

// ============================================================================
// Concept node
// ============================================================================

/// A learned concept — one node of a concept map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptNode {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    #[serde(default)]
    pub mastery_level: MasteryLevel,
    pub emotion: Option<String>,
    /// Historical crisis narrative attached to the concept, consumed by the
    /// narration collaborator.
    pub crisis: Option<String>,
    #[serde(default)]
    pub meta_tags: Vec<String>,
    #[serde(default)]
    pub links: Vec<String>,
    /// Foreign reference to the owning map (not structural containment).
    #[serde(default = "default_map_id")]
    pub map_id: String,
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_map_id() -> String {
    DEFAULT_MAP_ID.to_string()
}

/// How well the user has internalized a concept.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MasteryLevel {
    Mastered,
    Learning,
    #[default]
    Unseen,
}

impl MasteryLevel {
    /// Stored string form (`MASTERED`, `LEARNING`, `UNSEEN`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mastered => "MASTERED",
            Self::Learning => "LEARNING",
            Self::Unseen => "UNSEEN",
        }
    }

    /// Parse the stored string form. Unknown values fall back to `Unseen`
    /// rather than failing the whole row.
    pub fn parse(s: &str) -> Self {
        match s {
            "MASTERED" => Self::Mastered,
            "LEARNING" => Self::Learning,
            _ => Self::Unseen,
        }
    }
}

/// Fields for creating (or re-creating) a concept.
///
/// Optional fields left as `None` never overwrite existing values when the
/// concept already exists.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptDraft {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub map_id: Option<String>,
}

/// Field-level partial update for a concept. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptPatch {
    pub label: Option<String>,
    pub description: Option<String>,
    pub emotion: Option<String>,
    pub crisis: Option<String>,
    pub mastery_level: Option<MasteryLevel>,
    pub meta_tags: Option<Vec<String>>,
    pub links: Option<Vec<String>>,
}

impl ConceptPatch {
    /// True when no field is set — useful for short-circuiting no-op PATCHes.
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.description.is_none()
            && self.emotion.is_none()
            && self.crisis.is_none()
            && self.mastery_level.is_none()
            && self.meta_tags.is_none()
            && self.links.is_none()
    }
}

// ============================================================================
// Map node
// ============================================================================

/// A concept map. Owns concepts by `map_id` reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapNode {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub emoji: String,
    /// Dense ordering index assigned by reorder; absent maps sink to the end
    /// of listings.
    pub sort_order: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Partial update for a map. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

// ============================================================================
// Relationships
// ============================================================================

/// A raw 1-hop relationship row as returned by the store.
///
/// Stores using OPTIONAL MATCH produce a single placeholder row with no type
/// and no neighbor for concepts that have zero relationships in a direction;
/// the relation aggregator filters those out.
#[derive(Debug, Clone)]
pub struct RelationRow {
    pub rel_type: Option<String>,
    pub neighbor_id: Option<String>,
    pub weight: Option<f64>,
}

/// A fully-resolved directed edge, used for bulk graph extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationEdge {
    pub source: String,
    pub target: String,
    pub rel_type: String,
    pub weight: Option<f64>,
}

// ============================================================================
// Narration projection
// ============================================================================

/// The concept projection handed to the LLM narration collaborator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptContext {
    pub label: String,
    pub description: Option<String>,
    pub crisis: Option<String>,
    pub meta_tags: Vec<String>,
}
