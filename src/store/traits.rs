//! GraphStore trait definition
//!
//! Abstract interface over all graph persistence operations, enabling
//! testing with an in-memory mock and keeping the traversal layer independent
//! of the concrete backend. The store handle is constructed once at process
//! start and injected as `Arc<dyn GraphStore>` — there is no process-global
//! connection.

use crate::store::error::StoreResult;
use crate::store::models::*;
use async_trait::async_trait;

/// Abstract interface for graph database operations.
///
/// Methods return `Ok(None)` (or a zero count) for absent ids rather than an
/// error; translating absence into `StoreError::NotFound` is the concern of
/// the query and HTTP layers, which know what the caller asked for.
#[async_trait]
pub trait GraphStore: Send + Sync {
    // ========================================================================
    // Concept operations
    // ========================================================================

    /// Create the concept if absent, else merge the supplied fields.
    /// Optional fields left unset keep their prior values — a re-create
    /// without a description never nulls an existing one.
    async fn upsert_concept(&self, draft: &ConceptDraft) -> StoreResult<ConceptNode>;

    /// Field-level partial update. Returns `None` when the id is absent.
    async fn update_concept(
        &self,
        id: &str,
        patch: &ConceptPatch,
    ) -> StoreResult<Option<ConceptNode>>;

    /// Remove the concept and all incident relationships atomically.
    /// Returns the number of removed concept nodes (0 or 1) so callers can
    /// distinguish "nothing to delete" from success.
    async fn delete_concept(&self, id: &str) -> StoreResult<u64>;

    /// Fetch a single concept by id.
    async fn get_concept(&self, id: &str) -> StoreResult<Option<ConceptNode>>;

    /// List concepts belonging to a map. When `map_id` is the default value,
    /// legacy records with no `mapId` property at all are included as well.
    /// Capped at [`MAP_PAGE_SIZE`] with no cursor.
    async fn get_concepts_by_map(&self, map_id: &str) -> StoreResult<Vec<ConceptNode>>;

    /// Bulk fetch of concept records by id. Missing ids are skipped.
    async fn get_concepts_by_ids(&self, ids: &[String]) -> StoreResult<Vec<ConceptNode>>;

    // ========================================================================
    // Relationship operations
    // ========================================================================

    /// Create a typed directed relationship between two concepts.
    /// Returns `false` when either endpoint is absent (no edge created).
    async fn create_relationship(
        &self,
        source_id: &str,
        target_id: &str,
        rel_type: &str,
        weight: Option<f64>,
    ) -> StoreResult<bool>;

    /// One concept with its raw 1-hop rows, outgoing then incoming.
    /// Returns `None` when the id is absent. Rows may include a placeholder
    /// with no type for concepts with zero relationships in a direction.
    async fn get_concept_relations(
        &self,
        id: &str,
    ) -> StoreResult<Option<(ConceptNode, Vec<RelationRow>, Vec<RelationRow>)>>;

    /// Every concept-to-concept edge in the store, for bulk graph extraction.
    async fn list_relationship_edges(&self) -> StoreResult<Vec<RelationEdge>>;

    // ========================================================================
    // Map operations
    // ========================================================================

    /// Create a new map.
    async fn create_map(&self, map: &MapNode) -> StoreResult<MapNode>;

    /// Fetch a single map by id.
    async fn get_map(&self, id: &str) -> StoreResult<Option<MapNode>>;

    /// List all maps ordered by `sort_order` ascending (absent values last),
    /// then creation time ascending.
    async fn list_maps(&self) -> StoreResult<Vec<MapNode>>;

    /// Partial update. Returns `None` when the id is absent.
    async fn update_map(&self, id: &str, patch: &MapPatch) -> StoreResult<Option<MapNode>>;

    /// Delete a map and every concept referencing it, concepts first, inside
    /// a single transaction. Returns `None` when the map is absent, else the
    /// number of deleted concepts.
    async fn delete_map(&self, id: &str) -> StoreResult<Option<u64>>;

    /// Assign a dense `sort_order` to each map id in the supplied order,
    /// overwriting any previous order. Full replace, not a delta.
    async fn reorder_maps(&self, ordered_ids: &[String]) -> StoreResult<()>;

    // ========================================================================
    // Narration accessor
    // ========================================================================

    /// Projection of a concept consumed by the LLM narration collaborator.
    async fn get_concept_context(&self, id: &str) -> StoreResult<Option<ConceptContext>>;

    // ========================================================================
    // Health
    // ========================================================================

    /// Verify connectivity to the backing store.
    async fn health_check(&self) -> StoreResult<bool>;
}
