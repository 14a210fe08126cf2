//! `GraphStore` implementation for `Neo4jClient`.
//!
//! Every method delegates to the corresponding inherent method on
//! `Neo4jClient`.

use async_trait::async_trait;

use super::client::Neo4jClient;
use super::models::*;
use super::traits::GraphStore;
use crate::store::error::StoreResult;

#[async_trait]
impl GraphStore for Neo4jClient {
    // ========================================================================
    // Concept operations
    // ========================================================================

    async fn upsert_concept(&self, draft: &ConceptDraft) -> StoreResult<ConceptNode> {
        self.upsert_concept(draft).await
    }

    async fn update_concept(
        &self,
        id: &str,
        patch: &ConceptPatch,
    ) -> StoreResult<Option<ConceptNode>> {
        self.update_concept(id, patch).await
    }

    async fn delete_concept(&self, id: &str) -> StoreResult<u64> {
        self.delete_concept(id).await
    }

    async fn get_concept(&self, id: &str) -> StoreResult<Option<ConceptNode>> {
        self.get_concept(id).await
    }

    async fn get_concepts_by_map(&self, map_id: &str) -> StoreResult<Vec<ConceptNode>> {
        self.get_concepts_by_map(map_id).await
    }

    async fn get_concepts_by_ids(&self, ids: &[String]) -> StoreResult<Vec<ConceptNode>> {
        self.get_concepts_by_ids(ids).await
    }

    // ========================================================================
    // Relationship operations
    // ========================================================================

    async fn create_relationship(
        &self,
        source_id: &str,
        target_id: &str,
        rel_type: &str,
        weight: Option<f64>,
    ) -> StoreResult<bool> {
        self.create_relationship(source_id, target_id, rel_type, weight)
            .await
    }

    async fn get_concept_relations(
        &self,
        id: &str,
    ) -> StoreResult<Option<(ConceptNode, Vec<RelationRow>, Vec<RelationRow>)>> {
        self.get_concept_relations(id).await
    }

    async fn list_relationship_edges(&self) -> StoreResult<Vec<RelationEdge>> {
        self.list_relationship_edges().await
    }

    // ========================================================================
    // Map operations
    // ========================================================================

    async fn create_map(&self, map: &MapNode) -> StoreResult<MapNode> {
        self.create_map(map).await
    }

    async fn get_map(&self, id: &str) -> StoreResult<Option<MapNode>> {
        self.get_map(id).await
    }

    async fn list_maps(&self) -> StoreResult<Vec<MapNode>> {
        self.list_maps().await
    }

    async fn update_map(&self, id: &str, patch: &MapPatch) -> StoreResult<Option<MapNode>> {
        self.update_map(id, patch).await
    }

    async fn delete_map(&self, id: &str) -> StoreResult<Option<u64>> {
        self.delete_map(id).await
    }

    async fn reorder_maps(&self, ordered_ids: &[String]) -> StoreResult<()> {
        self.reorder_maps(ordered_ids).await
    }

    // ========================================================================
    // Narration accessor
    // ========================================================================

    async fn get_concept_context(&self, id: &str) -> StoreResult<Option<ConceptContext>> {
        self.get_concept_context(id).await
    }

    // ========================================================================
    // Health
    // ========================================================================

    async fn health_check(&self) -> StoreResult<bool> {
        self.health_check().await
    }
}
