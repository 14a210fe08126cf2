//! In-memory mock implementation of GraphStore for testing.
//!
//! Backs every operation with `tokio::sync::RwLock` collections and mirrors
//! the Neo4j client's observable semantics, including the legacy no-`mapId`
//! fallback and the placeholder rows produced for isolated concepts.
//! Conditionally compiled with `#[cfg(test)]`.

use crate::store::client::normalize_rel_type;
use crate::store::error::StoreResult;
use crate::store::models::*;
use crate::store::traits::GraphStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A stored concept. `map_id: None` models a legacy record that lacks the
/// `mapId` property entirely.
#[derive(Debug, Clone)]
struct ConceptRecord {
    concept: ConceptNode,
    map_id: Option<String>,
}

impl ConceptRecord {
    fn materialize(&self) -> ConceptNode {
        let mut concept = self.concept.clone();
        concept.map_id = self
            .map_id
            .clone()
            .unwrap_or_else(|| DEFAULT_MAP_ID.to_string());
        concept
    }
}

/// In-memory mock implementation of GraphStore for testing.
pub struct MockGraphStore {
    concepts: RwLock<HashMap<String, ConceptRecord>>,
    edges: RwLock<Vec<RelationEdge>>,
    maps: RwLock<HashMap<String, MapNode>>,
}

impl MockGraphStore {
    /// Create a new empty MockGraphStore.
    pub fn new() -> Self {
        Self {
            concepts: RwLock::new(HashMap::new()),
            edges: RwLock::new(Vec::new()),
            maps: RwLock::new(HashMap::new()),
        }
    }

    // ========================================================================
    // Builder / seeding methods for tests
    // ========================================================================

    /// Seed a concept into the store.
    pub async fn with_concept(self, concept: ConceptNode) -> Self {
        let map_id = Some(concept.map_id.clone());
        self.concepts
            .write()
            .await
            .insert(concept.id.clone(), ConceptRecord { concept, map_id });
        self
    }

    /// Seed a legacy concept with no `mapId` property at all.
    pub async fn with_legacy_concept(self, concept: ConceptNode) -> Self {
        self.concepts.write().await.insert(
            concept.id.clone(),
            ConceptRecord {
                concept,
                map_id: None,
            },
        );
        self
    }

    /// Seed a map into the store.
    pub async fn with_map(self, map: MapNode) -> Self {
        self.maps.write().await.insert(map.id.clone(), map);
        self
    }

    /// Seed a directed relationship.
    pub async fn with_edge(self, source: &str, target: &str, rel_type: &str) -> Self {
        self.edges.write().await.push(RelationEdge {
            source: source.to_string(),
            target: target.to_string(),
            rel_type: rel_type.to_string(),
            weight: None,
        });
        self
    }
}

impl Default for MockGraphStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphStore for MockGraphStore {
    // ========================================================================
    // Concept operations
    // ========================================================================

    async fn upsert_concept(&self, draft: &ConceptDraft) -> StoreResult<ConceptNode> {
        let mut concepts = self.concepts.write().await;
        let now = Some(chrono::Utc::now());

        let record = concepts
            .entry(draft.id.clone())
            .and_modify(|record| {
                record.concept.label = draft.label.clone();
                if let Some(d) = &draft.description {
                    record.concept.description = Some(d.clone());
                }
                if let Some(m) = &draft.map_id {
                    record.map_id = Some(m.clone());
                }
                record.concept.updated_at = now;
            })
            .or_insert_with(|| ConceptRecord {
                concept: ConceptNode {
                    id: draft.id.clone(),
                    label: draft.label.clone(),
                    description: draft.description.clone(),
                    mastery_level: MasteryLevel::default(),
                    emotion: None,
                    crisis: None,
                    meta_tags: Vec::new(),
                    links: Vec::new(),
                    map_id: String::new(),
                    updated_at: now,
                },
                map_id: Some(
                    draft
                        .map_id
                        .clone()
                        .unwrap_or_else(|| DEFAULT_MAP_ID.to_string()),
                ),
            });

        Ok(record.materialize())
    }

    async fn update_concept(
        &self,
        id: &str,
        patch: &ConceptPatch,
    ) -> StoreResult<Option<ConceptNode>> {
        let mut concepts = self.concepts.write().await;
        let Some(record) = concepts.get_mut(id) else {
            return Ok(None);
        };

        if let Some(l) = &patch.label {
            record.concept.label = l.clone();
        }
        if let Some(d) = &patch.description {
            record.concept.description = Some(d.clone());
        }
        if let Some(e) = &patch.emotion {
            record.concept.emotion = Some(e.clone());
        }
        if let Some(c) = &patch.crisis {
            record.concept.crisis = Some(c.clone());
        }
        if let Some(m) = patch.mastery_level {
            record.concept.mastery_level = m;
        }
        if let Some(t) = &patch.meta_tags {
            record.concept.meta_tags = t.clone();
        }
        if let Some(l) = &patch.links {
            record.concept.links = l.clone();
        }
        record.concept.updated_at = Some(chrono::Utc::now());

        Ok(Some(record.materialize()))
    }

    async fn delete_concept(&self, id: &str) -> StoreResult<u64> {
        let removed = self.concepts.write().await.remove(id).is_some();
        if removed {
            // DETACH: drop all incident edges with the node.
            self.edges
                .write()
                .await
                .retain(|e| e.source != id && e.target != id);
        }
        Ok(removed as u64)
    }

    async fn get_concept(&self, id: &str) -> StoreResult<Option<ConceptNode>> {
        Ok(self
            .concepts
            .read()
            .await
            .get(id)
            .map(ConceptRecord::materialize))
    }

    async fn get_concepts_by_map(&self, map_id: &str) -> StoreResult<Vec<ConceptNode>> {
        let concepts = self.concepts.read().await;
        let mut matched: Vec<ConceptNode> = concepts
            .values()
            .filter(|record| match &record.map_id {
                Some(m) => m == map_id,
                None => map_id == DEFAULT_MAP_ID,
            })
            .map(ConceptRecord::materialize)
            .collect();
        matched.sort_by(|a, b| a.id.cmp(&b.id));
        matched.truncate(MAP_PAGE_SIZE);
        Ok(matched)
    }

    async fn get_concepts_by_ids(&self, ids: &[String]) -> StoreResult<Vec<ConceptNode>> {
        let concepts = self.concepts.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| concepts.get(id).map(ConceptRecord::materialize))
            .collect())
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
        let rel_type = normalize_rel_type(rel_type)?;
        let concepts = self.concepts.read().await;
        if !concepts.contains_key(source_id) || !concepts.contains_key(target_id) {
            return Ok(false);
        }
        drop(concepts);

        self.edges.write().await.push(RelationEdge {
            source: source_id.to_string(),
            target: target_id.to_string(),
            rel_type,
            weight,
        });
        Ok(true)
    }

    async fn get_concept_relations(
        &self,
        id: &str,
    ) -> StoreResult<Option<(ConceptNode, Vec<RelationRow>, Vec<RelationRow>)>> {
        let concept = match self.get_concept(id).await? {
            Some(c) => c,
            None => return Ok(None),
        };

        let edges = self.edges.read().await;
        let mut outgoing: Vec<RelationRow> = edges
            .iter()
            .filter(|e| e.source == id)
            .map(|e| RelationRow {
                rel_type: Some(e.rel_type.clone()),
                neighbor_id: Some(e.target.clone()),
                weight: e.weight,
            })
            .collect();
        let mut incoming: Vec<RelationRow> = edges
            .iter()
            .filter(|e| e.target == id)
            .map(|e| RelationRow {
                rel_type: Some(e.rel_type.clone()),
                neighbor_id: Some(e.source.clone()),
                weight: e.weight,
            })
            .collect();

        // Mirror the OPTIONAL MATCH placeholder row for isolated directions.
        let placeholder = || RelationRow {
            rel_type: None,
            neighbor_id: None,
            weight: None,
        };
        if outgoing.is_empty() {
            outgoing.push(placeholder());
        }
        if incoming.is_empty() {
            incoming.push(placeholder());
        }

        Ok(Some((concept, outgoing, incoming)))
    }

    async fn list_relationship_edges(&self) -> StoreResult<Vec<RelationEdge>> {
        Ok(self.edges.read().await.clone())
    }

    // ========================================================================
    // Map operations
    // ========================================================================

    async fn create_map(&self, map: &MapNode) -> StoreResult<MapNode> {
        let mut created = map.clone();
        if created.created_at.is_none() {
            created.created_at = Some(chrono::Utc::now());
        }
        self.maps
            .write()
            .await
            .insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn get_map(&self, id: &str) -> StoreResult<Option<MapNode>> {
        Ok(self.maps.read().await.get(id).cloned())
    }

    async fn list_maps(&self) -> StoreResult<Vec<MapNode>> {
        let mut maps: Vec<MapNode> = self.maps.read().await.values().cloned().collect();
        maps.sort_by(|a, b| {
            (a.sort_order.is_none(), a.sort_order, a.created_at).cmp(&(
                b.sort_order.is_none(),
                b.sort_order,
                b.created_at,
            ))
        });
        Ok(maps)
    }

    async fn update_map(&self, id: &str, patch: &MapPatch) -> StoreResult<Option<MapNode>> {
        let mut maps = self.maps.write().await;
        let Some(map) = maps.get_mut(id) else {
            return Ok(None);
        };
        if let Some(n) = &patch.name {
            map.name = n.clone();
        }
        if let Some(d) = &patch.description {
            map.description = Some(d.clone());
        }
        Ok(Some(map.clone()))
    }

    async fn delete_map(&self, id: &str) -> StoreResult<Option<u64>> {
        let mut maps = self.maps.write().await;
        if maps.remove(id).is_none() {
            return Ok(None);
        }

        let mut concepts = self.concepts.write().await;
        let member_ids: Vec<String> = concepts
            .values()
            .filter(|record| record.map_id.as_deref() == Some(id))
            .map(|record| record.concept.id.clone())
            .collect();
        for concept_id in &member_ids {
            concepts.remove(concept_id);
        }

        self.edges.write().await.retain(|e| {
            !member_ids.contains(&e.source) && !member_ids.contains(&e.target)
        });

        Ok(Some(member_ids.len() as u64))
    }

    async fn reorder_maps(&self, ordered_ids: &[String]) -> StoreResult<()> {
        let mut maps = self.maps.write().await;
        for (idx, id) in ordered_ids.iter().enumerate() {
            if let Some(map) = maps.get_mut(id) {
                map.sort_order = Some(idx as i64);
            }
        }
        Ok(())
    }

    // ========================================================================
    // Narration accessor
    // ========================================================================

    async fn get_concept_context(&self, id: &str) -> StoreResult<Option<ConceptContext>> {
        Ok(self.get_concept(id).await?.map(|c| ConceptContext {
            label: c.label,
            description: c.description,
            crisis: c.crisis,
            meta_tags: c.meta_tags,
        }))
    }

    // ========================================================================
    // Health
    // ========================================================================

    async fn health_check(&self) -> StoreResult<bool> {
        Ok(true)
    }
}

// ============================================================================
// Store semantics tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{concept, concept_in_map, map};

    fn draft(id: &str, label: &str) -> ConceptDraft {
        ConceptDraft {
            id: id.to_string(),
            label: label.to_string(),
            description: None,
            map_id: None,
        }
    }

    #[tokio::test]
    async fn upsert_creates_with_default_map() {
        let store = MockGraphStore::new();
        let created = store.upsert_concept(&draft("c1", "Set")).await.unwrap();
        assert_eq!(created.map_id, DEFAULT_MAP_ID);
        assert!(created.updated_at.is_some());
    }

    #[tokio::test]
    async fn upsert_keeps_prior_optional_fields() {
        let store = MockGraphStore::new();
        store
            .upsert_concept(&ConceptDraft {
                description: Some("The most fundamental language.".into()),
                map_id: Some("math".into()),
                ..draft("c1", "Set")
            })
            .await
            .unwrap();

        // Re-create without description or map: both must survive.
        let merged = store.upsert_concept(&draft("c1", "Set (revised)")).await.unwrap();
        assert_eq!(merged.label, "Set (revised)");
        assert_eq!(
            merged.description.as_deref(),
            Some("The most fundamental language.")
        );
        assert_eq!(merged.map_id, "math");
    }

    #[tokio::test]
    async fn update_patches_only_supplied_fields() {
        let store = MockGraphStore::new().with_concept(concept("c1", "Set")).await;
        let patch = ConceptPatch {
            emotion: Some("😎".into()),
            mastery_level: Some(MasteryLevel::Mastered),
            ..Default::default()
        };
        let updated = store.update_concept("c1", &patch).await.unwrap().unwrap();
        assert_eq!(updated.label, "Set");
        assert_eq!(updated.emotion.as_deref(), Some("😎"));
        assert_eq!(updated.mastery_level, MasteryLevel::Mastered);

        assert!(store.update_concept("ghost", &patch).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_concept_reports_count_and_detaches() {
        let store = MockGraphStore::new()
            .with_concept(concept("a", "A"))
            .await
            .with_concept(concept("b", "B"))
            .await
            .with_edge("a", "b", "COMMUNICATE")
            .await;

        assert_eq!(store.delete_concept("b").await.unwrap(), 1);
        assert_eq!(store.delete_concept("b").await.unwrap(), 0);
        assert!(store.list_relationship_edges().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn default_map_query_includes_legacy_records() {
        let store = MockGraphStore::new()
            .with_concept(concept("tagged", "Tagged"))
            .await
            .with_legacy_concept(concept("legacy", "Legacy"))
            .await
            .with_concept(concept_in_map("other", "Other", "m2"))
            .await;

        let defaults = store.get_concepts_by_map(DEFAULT_MAP_ID).await.unwrap();
        let ids: Vec<&str> = defaults.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["legacy", "tagged"]);

        // Legacy records do not leak into other maps.
        let others = store.get_concepts_by_map("m2").await.unwrap();
        assert_eq!(others.len(), 1);
        assert_eq!(others[0].id, "other");
    }

    #[tokio::test]
    async fn map_listing_is_capped_at_page_size() {
        let mut store = MockGraphStore::new();
        for i in 0..MAP_PAGE_SIZE + 20 {
            store = store
                .with_concept(concept(&format!("c{:03}", i), "Concept"))
                .await;
        }
        let page = store.get_concepts_by_map(DEFAULT_MAP_ID).await.unwrap();
        assert_eq!(page.len(), MAP_PAGE_SIZE);
    }

    #[tokio::test]
    async fn relationship_creation_requires_both_endpoints() {
        let store = MockGraphStore::new().with_concept(concept("a", "A")).await;
        assert!(!store
            .create_relationship("a", "ghost", "COMMUNICATE", None)
            .await
            .unwrap());
        assert!(store.list_relationship_edges().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_map_cascades_to_member_concepts() {
        let store = MockGraphStore::new()
            .with_map(map("m1", "Math"))
            .await
            .with_concept(concept_in_map("a", "A", "m1"))
            .await
            .with_concept(concept_in_map("b", "B", "m1"))
            .await
            .with_concept(concept("outside", "Outside"))
            .await
            .with_edge("a", "outside", "COMMUNICATE")
            .await;

        let deleted = store.delete_map("m1").await.unwrap();
        assert_eq!(deleted, Some(2));

        assert!(store.get_concepts_by_map("m1").await.unwrap().is_empty());
        assert!(store.get_concept("outside").await.unwrap().is_some());
        // Edges into the cascade are gone with their endpoints.
        assert!(store.list_relationship_edges().await.unwrap().is_empty());

        assert_eq!(store.delete_map("m1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn reorder_is_a_full_replace() {
        let store = MockGraphStore::new()
            .with_map(map("a", "A"))
            .await
            .with_map(map("b", "B"))
            .await
            .with_map(map("c", "C"))
            .await;

        store
            .reorder_maps(&["a".into(), "b".into(), "c".into()])
            .await
            .unwrap();
        store
            .reorder_maps(&["c".into(), "a".into(), "b".into()])
            .await
            .unwrap();

        let ids: Vec<String> = store
            .list_maps()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn unsorted_maps_sink_to_the_end() {
        let early = chrono::Utc::now() - chrono::Duration::hours(1);
        let store = MockGraphStore::new()
            .with_map(MapNode {
                sort_order: Some(0),
                ..map("sorted", "Sorted")
            })
            .await
            .with_map(MapNode {
                created_at: Some(early),
                ..map("old-unsorted", "Old")
            })
            .await
            .with_map(map("new-unsorted", "New"))
            .await;

        let ids: Vec<String> = store
            .list_maps()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        // Sorted first, then unsorted by creation time.
        assert_eq!(ids, vec!["sorted", "old-unsorted", "new-unsorted"]);
    }

    #[tokio::test]
    async fn narration_context_projects_the_concept() {
        let store = MockGraphStore::new()
            .with_concept(ConceptNode {
                description: Some("A collection of elements.".into()),
                crisis: Some("Cantor's infinities.".into()),
                meta_tags: vec!["Philosophy: Structure".into()],
                ..concept("c1", "Set")
            })
            .await;

        let context = store.get_concept_context("c1").await.unwrap().unwrap();
        assert_eq!(context.label, "Set");
        assert_eq!(context.crisis.as_deref(), Some("Cantor's infinities."));
        assert_eq!(context.meta_tags.len(), 1);

        assert!(store.get_concept_context("ghost").await.unwrap().is_none());
    }
}
