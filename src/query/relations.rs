//! Relation aggregation.
//!
//! Collects the 1-hop typed relationships of a concept in both directions.
//! Traversal depth is exactly one hop; deeper walks belong to the path
//! finder.

use crate::store::error::{StoreError, StoreResult};
use crate::store::GraphStore;
use std::sync::Arc;

use super::models::{ConceptRelations, IncomingRelation, OutgoingRelation};

/// Aggregates inbound and outbound relationships for a concept.
pub struct RelationAggregator {
    store: Arc<dyn GraphStore>,
}

impl RelationAggregator {
    /// Create a new aggregator backed by the given GraphStore.
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// The concept with all its 1-hop relationships.
    ///
    /// A missing id is `StoreError::NotFound`, never an empty aggregate; an
    /// existing isolated concept yields empty lists. Placeholder rows with no
    /// relationship type (produced by the adapter for zero-relationship
    /// directions) are filtered from both lists.
    pub async fn get_relations(&self, id: &str) -> StoreResult<ConceptRelations> {
        let (concept, out_rows, in_rows) = self
            .store
            .get_concept_relations(id)
            .await?
            .ok_or_else(|| StoreError::concept_not_found(id))?;

        let outgoing = out_rows
            .into_iter()
            .filter_map(|row| {
                let (rel_type, target) = typed_row(row.rel_type, row.neighbor_id)?;
                Some(OutgoingRelation {
                    rel_type,
                    target,
                    weight: row.weight,
                })
            })
            .collect();

        let incoming = in_rows
            .into_iter()
            .filter_map(|row| {
                let (rel_type, source) = typed_row(row.rel_type, row.neighbor_id)?;
                Some(IncomingRelation {
                    rel_type,
                    source,
                    weight: row.weight,
                })
            })
            .collect();

        Ok(ConceptRelations {
            concept,
            outgoing,
            incoming,
        })
    }
}

/// Keep only rows with both a type and a neighbor.
fn typed_row(rel_type: Option<String>, neighbor: Option<String>) -> Option<(String, String)> {
    match (rel_type, neighbor) {
        (Some(t), Some(n)) if !t.is_empty() => Some((t, n)),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
