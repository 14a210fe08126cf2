//! Store → petgraph extraction.
//!
//! Converts the persisted concept graph into an in-memory [`ConceptGraph`]
//! suitable for traversal. Uses the `GraphStore` trait (not raw Cypher), so
//! the traversal layer works identically against Neo4j and the in-memory
//! mock. One bulk query fetches every edge; nodes are discovered from edge
//! endpoints. Isolated concepts are intentionally absent: no path of one or
//! more hops can reach them, and single-node paths never consult the graph.

use crate::store::error::StoreResult;
use crate::store::GraphStore;
use std::sync::Arc;

use super::models::{ConceptGraph, GraphEdge};

/// Extracts the concept graph from the store for traversal.
pub struct GraphExtractor {
    store: Arc<dyn GraphStore>,
}

impl GraphExtractor {
    /// Create a new extractor backed by the given GraphStore.
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Extract the full concept graph.
    ///
    /// Every stored relationship becomes a directed typed edge; multiple
    /// relationships between the same pair are all kept (multiplicity is
    /// allowed in the data model).
    pub async fn extract(&self) -> StoreResult<ConceptGraph> {
        let edges = self.store.list_relationship_edges().await?;

        let mut graph = ConceptGraph::with_capacity(edges.len(), edges.len());
        for edge in &edges {
            graph.add_edge(
                &edge.source,
                &edge.target,
                GraphEdge {
                    rel_type: edge.rel_type.clone(),
                    weight: edge.weight,
                },
            );
        }

        Ok(graph)
    }
}

// ============================================================================
// Tests
// ============================================================================
