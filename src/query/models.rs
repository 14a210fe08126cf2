//! Traversal data models.
//!
//! - [`ConceptGraph`] — petgraph wrapper with id ↔ NodeIndex mapping, the
//!   intermediate representation between store extraction and traversal
//! - [`TraversalMode`] — whether stored edge direction is honored or ignored
//! - [`ConceptRelations`] / [`OutgoingRelation`] / [`IncomingRelation`] — the
//!   1-hop relation view
//! - [`PathResult`] — a resolved shortest path

use crate::store::models::ConceptNode;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::HashMap;

// ============================================================================
// Graph structure (extraction → traversal)
// ============================================================================

/// A typed edge of the in-memory traversal graph.
#[derive(Debug, Clone)]
pub struct GraphEdge {
    pub rel_type: String,
    /// Stored but not used for path cost — paths are ranked by hop count.
    pub weight: Option<f64>,
}

/// Wrapper around `petgraph::DiGraph` with id ↔ NodeIndex mapping.
///
/// Node weights are concept ids; full concept records are fetched from the
/// store only for the nodes of a returned path.
#[derive(Debug, Clone, Default)]
pub struct ConceptGraph {
    /// The underlying directed graph
    pub graph: DiGraph<String, GraphEdge>,
    /// Mapping from concept id to petgraph NodeIndex
    pub id_to_index: HashMap<String, NodeIndex>,
}

impl ConceptGraph {
    /// Create an empty graph with pre-allocated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            id_to_index: HashMap::with_capacity(nodes),
        }
    }

    /// Add a node by id, returning its index. Existing ids return their
    /// existing index.
    pub fn add_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.id_to_index.insert(id.to_string(), idx);
        idx
    }

    /// Add a directed edge between two ids, creating missing endpoints.
    pub fn add_edge(&mut self, from_id: &str, to_id: &str, edge: GraphEdge) {
        let from_idx = self.add_node(from_id);
        let to_idx = self.add_node(to_id);
        self.graph.add_edge(from_idx, to_idx, edge);
    }

    /// Get the NodeIndex for an id.
    pub fn get_index(&self, id: &str) -> Option<NodeIndex> {
        self.id_to_index.get(id).copied()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Whether traversal honors stored edge direction.
///
/// The accessible-path query deliberately ignores direction — a path may
/// traverse edges against their stored orientation — so the relaxation is a
/// parameter rather than a hidden property of the implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalMode {
    Directed,
    Undirected,
}

// ============================================================================
// Relation view
// ============================================================================

/// An outgoing 1-hop relationship of a concept.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutgoingRelation {
    #[serde(rename = "type")]
    pub rel_type: String,
    pub target: String,
    pub weight: Option<f64>,
}

/// An incoming 1-hop relationship of a concept.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IncomingRelation {
    #[serde(rename = "type")]
    pub rel_type: String,
    pub source: String,
    pub weight: Option<f64>,
}

/// A concept with all its 1-hop relationships in both directions.
///
/// An existing but isolated concept has empty lists; a missing concept is a
/// `NotFound` error, never an empty aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct ConceptRelations {
    pub concept: ConceptNode,
    pub outgoing: Vec<OutgoingRelation>,
    pub incoming: Vec<IncomingRelation>,
}

// ============================================================================
// Path view
// ============================================================================

/// A resolved shortest path, start to end inclusive.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    /// Full concept records in traversal order.
    pub nodes: Vec<ConceptNode>,
    /// Relationship type per hop; one fewer entry than `nodes`.
    pub relationship_types: Vec<String>,
    /// Hop count of the path. Edge weights are not summed.
    pub total_cost: u32,
}
