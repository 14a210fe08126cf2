//! Bounded shortest-path search.
//!
//! Unweighted breadth-first search over the extracted concept graph, capped
//! at [`MAX_PATH_HOPS`] hops to keep ad hoc queries tractable on unindexed
//! graphs. The search runs in-process rather than delegating to a store-side
//! query engine, so it behaves identically on every `GraphStore` backend.

use crate::store::error::{StoreError, StoreResult};
use crate::store::models::ConceptNode;
use crate::store::GraphStore;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use super::extraction::GraphExtractor;
use super::models::{ConceptGraph, PathResult, TraversalMode};

/// Maximum number of hops a returned path may span. Longer paths report
/// NotFound even when one exists.
pub const MAX_PATH_HOPS: u32 = 10;

/// Computes bounded unweighted shortest paths between concepts.
pub struct PathFinder {
    store: Arc<dyn GraphStore>,
    extractor: GraphExtractor,
}

impl PathFinder {
    /// Create a new path finder backed by the given GraphStore.
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self {
            extractor: GraphExtractor::new(store.clone()),
            store,
        }
    }

    /// Shortest path from `start_id` to `end_id`, at most [`MAX_PATH_HOPS`]
    /// hops.
    ///
    /// `total_cost` is the hop count of the returned path; stored edge
    /// weights are not summed. When several shortest paths tie on length,
    /// whichever the search discovers first is returned.
    ///
    /// A missing start or end id and an unreachable pair report the same
    /// NotFound signal; callers cannot currently tell them apart.
    pub async fn find_path(
        &self,
        start_id: &str,
        end_id: &str,
        mode: TraversalMode,
    ) -> StoreResult<PathResult> {
        let not_found =
            || StoreError::NotFound(format!("path from '{}' to '{}'", start_id, end_id));

        let start = self
            .store
            .get_concept(start_id)
            .await?
            .ok_or_else(not_found)?;
        if self.store.get_concept(end_id).await?.is_none() {
            return Err(not_found());
        }

        if start_id == end_id {
            return Ok(PathResult {
                nodes: vec![start],
                relationship_types: Vec::new(),
                total_cost: 0,
            });
        }

        let graph = self.extractor.extract().await?;
        let (node_ids, relationship_types) =
            shortest_path(&graph, start_id, end_id, mode, MAX_PATH_HOPS).ok_or_else(not_found)?;

        let nodes = self.resolve_nodes(&node_ids).await?;
        let total_cost = relationship_types.len() as u32;

        Ok(PathResult {
            nodes,
            relationship_types,
            total_cost,
        })
    }

    /// Fetch the full concept records for a path, preserving traversal order.
    async fn resolve_nodes(&self, ids: &[String]) -> StoreResult<Vec<ConceptNode>> {
        let records = self.store.get_concepts_by_ids(ids).await?;
        let mut by_id: HashMap<String, ConceptNode> = records
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect();

        ids.iter()
            .map(|id| {
                by_id
                    .remove(id)
                    .ok_or_else(|| StoreError::concept_not_found(id))
            })
            .collect()
    }
}

/// Breadth-first shortest path, bounded by `max_hops`.
///
/// Returns the path's node ids (start to end inclusive) and the relationship
/// type of each traversed edge. `None` when either endpoint is absent from
/// the graph or no path exists within the bound.
fn shortest_path(
    graph: &ConceptGraph,
    start_id: &str,
    end_id: &str,
    mode: TraversalMode,
    max_hops: u32,
) -> Option<(Vec<String>, Vec<String>)> {
    let start = graph.get_index(start_id)?;
    let end = graph.get_index(end_id)?;

    // Predecessor chain: node → (previous node, relationship type taken).
    let mut predecessor: HashMap<NodeIndex, (NodeIndex, String)> = HashMap::new();
    let mut depth: HashMap<NodeIndex, u32> = HashMap::new();
    depth.insert(start, 0);

    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let current_depth = depth[&current];
        if current_depth == max_hops {
            continue;
        }

        for (neighbor, rel_type) in neighbors(graph, current, mode) {
            if depth.contains_key(&neighbor) {
                continue;
            }
            depth.insert(neighbor, current_depth + 1);
            predecessor.insert(neighbor, (current, rel_type));

            if neighbor == end {
                return Some(reconstruct(graph, &predecessor, start, end));
            }
            queue.push_back(neighbor);
        }
    }

    None
}

/// Neighbors of a node with the relationship type of the connecting edge.
///
/// In undirected mode incoming edges are traversed against their stored
/// direction.
fn neighbors(
    graph: &ConceptGraph,
    node: NodeIndex,
    mode: TraversalMode,
) -> Vec<(NodeIndex, String)> {
    let mut result: Vec<(NodeIndex, String)> = graph
        .graph
        .edges_directed(node, Direction::Outgoing)
        .map(|edge| (edge.target(), edge.weight().rel_type.clone()))
        .collect();

    if mode == TraversalMode::Undirected {
        result.extend(
            graph
                .graph
                .edges_directed(node, Direction::Incoming)
                .map(|edge| (edge.source(), edge.weight().rel_type.clone())),
        );
    }

    result
}

/// Walk the predecessor chain back from `end` and reverse it.
fn reconstruct(
    graph: &ConceptGraph,
    predecessor: &HashMap<NodeIndex, (NodeIndex, String)>,
    start: NodeIndex,
    end: NodeIndex,
) -> (Vec<String>, Vec<String>) {
    let mut node_ids = vec![graph.graph[end].clone()];
    let mut rel_types = Vec::new();

    let mut current = end;
    while current != start {
        let (prev, rel_type) = &predecessor[&current];
        rel_types.push(rel_type.clone());
        node_ids.push(graph.graph[*prev].clone());
        current = *prev;
    }

    node_ids.reverse();
    rel_types.reverse();
    (node_ids, rel_types)
}

// ============================================================================
// Tests
// ============================================================================
