//! Graph traversal layer.
//!
//! Answers the two derived-view questions of the service: "what are the
//! relations of a concept" and "what is the shortest accessible path between
//! two concepts".
//!
//! ## Architecture
//!
//! ```text
//! GraphStore ──► extraction ──► ConceptGraph (petgraph)
//!      │                             │
//!      │                      bounded BFS (paths)
//!      │                             │
//!      └── 1-hop rows ──► relations aggregation
//! ```
//!
//! ## Modules
//!
//! - [`models`] — `ConceptGraph`, relation views, `PathResult`, `TraversalMode`
//! - [`extraction`] — store → petgraph conversion via the GraphStore trait
//! - [`relations`] — 1-hop relation aggregation
//! - [`paths`] — bounded unweighted shortest-path search

pub mod extraction;
pub mod models;
pub mod paths;
pub mod relations;

pub use models::{
    ConceptGraph, ConceptRelations, GraphEdge, IncomingRelation, OutgoingRelation, PathResult,
    TraversalMode,
};
pub use paths::{PathFinder, MAX_PATH_HOPS};
pub use relations::RelationAggregator;
