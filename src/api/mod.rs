//! HTTP API for the concept atlas

pub mod concept_handlers;
pub mod graph_handlers;
pub mod handlers;
pub mod map_handlers;
pub mod routes;

pub use routes::create_router;
