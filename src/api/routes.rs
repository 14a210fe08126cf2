//! API route definitions

use super::concept_handlers;
use super::graph_handlers;
use super::handlers::{self, AtlasState};
use super::map_handlers;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: AtlasState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // ====================================================================
        // Concepts
        // ====================================================================
        .route(
            "/api/concepts",
            get(concept_handlers::list_concepts).post(concept_handlers::create_concept),
        )
        .route(
            "/api/concepts/{id}",
            axum::routing::patch(concept_handlers::update_concept)
                .delete(concept_handlers::delete_concept),
        )
        // ====================================================================
        // Graph traversal
        // ====================================================================
        .route(
            "/api/graph/concepts/{id}/relations",
            get(graph_handlers::get_relations),
        )
        .route("/api/graph/path", get(graph_handlers::find_path))
        .route(
            "/api/graph/relationships",
            post(graph_handlers::create_relationship),
        )
        // ====================================================================
        // Narration accessor
        // ====================================================================
        .route(
            "/api/narration/concepts/{id}/context",
            get(graph_handlers::get_narration_context),
        )
        // ====================================================================
        // Maps
        // ====================================================================
        .route(
            "/api/maps",
            get(map_handlers::list_maps).post(map_handlers::create_map),
        )
        .route(
            "/api/maps/reorder",
            post(map_handlers::reorder_maps),
        )
        .route(
            "/api/maps/{id}",
            get(map_handlers::get_map)
                .patch(map_handlers::update_map)
                .delete(map_handlers::delete_map),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
