//! Test helper factories and mock state builders
//!
//! Convenience functions for creating test objects with sensible defaults.
#![allow(dead_code)]

use crate::api::handlers::{AtlasState, ServerState};
use crate::store::mock::MockGraphStore;
use crate::store::models::*;
use std::sync::Arc;

/// A concept with the given id and label and default everything else.
pub fn concept(id: &str, label: &str) -> ConceptNode {
    ConceptNode {
        id: id.to_string(),
        label: label.to_string(),
        description: None,
        mastery_level: MasteryLevel::Unseen,
        emotion: None,
        crisis: None,
        meta_tags: Vec::new(),
        links: Vec::new(),
        map_id: DEFAULT_MAP_ID.to_string(),
        updated_at: None,
    }
}

/// A concept assigned to a specific map.
pub fn concept_in_map(id: &str, label: &str, map_id: &str) -> ConceptNode {
    ConceptNode {
        map_id: map_id.to_string(),
        ..concept(id, label)
    }
}

/// A map with the given id and name.
pub fn map(id: &str, name: &str) -> MapNode {
    MapNode {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        emoji: "🧠".to_string(),
        sort_order: None,
        created_at: Some(chrono::Utc::now()),
    }
}

/// Wrap a seeded mock store into handler state.
pub fn mock_state(store: MockGraphStore) -> AtlasState {
    Arc::new(ServerState::new(Arc::new(store)))
}
