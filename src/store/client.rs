//! Neo4j client for the concept graph

use super::models::*;
use crate::store::error::{StoreError, StoreResult};
use anyhow::Context;
use neo4rs::{query, Graph};
use std::sync::Arc;

/// Client for Neo4j graph operations.
///
/// One client is constructed at process start and shared behind
/// `Arc<dyn GraphStore>`; `neo4rs` pools connections internally and releases
/// sessions on every exit path, success or error.
pub struct Neo4jClient {
    graph: Arc<Graph>,
}

/// Normalize a user-supplied relationship type into a safe Cypher identifier.
///
/// Relationship types cannot be parameterized in Cypher, so the string is
/// interpolated into the query text and must be restricted: uppercased,
/// ASCII alphanumerics and underscores only, starting with a letter.
pub fn normalize_rel_type(raw: &str) -> StoreResult<String> {
    let rel_type = raw.trim().to_uppercase().replace([' ', '-'], "_");
    let mut chars = rel_type.chars();
    let valid = match chars.next() {
        Some(first) => {
            first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if !valid {
        return Err(StoreError::Validation(format!(
            "invalid relationship type '{}'",
            raw
        )));
    }
    Ok(rel_type)
}

impl Neo4jClient {
    /// Connect to Neo4j and initialize the schema.
    pub async fn new(uri: &str, user: &str, password: &str) -> StoreResult<Self> {
        let graph = Graph::new(uri, user, password)
            .await
            .context("Failed to connect to Neo4j")
            .map_err(StoreError::Unavailable)?;

        let client = Self {
            graph: Arc::new(graph),
        };

        client.init_schema().await?;

        Ok(client)
    }

    /// Initialize uniqueness constraints and indexes.
    async fn init_schema(&self) -> StoreResult<()> {
        let constraints = vec![
            "CREATE CONSTRAINT concept_id IF NOT EXISTS FOR (c:Concept) REQUIRE c.id IS UNIQUE",
            "CREATE CONSTRAINT map_id IF NOT EXISTS FOR (m:Map) REQUIRE m.id IS UNIQUE",
        ];

        let indexes =
            vec!["CREATE INDEX concept_map_id IF NOT EXISTS FOR (c:Concept) ON (c.mapId)"];

        for constraint in constraints {
            if let Err(e) = self.graph.run(query(constraint)).await {
                tracing::warn!("Constraint creation failed (may already exist): {}", e);
            }
        }

        for index in indexes {
            if let Err(e) = self.graph.run(query(index)).await {
                tracing::warn!("Index creation failed (may already exist): {}", e);
            }
        }

        Ok(())
    }

    /// Verify connectivity with a trivial query.
    pub async fn health_check(&self) -> StoreResult<bool> {
        match self.graph.run(query("RETURN 1")).await {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    // ========================================================================
    // Concept operations
    // ========================================================================

    /// Create or merge a concept. Unset optional fields keep prior values.
    pub async fn upsert_concept(&self, draft: &ConceptDraft) -> StoreResult<ConceptNode> {
        let mut set_clauses = vec![
            "c.label = $label".to_string(),
            "c.updatedAt = $now".to_string(),
        ];

        if draft.description.is_some() {
            set_clauses.push("c.description = $description".to_string());
        }
        if draft.map_id.is_some() {
            set_clauses.push("c.mapId = $mapId".to_string());
        } else {
            // First write defaults the map; later writes keep the existing one.
            set_clauses.push("c.mapId = coalesce(c.mapId, $defaultMapId)".to_string());
        }

        let cypher = format!(
            r#"
            MERGE (c:Concept {{id: $id}})
            SET {}
            RETURN c
            "#,
            set_clauses.join(", ")
        );

        let mut q = query(&cypher)
            .param("id", draft.id.clone())
            .param("label", draft.label.clone())
            .param("defaultMapId", DEFAULT_MAP_ID)
            .param("now", chrono::Utc::now().to_rfc3339());

        if let Some(d) = &draft.description {
            q = q.param("description", d.clone());
        }
        if let Some(m) = &draft.map_id {
            q = q.param("mapId", m.clone());
        }

        let mut result = self.graph.execute(q).await?;
        let row = result
            .next()
            .await?
            .ok_or_else(|| StoreError::Unavailable(anyhow::anyhow!("MERGE returned no row")))?;
        let node: neo4rs::Node = row
            .get("c")
            .map_err(|e| StoreError::Unavailable(anyhow::Error::new(e)))?;
        Ok(node_to_concept(&node))
    }

    /// Partial update of a concept. Returns `None` when the id is absent.
    pub async fn update_concept(
        &self,
        id: &str,
        patch: &ConceptPatch,
    ) -> StoreResult<Option<ConceptNode>> {
        let mut set_clauses = vec!["c.updatedAt = $now".to_string()];

        if patch.label.is_some() {
            set_clauses.push("c.label = $label".to_string());
        }
        if patch.description.is_some() {
            set_clauses.push("c.description = $description".to_string());
        }
        if patch.emotion.is_some() {
            set_clauses.push("c.emotion = $emotion".to_string());
        }
        if patch.crisis.is_some() {
            set_clauses.push("c.crisis = $crisis".to_string());
        }
        if patch.mastery_level.is_some() {
            set_clauses.push("c.masteryLevel = $masteryLevel".to_string());
        }
        if patch.meta_tags.is_some() {
            set_clauses.push("c.metaTags = $metaTags".to_string());
        }
        if patch.links.is_some() {
            set_clauses.push("c.links = $links".to_string());
        }

        let cypher = format!(
            r#"
            MATCH (c:Concept {{id: $id}})
            SET {}
            RETURN c
            "#,
            set_clauses.join(", ")
        );

        let mut q = query(&cypher)
            .param("id", id)
            .param("now", chrono::Utc::now().to_rfc3339());

        if let Some(l) = &patch.label {
            q = q.param("label", l.clone());
        }
        if let Some(d) = &patch.description {
            q = q.param("description", d.clone());
        }
        if let Some(e) = &patch.emotion {
            q = q.param("emotion", e.clone());
        }
        if let Some(c) = &patch.crisis {
            q = q.param("crisis", c.clone());
        }
        if let Some(m) = &patch.mastery_level {
            q = q.param("masteryLevel", m.as_str());
        }
        if let Some(t) = &patch.meta_tags {
            q = q.param("metaTags", t.clone());
        }
        if let Some(l) = &patch.links {
            q = q.param("links", l.clone());
        }

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("c")
                .map_err(|e| StoreError::Unavailable(anyhow::Error::new(e)))?;
            Ok(Some(node_to_concept(&node)))
        } else {
            Ok(None)
        }
    }

    /// Remove a concept and all incident relationships atomically.
    pub async fn delete_concept(&self, id: &str) -> StoreResult<u64> {
        let q = query(
            r#"
            MATCH (c:Concept {id: $id})
            DETACH DELETE c
            RETURN count(c) AS deleted
            "#,
        )
        .param("id", id);

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let deleted: i64 = row.get("deleted").unwrap_or(0);
            Ok(deleted as u64)
        } else {
            Ok(0)
        }
    }

    /// Fetch a single concept by id.
    pub async fn get_concept(&self, id: &str) -> StoreResult<Option<ConceptNode>> {
        let q = query(
            r#"
            MATCH (c:Concept {id: $id})
            RETURN c
            "#,
        )
        .param("id", id);

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("c")
                .map_err(|e| StoreError::Unavailable(anyhow::Error::new(e)))?;
            Ok(Some(node_to_concept(&node)))
        } else {
            Ok(None)
        }
    }

    /// List concepts for a map, including legacy records with no `mapId`
    /// property when the default map is queried. Capped at [`MAP_PAGE_SIZE`].
    pub async fn get_concepts_by_map(&self, map_id: &str) -> StoreResult<Vec<ConceptNode>> {
        let q = query(
            r#"
            MATCH (c:Concept)
            WHERE c.mapId = $mapId OR (c.mapId IS NULL AND $mapId = $defaultMapId)
            RETURN c
            LIMIT $limit
            "#,
        )
        .param("mapId", map_id)
        .param("defaultMapId", DEFAULT_MAP_ID)
        .param("limit", MAP_PAGE_SIZE as i64);

        let mut result = self.graph.execute(q).await?;
        let mut concepts = Vec::new();
        while let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("c")
                .map_err(|e| StoreError::Unavailable(anyhow::Error::new(e)))?;
            concepts.push(node_to_concept(&node));
        }
        Ok(concepts)
    }

    /// Bulk fetch of concepts by id. Missing ids are skipped.
    pub async fn get_concepts_by_ids(&self, ids: &[String]) -> StoreResult<Vec<ConceptNode>> {
        let q = query(
            r#"
            MATCH (c:Concept)
            WHERE c.id IN $ids
            RETURN c
            "#,
        )
        .param("ids", ids.to_vec());

        let mut result = self.graph.execute(q).await?;
        let mut concepts = Vec::new();
        while let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("c")
                .map_err(|e| StoreError::Unavailable(anyhow::Error::new(e)))?;
            concepts.push(node_to_concept(&node));
        }
        Ok(concepts)
    }

    // ========================================================================
    // Relationship operations
    // ========================================================================

    /// Create a typed relationship between two concepts.
    /// Returns `false` when either endpoint is absent.
    pub async fn create_relationship(
        &self,
        source_id: &str,
        target_id: &str,
        rel_type: &str,
        weight: Option<f64>,
    ) -> StoreResult<bool> {
        let rel_type = normalize_rel_type(rel_type)?;

        // Relationship types cannot be parameterized; rel_type is sanitized
        // above before interpolation.
        let set_clause = if weight.is_some() {
            "SET r.weight = $weight"
        } else {
            ""
        };
        let cypher = format!(
            r#"
            MATCH (s:Concept {{id: $sourceId}}), (t:Concept {{id: $targetId}})
            CREATE (s)-[r:{}]->(t)
            {}
            RETURN count(r) AS created
            "#,
            rel_type, set_clause
        );

        let mut q = query(&cypher)
            .param("sourceId", source_id)
            .param("targetId", target_id);
        if let Some(w) = weight {
            q = q.param("weight", w);
        }

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let created: i64 = row.get("created").unwrap_or(0);
            Ok(created > 0)
        } else {
            Ok(false)
        }
    }

    /// A concept with its raw 1-hop relationship rows, outgoing then incoming.
    pub async fn get_concept_relations(
        &self,
        id: &str,
    ) -> StoreResult<Option<(ConceptNode, Vec<RelationRow>, Vec<RelationRow>)>> {
        let concept = match self.get_concept(id).await? {
            Some(c) => c,
            None => return Ok(None),
        };

        let outgoing = self
            .relation_rows(
                r#"
                MATCH (n:Concept {id: $id})
                OPTIONAL MATCH (n)-[r]->(t:Concept)
                RETURN type(r) AS rel_type, t.id AS neighbor_id, r.weight AS weight
                "#,
                id,
            )
            .await?;

        let incoming = self
            .relation_rows(
                r#"
                MATCH (n:Concept {id: $id})
                OPTIONAL MATCH (s:Concept)-[r]->(n)
                RETURN type(r) AS rel_type, s.id AS neighbor_id, r.weight AS weight
                "#,
                id,
            )
            .await?;

        Ok(Some((concept, outgoing, incoming)))
    }

    async fn relation_rows(&self, cypher: &str, id: &str) -> StoreResult<Vec<RelationRow>> {
        let q = query(cypher).param("id", id);
        let mut result = self.graph.execute(q).await?;
        let mut rows = Vec::new();
        while let Some(row) = result.next().await? {
            rows.push(RelationRow {
                rel_type: row.get::<String>("rel_type").ok(),
                neighbor_id: row.get::<String>("neighbor_id").ok(),
                weight: row.get::<f64>("weight").ok(),
            });
        }
        Ok(rows)
    }

    /// Every concept-to-concept edge in the store.
    pub async fn list_relationship_edges(&self) -> StoreResult<Vec<RelationEdge>> {
        let q = query(
            r#"
            MATCH (s:Concept)-[r]->(t:Concept)
            RETURN s.id AS source, t.id AS target, type(r) AS rel_type, r.weight AS weight
            "#,
        );

        let mut result = self.graph.execute(q).await?;
        let mut edges = Vec::new();
        while let Some(row) = result.next().await? {
            edges.push(RelationEdge {
                source: row
                    .get("source")
                    .map_err(|e| StoreError::Unavailable(anyhow::Error::new(e)))?,
                target: row
                    .get("target")
                    .map_err(|e| StoreError::Unavailable(anyhow::Error::new(e)))?,
                rel_type: row
                    .get("rel_type")
                    .map_err(|e| StoreError::Unavailable(anyhow::Error::new(e)))?,
                weight: row.get::<f64>("weight").ok(),
            });
        }
        Ok(edges)
    }

    // ========================================================================
    // Map operations
    // ========================================================================

    /// Create a new map.
    pub async fn create_map(&self, map: &MapNode) -> StoreResult<MapNode> {
        let q = query(
            r#"
            CREATE (m:Map {
                id: $id,
                name: $name,
                description: $description,
                emoji: $emoji,
                createdAt: $createdAt
            })
            RETURN m
            "#,
        )
        .param("id", map.id.clone())
        .param("name", map.name.clone())
        .param("description", map.description.clone().unwrap_or_default())
        .param("emoji", map.emoji.clone())
        .param(
            "createdAt",
            map.created_at.unwrap_or_else(chrono::Utc::now).to_rfc3339(),
        );

        let mut result = self.graph.execute(q).await?;
        let row = result
            .next()
            .await?
            .ok_or_else(|| StoreError::Unavailable(anyhow::anyhow!("CREATE returned no row")))?;
        let node: neo4rs::Node = row
            .get("m")
            .map_err(|e| StoreError::Unavailable(anyhow::Error::new(e)))?;
        Ok(node_to_map(&node))
    }

    /// Fetch a single map by id.
    pub async fn get_map(&self, id: &str) -> StoreResult<Option<MapNode>> {
        let q = query(
            r#"
            MATCH (m:Map {id: $id})
            RETURN m
            "#,
        )
        .param("id", id);

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("m")
                .map_err(|e| StoreError::Unavailable(anyhow::Error::new(e)))?;
            Ok(Some(node_to_map(&node)))
        } else {
            Ok(None)
        }
    }

    /// List all maps; unsorted maps sink to the end, creation time breaks ties.
    pub async fn list_maps(&self) -> StoreResult<Vec<MapNode>> {
        let q = query(
            r#"
            MATCH (m:Map)
            RETURN m
            ORDER BY m.sortOrder IS NULL, m.sortOrder, m.createdAt ASC
            "#,
        );

        let mut result = self.graph.execute(q).await?;
        let mut maps = Vec::new();
        while let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("m")
                .map_err(|e| StoreError::Unavailable(anyhow::Error::new(e)))?;
            maps.push(node_to_map(&node));
        }
        Ok(maps)
    }

    /// Partial update of a map. Returns `None` when the id is absent.
    pub async fn update_map(&self, id: &str, patch: &MapPatch) -> StoreResult<Option<MapNode>> {
        let mut set_clauses = Vec::new();
        if patch.name.is_some() {
            set_clauses.push("m.name = $name");
        }
        if patch.description.is_some() {
            set_clauses.push("m.description = $description");
        }

        let cypher = if set_clauses.is_empty() {
            // No-op patch still verifies existence.
            "MATCH (m:Map {id: $id}) RETURN m".to_string()
        } else {
            format!(
                r#"
                MATCH (m:Map {{id: $id}})
                SET {}
                RETURN m
                "#,
                set_clauses.join(", ")
            )
        };

        let mut q = query(&cypher).param("id", id);
        if let Some(n) = &patch.name {
            q = q.param("name", n.clone());
        }
        if let Some(d) = &patch.description {
            q = q.param("description", d.clone());
        }

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("m")
                .map_err(|e| StoreError::Unavailable(anyhow::Error::new(e)))?;
            Ok(Some(node_to_map(&node)))
        } else {
            Ok(None)
        }
    }

    /// Delete a map and every concept referencing it.
    ///
    /// The cascade runs in a single statement — concepts detached first, then
    /// the map — so it is one transaction and a concurrent reader never
    /// observes a half-cascaded delete. Returns `None` when the map is absent,
    /// `Some(count)` with the number of deleted concepts otherwise.
    pub async fn delete_map(&self, id: &str) -> StoreResult<Option<u64>> {
        let q = query(
            r#"
            MATCH (m:Map {id: $id})
            OPTIONAL MATCH (c:Concept {mapId: $id})
            WITH m, collect(c) AS concepts
            FOREACH (c IN concepts | DETACH DELETE c)
            DELETE m
            RETURN size(concepts) AS removed
            "#,
        )
        .param("id", id);

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let removed: i64 = row.get("removed").unwrap_or(0);
            Ok(Some(removed as u64))
        } else {
            Ok(None)
        }
    }

    /// Full-replace reorder: each supplied id gets its position index as
    /// `sortOrder`.
    pub async fn reorder_maps(&self, ordered_ids: &[String]) -> StoreResult<()> {
        for (idx, id) in ordered_ids.iter().enumerate() {
            let q = query(
                r#"
                MATCH (m:Map {id: $id})
                SET m.sortOrder = $order
                "#,
            )
            .param("id", id.clone())
            .param("order", idx as i64);
            self.graph.run(q).await?;
        }
        Ok(())
    }

    // ========================================================================
    // Narration accessor
    // ========================================================================

    /// Concept projection for the narration collaborator.
    pub async fn get_concept_context(&self, id: &str) -> StoreResult<Option<ConceptContext>> {
        Ok(self.get_concept(id).await?.map(|c| ConceptContext {
            label: c.label,
            description: c.description,
            crisis: c.crisis,
            meta_tags: c.meta_tags,
        }))
    }

    // ========================================================================
    // Demo dataset
    // ========================================================================

    /// Wipe the store and load the demo mathematics map.
    ///
    /// Operational tooling behind the `atlas seed` CLI subcommand; not part
    /// of the GraphStore contract.
    pub async fn seed_demo(&self) -> StoreResult<()> {
        self.graph.run(query("MATCH (n) DETACH DELETE n")).await?;

        self.graph
            .run(
                query(
                    r#"
                    CREATE (m:Map {
                        id: $id,
                        name: 'Mathematical Concepts',
                        description: 'A philosophical web of foundational mathematics',
                        emoji: '🧮',
                        createdAt: $now
                    })
                    "#,
                )
                .param("id", DEFAULT_MAP_ID)
                .param("now", chrono::Utc::now().to_rfc3339()),
            )
            .await?;

        let concepts_cypher = r#"
            CREATE (c1:Concept {
                id: 'c1', label: 'Set', masteryLevel: 'MASTERED', emotion: '😎',
                mapId: 'default',
                description: 'A collection of elements determined by a condition. The most fundamental language of mathematics.',
                metaTags: ['Philosophy: Structure', 'Philosophy: Classification'],
                crisis: 'When Cantor argued that infinite sets have sizes, his contemporaries treated the very idea as heresy.'
            })
            CREATE (c2:Concept {
                id: 'c2', label: 'Function', masteryLevel: 'MASTERED', emotion: '🤔',
                mapId: 'default',
                description: 'A correspondence between two sets: every input has exactly one output.',
                metaTags: ['Philosophy: Mapping', 'Philosophy: Structure'],
                crisis: 'Euler saw functions only as formulas. When Fourier introduced discontinuous functions, the definition itself was contested.'
            })
            CREATE (limit:Concept {
                id: 'limit', label: 'Limit', masteryLevel: 'LEARNING', emotion: '🌊',
                mapId: 'default',
                description: 'Where a function settles as its input approaches a point arbitrarily closely.',
                metaTags: ['Philosophy: Infinity', 'Philosophy: Approximation'],
                crisis: 'Newton and Leibniz invented calculus, but whether the infinitesimal was zero or not horrified the logicians of the day.'
            })
            CREATE (c3:Concept {
                id: 'c3', label: 'Continuity', masteryLevel: 'LEARNING', emotion: '🤯',
                mapId: 'default',
                description: 'The property of being unbroken, made rigorous by the epsilon-delta formulation.',
                metaTags: ['Philosophy: Approximation', 'Philosophy: Local-to-Global'],
                crisis: 'Weierstrass produced a function continuous everywhere yet differentiable nowhere, shattering the intuition of smoothness.'
            })
            CREATE (c4:Concept {
                id: 'c4', label: 'Abstraction', masteryLevel: 'UNSEEN', emotion: '🔭',
                mapId: 'default',
                description: 'Extracting the shared structure of concrete things to reach broader truths.',
                metaTags: ['Philosophy: Structure', 'Philosophy: Classification']
            })
            CREATE (group:Concept {
                id: 'group', label: 'Group', masteryLevel: 'UNSEEN', emotion: '♾️',
                mapId: 'default',
                description: 'A set with one binary operation satisfying associativity, identity, and inverses.',
                metaTags: ['Philosophy: Symmetry', 'Philosophy: Structure'],
                crisis: 'Galois proved the quintic unsolvable by radicals. Proving impossibility itself changed what mathematics could be.'
            })
            CREATE (equiv:Concept {
                id: 'equiv', label: 'Equivalence Relation', masteryLevel: 'UNSEEN', emotion: '⚖️',
                mapId: 'default',
                description: 'A reflexive, symmetric, transitive relation that partitions a set into classes.',
                metaTags: ['Philosophy: Classification', 'Philosophy: Symmetry'],
                crisis: 'Mathematics needed a precise meaning for sameness, ending the confusion between congruence and similarity.'
            })
            CREATE (topo:Concept {
                id: 'topo', label: 'Topological Space', masteryLevel: 'UNSEEN', emotion: '🍩',
                mapId: 'default',
                description: 'A structure defining nearness without distance, where continuity still makes sense.',
                metaTags: ['Philosophy: Local-to-Global', 'Philosophy: Approximation'],
                crisis: 'That a donut and a coffee cup are the same shape destroyed intuition, and revolutionized twentieth-century mathematics.'
            })

            CREATE (c1)-[:COMMUNICATE {weight: 1.0}]->(c2)
            CREATE (c2)-[:COMMUNICATE {weight: 1.0}]->(limit)
            CREATE (limit)-[:ACCESSIBLE {cost: 3.0}]->(c3)
            CREATE (c1)-[:ACCESSIBLE {cost: 4.0}]->(group)
            CREATE (c1)-[:COMMUNICATE {weight: 0.8}]->(equiv)
            CREATE (equiv)-[:ACCESSIBLE {cost: 5.0}]->(topo)
            CREATE (c3)-[:ACCESSIBLE {cost: 4.0}]->(topo)
            CREATE (c4)-[:INFLUENCES]->(c1)
            CREATE (c4)-[:INFLUENCES]->(group)
            CREATE (c4)-[:INFLUENCES]->(equiv)
        "#;

        self.graph.run(query(concepts_cypher)).await?;

        tracing::info!("Seeded demo map with 8 concepts and 10 relationships");
        Ok(())
    }
}

// ============================================================================
// Row converters
// ============================================================================

/// Convert a Neo4j node into a `ConceptNode`, tolerating missing optional
/// properties on legacy records.
fn node_to_concept(node: &neo4rs::Node) -> ConceptNode {
    ConceptNode {
        id: node.get::<String>("id").unwrap_or_default(),
        label: node.get::<String>("label").unwrap_or_default(),
        description: node.get::<String>("description").ok(),
        mastery_level: node
            .get::<String>("masteryLevel")
            .map(|s| MasteryLevel::parse(&s))
            .unwrap_or_default(),
        emotion: node.get::<String>("emotion").ok(),
        crisis: node.get::<String>("crisis").ok(),
        meta_tags: node.get::<Vec<String>>("metaTags").unwrap_or_default(),
        links: node.get::<Vec<String>>("links").unwrap_or_default(),
        map_id: node
            .get::<String>("mapId")
            .unwrap_or_else(|_| DEFAULT_MAP_ID.to_string()),
        updated_at: node
            .get::<String>("updatedAt")
            .ok()
            .and_then(|s| s.parse().ok()),
    }
}

fn node_to_map(node: &neo4rs::Node) -> MapNode {
    MapNode {
        id: node.get::<String>("id").unwrap_or_default(),
        name: node.get::<String>("name").unwrap_or_default(),
        description: node.get::<String>("description").ok().filter(|s| !s.is_empty()),
        emoji: node.get::<String>("emoji").unwrap_or_default(),
        sort_order: node.get::<i64>("sortOrder").ok(),
        created_at: node
            .get::<String>("createdAt")
            .ok()
            .and_then(|s| s.parse().ok()),
    }
}
