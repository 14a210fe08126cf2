//! Concept Atlas
//!
//! A knowledge-mapping service:
//! - Neo4j graph store for concepts, maps, and typed relationships
//! - Relation aggregation (1-hop inbound/outbound views)
//! - Bounded unweighted shortest-path queries over the concept graph
//! - HTTP API consumed by the map UI and the LLM narration collaborator

pub mod api;
pub mod query;
pub mod store;

#[cfg(test)]
pub(crate) mod test_helpers;

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

// ============================================================================
// YAML config structs (deserialization targets)
// ============================================================================

/// Top-level YAML configuration file structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: ServerYamlConfig,
    pub neo4j: Neo4jYamlConfig,
}

/// Server configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerYamlConfig {
    pub port: u16,
}

impl Default for ServerYamlConfig {
    fn default() -> Self {
        Self { port: 4000 }
    }
}

/// Neo4j configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Neo4jYamlConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl Default for Neo4jYamlConfig {
    fn default() -> Self {
        Self {
            uri: "neo4j://localhost:7687".into(),
            user: "neo4j".into(),
            password: "password".into(),
        }
    }
}

// ============================================================================
// Runtime config (what the application actually uses)
// ============================================================================

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub neo4j_uri: String,
    pub neo4j_user: String,
    pub neo4j_password: String,
    pub server_port: u16,
}

impl Config {
    /// Load configuration from environment variables only.
    /// Equivalent to from_yaml_and_env(None).
    pub fn from_env() -> Result<Self> {
        Self::from_yaml_and_env(None)
    }

    /// Load configuration from an optional YAML file, then override with env
    /// vars.
    ///
    /// Priority: env var > YAML > default
    ///
    /// If `yaml_path` is None, tries "config.yaml" in CWD. If the file
    /// doesn't exist, falls back to pure env var / defaults.
    pub fn from_yaml_and_env(yaml_path: Option<&Path>) -> Result<Self> {
        let yaml = Self::load_yaml(yaml_path);

        Ok(Self {
            neo4j_uri: std::env::var("NEO4J_URI").unwrap_or(yaml.neo4j.uri),
            neo4j_user: std::env::var("NEO4J_USER").unwrap_or(yaml.neo4j.user),
            neo4j_password: std::env::var("NEO4J_PASSWORD").unwrap_or(yaml.neo4j.password),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(yaml.server.port),
        })
    }

    /// Try to load and parse a YAML config file. Returns defaults on any
    /// failure.
    fn load_yaml(yaml_path: Option<&Path>) -> YamlConfig {
        let default_path = Path::new("config.yaml");
        let path = yaml_path.unwrap_or(default_path);

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    YamlConfig::default()
                }
            },
            Err(_) => {
                tracing::debug!(
                    "No config file at {}, using env vars / defaults",
                    path.display()
                );
                YamlConfig::default()
            }
        }
    }
}

// ============================================================================
// Application state
// ============================================================================

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn store::GraphStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state with the graph store connected.
    pub async fn new(config: Config) -> Result<Self> {
        let store = Arc::new(
            store::Neo4jClient::new(&config.neo4j_uri, &config.neo4j_user, &config.neo4j_password)
                .await?,
        );

        Ok(Self {
            store,
            config: Arc::new(config),
        })
    }
}

/// Start the HTTP server and block until shutdown.
pub async fn start_server(config: Config) -> Result<()> {
    let port = config.server_port;
    let state = AppState::new(config).await?;

    let server_state = Arc::new(api::handlers::ServerState::new(state.store.clone()));
    let router = api::create_router(server_state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Concept Atlas listening on {}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
