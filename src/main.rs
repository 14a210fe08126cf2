//! Concept Atlas - Main Server
//!
//! Knowledge-mapping service backed by Neo4j.

use anyhow::Result;
use clap::{Parser, Subcommand};
use concept_atlas::{start_server, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "atlas")]
#[command(about = "Concept Atlas Server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Wipe the store and load the demo mathematics map
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,concept_atlas=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env()?;

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server_port = port;
            }
            start_server(config).await
        }
        Commands::Seed => run_seed(config).await,
    }
}

async fn run_seed(config: Config) -> Result<()> {
    // seed_demo is an inherent method of the Neo4j client, not part of the
    // GraphStore contract, so connect to the concrete client.
    let client = concept_atlas::store::Neo4jClient::new(
        &config.neo4j_uri,
        &config.neo4j_user,
        &config.neo4j_password,
    )
    .await?;
    tracing::info!("Connected to graph store");

    client.seed_demo().await?;

    tracing::info!("Demo dataset loaded");
    Ok(())
}
