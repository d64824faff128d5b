/// Sonora Server - music catalog backend
use clap::{Parser, Subcommand};
use sonora_core::storage::CatalogStore;
use sonora_server::{config::ServerConfig, create_router, services::CatalogService, state::AppState};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sonora-server")]
#[command(about = "Sonora music catalog server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "SONORA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Apply database migrations and exit
    Migrate,
    /// Print document counts per collection
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sonora_server=info,sonora_storage=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(&config).await?,
        Commands::Migrate => migrate(&config).await?,
        Commands::Stats => stats(&config).await?,
    }

    Ok(())
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Sonora Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Storage failure at startup is the only fatal error
    let catalog = sonora_storage::open(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    tracing::info!("Database connected");

    let service = CatalogService::new(Arc::new(catalog));
    let app_state = AppState::new(Arc::new(service));
    let app = create_router(app_state);

    let addr = SocketAddr::from((config.ip_addr()?, config.server.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn migrate(config: &ServerConfig) -> anyhow::Result<()> {
    let pool = sonora_storage::create_pool(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    sonora_storage::run_migrations(&pool).await?;

    println!("Migrations applied to {}", config.storage.database_url);
    Ok(())
}

async fn stats(config: &ServerConfig) -> anyhow::Result<()> {
    let catalog = sonora_storage::open(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    let stats = catalog.stats().await?;

    println!("Catalog:");
    println!("  songs:     {}", stats.songs);
    println!("  segments:  {}", stats.segments);
    println!("  users:     {}", stats.users);
    println!("  playlists: {}", stats.playlists);

    Ok(())
}
