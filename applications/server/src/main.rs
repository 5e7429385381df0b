/// Artistly Server - performer marketplace API
use artistly_core::{query, FilterOptions};
use artistly_server::{config::ServerConfig, create_router, state, AppState, StorageBackend};
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "artistly-server")]
#[command(about = "Artistly performer marketplace server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "ARTISTLY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print artists matching the given filters
    ListArtists {
        /// Comma-separated category labels
        #[arg(long)]
        category: Option<String>,
        /// Exact location
        #[arg(long)]
        location: Option<String>,
        /// Exact fee range label
        #[arg(long)]
        price_range: Option<String>,
        /// Case-insensitive text in name, bio or categories
        #[arg(long)]
        search: Option<String>,
    },
    /// Load the reference artists and bookings into an empty database
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "artistly_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(&config).await?;
        }
        Commands::ListArtists {
            category,
            location,
            price_range,
            search,
        } => {
            let criteria = cli_filters(category, location, price_range, search);
            list_artists(&config, &criteria).await?;
        }
        Commands::Seed => {
            seed(&config).await?;
        }
    }

    Ok(())
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Artistly Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let app_state = AppState::from_config(config).await?;
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Map `list-artists` flags onto filter criteria through the same decoder
/// the HTTP listing uses
fn cli_filters(
    category: Option<String>,
    location: Option<String>,
    price_range: Option<String>,
    search: Option<String>,
) -> FilterOptions {
    let params = [
        (query::CATEGORY_KEY, category),
        (query::LOCATION_KEY, location),
        (query::PRICE_RANGE_KEY, price_range),
        (query::SEARCH_KEY, search),
    ];
    query::parse(
        params
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v))),
    )
}

async fn list_artists(config: &ServerConfig, criteria: &FilterOptions) -> anyhow::Result<()> {
    let app_state = AppState::from_config(config).await?;
    let listing = app_state.listing.list(criteria).await?;

    println!("Artists ({}):", listing.total);
    for artist in listing.artists {
        println!(
            "  {} - {} [{}] {} / {}",
            artist.id,
            artist.name,
            artist.category.join(", "),
            artist.location,
            artist.fee_range
        );
    }

    Ok(())
}

async fn seed(config: &ServerConfig) -> anyhow::Result<()> {
    if config.storage.backend == StorageBackend::Memory {
        tracing::warn!("Memory backend selected; seeded data will not outlive this command");
    }

    let source = state::open_data_source(config).await?;
    if artistly_storage::seed_if_empty(source.as_ref()).await? {
        println!("Seeded reference artists and bookings");
    } else {
        println!("Data source already holds artists; nothing to do");
    }

    let criteria = FilterOptions::default();
    let total = AppState::new(source, std::sync::Arc::new(config.catalog.to_catalog()))
        .listing
        .list(&criteria)
        .await?
        .total;
    println!("Artists stored: {total}");

    Ok(())
}
