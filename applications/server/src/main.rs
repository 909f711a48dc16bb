/// Catalog Server - library catalog web application
use catalog_core::types::{CreateBook, CreateGenre};
use catalog_server::{config::ServerConfig, create_router, state::AppState};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "catalog-server")]
#[command(about = "Library catalog web server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Insert a small fixture data set
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config: _ } => {
            serve().await?;
        }
        Commands::Seed => {
            seed().await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Catalog Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = catalog_storage::create_pool(&config.storage.database_url).await?;
    catalog_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    // Build application state and router
    let app_state = AppState::new(pool);
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn seed() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let pool = catalog_storage::create_pool(&config.storage.database_url).await?;
    catalog_storage::run_migrations(&pool).await?;

    let fixtures = [
        ("Fantasy", vec!["The Hobbit", "A Wizard of Earthsea"]),
        ("Sci-Fi", vec!["Dune"]),
        ("Poetry", vec![]),
    ];

    for (name, titles) in fixtures {
        let genre = match catalog_storage::genres::find_by_name(&pool, name).await? {
            Some(existing) => {
                tracing::info!("Genre already exists: {}", name);
                existing
            }
            None => {
                let genre = catalog_storage::genres::create(
                    &pool,
                    CreateGenre {
                        name: name.to_string(),
                    },
                )
                .await?;
                tracing::info!("Created genre: {}", name);
                genre
            }
        };

        for title in titles {
            catalog_storage::books::create(
                &pool,
                CreateBook {
                    title: title.to_string(),
                    summary: None,
                    genre_id: genre.id,
                },
            )
            .await?;
            tracing::info!("Created book: {}", title);
        }
    }

    Ok(())
}
