use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use travel_wishlist::{api, config::Config};

#[derive(Parser)]
#[command(name = "wishlist")]
#[command(about = "Keep track of places to visit and places you've been")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Interface to bind (overrides TRAVEL_WISHLIST_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides TRAVEL_WISHLIST_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Load places from a fixture file
    Seed {
        /// Path to a JSON fixture
        fixture: PathBuf,
    },
    /// Apply pending database migrations
    Migrate,
}

fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let db = config.open_database()?;
    db.migrate()?;

    let templates = config.load_templates()?;
    let app = api::create_router(api::AppState::new(db, templates));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("Travel wishlist listening on http://{}", address);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env();
    init_tracing(&config.log_filter);

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await?;
        }
        Some(Commands::Seed { fixture }) => {
            let db = config.open_database()?;
            db.migrate()?;
            let count = db.load_fixture_file(&fixture)?;
            println!("Loaded {} place(s) from {}", count, fixture.display());
        }
        Some(Commands::Migrate) => {
            let db = config.open_database()?;
            db.migrate()?;
            println!(
                "Database at {} is up to date",
                config.database_location()?.display()
            );
        }
        None => serve(config).await?,
    }

    Ok(())
}
