use clap::{Parser, Subcommand};
use std::error::Error;

mod commands;
mod config;
mod migration;

/// Asset Compass schema management: creates the database and applies the
/// migrations for locations, employees, assets, assignments, alerts and settings
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database named in DATABASE_URL (or --name) if it is missing
    Create {
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Apply pending migrations
    Migrate {
        /// Number of migrations to apply (all if not specified)
        #[arg(short, long)]
        steps: Option<u32>,
    },
    /// Roll back applied migrations
    Rollback {
        /// Number of migrations to roll back (one if not specified)
        #[arg(short, long)]
        steps: Option<u32>,
    },
    /// Drop every table and re-apply all migrations
    Reset {
        /// Required; the reset deletes all inventory data
        #[arg(long)]
        force: bool,
    },
    /// List applied and pending migrations
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Commands::Create { name } => commands::create::execute(name).await?,
        Commands::Migrate { steps } => commands::migrate::execute(steps).await?,
        Commands::Rollback { steps } => commands::migrate::rollback(steps).await?,
        Commands::Reset { force } => {
            if !force {
                tracing::error!("Reset drops all asset, employee and location data; pass --force");
                return Err("reset requires --force".into());
            }
            commands::migrate::reset().await?
        }
        Commands::Status => commands::migrate::status().await?,
    }

    Ok(())
}
