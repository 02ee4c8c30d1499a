use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::prelude::*;
use std::error::Error;
use tracing::{error, info};

use crate::config::DatabaseConfig;
use crate::migration::Migrator;

async fn connect() -> Result<DatabaseConnection, Box<dyn Error>> {
    let config = DatabaseConfig::from_env()?;

    info!("Connecting to database {} on {}:{}", config.name, config.host, config.port);
    match Database::connect(&config.url).await {
        Ok(conn) => Ok(conn),
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            Err(Box::new(e))
        }
    }
}

/// Execute the migrate command
pub async fn execute(steps: Option<u32>) -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    let all_migrations = Migrator::get_migration_files();
    info!("Found {} migration files", all_migrations.len());
    for m in &all_migrations {
        info!("Migration file: {}", m.name());
    }

    match steps {
        Some(n) => info!("Running {} migrations", n),
        None => info!("Running all pending migrations"),
    }
    if let Err(e) = Migrator::up(&connection, steps).await {
        error!("Failed to run migrations: {}", e);
        error!("Migration error details: {:?}", e);
        return Err(Box::new(e));
    }

    info!("Migrations applied");
    Ok(())
}

/// Roll back the last `steps` applied migrations (one by default)
pub async fn rollback(steps: Option<u32>) -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;
    let steps = steps.unwrap_or(1);

    info!("Rolling back {} migrations", steps);
    if let Err(e) = Migrator::down(&connection, Some(steps)).await {
        error!("Failed to roll back migrations: {}", e);
        return Err(Box::new(e));
    }

    info!("Rolled back {} migrations", steps);
    Ok(())
}

/// Drop every table and apply all migrations from scratch
pub async fn reset() -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    info!("Resetting database");
    if let Err(e) = Migrator::fresh(&connection).await {
        error!("Failed to reset database: {}", e);
        return Err(Box::new(e));
    }

    info!("Database reset complete");
    Ok(())
}

/// Log which migrations are applied and which are pending
pub async fn status() -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    let applied = Migrator::get_applied_migrations(&connection).await?;
    let pending = Migrator::get_pending_migrations(&connection).await?;

    info!(
        "{} migrations applied, {} pending",
        applied.len(),
        pending.len()
    );
    for m in &applied {
        info!("Applied: {}", m.name());
    }
    for m in &pending {
        info!("Pending: {}", m.name());
    }

    Ok(())
}
