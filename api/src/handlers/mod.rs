// Handlers Module
// This module contains the API endpoint handlers

pub mod admin;
pub mod alerts;
pub mod assets;
pub mod assignments;
pub mod dashboard;
pub mod employees;
pub mod handover;
pub mod health;
pub mod locations;
pub mod reports;
pub mod search;
pub mod settings;

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::cache::CollectionCache;
use crate::config::ApiConfig;
use crate::db::Repositories;
use crate::email::Mailer;

/// Everything a request handler needs
pub struct AppContext {
    pub repositories: Repositories,
    pub cache: CollectionCache,
    pub mailer: Mailer,
    pub config: ApiConfig,
    pub db: DatabaseConnection,
}

impl AppContext {
    pub fn new(db: DatabaseConnection, config: ApiConfig, mailer: Mailer) -> Self {
        Self {
            repositories: Repositories::new(db.clone()),
            cache: CollectionCache::new(config.cache_ttl),
            mailer,
            config,
            db,
        }
    }
}

// Type alias for the application state
pub type AppState = Arc<AppContext>;
