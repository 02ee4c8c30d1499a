// Health check service implementation

use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub database: &'static str,
    pub database_reachable: bool,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.database_reachable
    }
}

pub struct HealthChecker {
    conn: DatabaseConnection,
}

impl HealthChecker {
    pub fn new(conn: &DatabaseConnection) -> Self {
        Self { conn: conn.clone() }
    }

    pub async fn check(&self) -> HealthReport {
        let backend = self.conn.get_database_backend();
        let database = match backend {
            DbBackend::Postgres => "PostgreSQL",
            DbBackend::MySql => "MySQL",
            DbBackend::Sqlite => "SQLite",
        };

        let reachable = match self
            .conn
            .execute(Statement::from_string(backend, "SELECT 1".to_string()))
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::error!("Database health check failed: {}", e);
                false
            }
        };

        HealthReport {
            status: if reachable { "ok" } else { "degraded" },
            database,
            database_reachable: reachable,
        }
    }
}
