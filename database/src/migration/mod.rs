pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_locations_table;
mod m20260105_000002_create_employees_table;
mod m20260105_000003_create_assets_table;
mod m20260105_000004_create_assignments_table;
mod m20260105_000005_create_alerts_table;
mod m20260105_000006_create_app_settings_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_locations_table::Migration),
            Box::new(m20260105_000002_create_employees_table::Migration),
            Box::new(m20260105_000003_create_assets_table::Migration),
            Box::new(m20260105_000004_create_assignments_table::Migration),
            Box::new(m20260105_000005_create_alerts_table::Migration),
            Box::new(m20260105_000006_create_app_settings_table::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Database;

    #[tokio::test]
    async fn test_migrations_create_every_table() {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&conn, None).await.unwrap();

        let manager = SchemaManager::new(&conn);
        for table in [
            "locations",
            "employees",
            "assets",
            "assignments",
            "alerts",
            "app_settings",
        ] {
            assert!(manager.has_table(table).await.unwrap(), "missing {}", table);
        }
        assert!(Migrator::get_pending_migrations(&conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rollback_drops_tables_in_reverse() {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&conn, None).await.unwrap();
        Migrator::down(&conn, Some(2)).await.unwrap();

        let manager = SchemaManager::new(&conn);
        assert!(!manager.has_table("app_settings").await.unwrap());
        assert!(!manager.has_table("alerts").await.unwrap());
        assert!(manager.has_table("assignments").await.unwrap());
        assert_eq!(Migrator::get_pending_migrations(&conn).await.unwrap().len(), 2);
    }
}
