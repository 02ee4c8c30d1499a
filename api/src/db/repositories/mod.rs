// Database repository management

pub mod alert_repository;
pub mod asset_repository;
pub mod assignment_repository;
pub mod employee_repository;
pub mod location_repository;
pub mod settings_repository;

pub use alert_repository::AlertRepository;
pub use asset_repository::{AssetFilter, AssetRepository};
pub use assignment_repository::{AssignmentRepository, ReturnTarget};
pub use employee_repository::EmployeeRepository;
pub use location_repository::LocationRepository;
pub use settings_repository::SettingsRepository;

use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{ColumnTrait, DatabaseConnection};

/// Container for all database repositories
#[derive(Clone)]
pub struct Repositories {
    pub assets: AssetRepository,
    pub employees: EmployeeRepository,
    pub locations: LocationRepository,
    pub assignments: AssignmentRepository,
    pub alerts: AlertRepository,
    pub settings: SettingsRepository,
}

impl Repositories {
    /// Creates a new repositories container with database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        Repositories {
            assets: AssetRepository::new(conn.clone()),
            employees: EmployeeRepository::new(conn.clone()),
            locations: LocationRepository::new(conn.clone()),
            assignments: AssignmentRepository::new(conn.clone()),
            alerts: AlertRepository::new(conn.clone()),
            settings: SettingsRepository::new(conn),
        }
    }
}

/// `lower(column) LIKE '%term%'`, portable across Postgres and SQLite
pub(crate) fn contains_ignore_case<C: ColumnTrait>(column: C, term: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).like(format!("%{}%", term.to_lowercase()))
}
