//! Prelude module for convenient imports

pub use super::alerts::Entity as Alerts;
pub use super::app_settings::Entity as AppSettings;
pub use super::assets::Entity as Assets;
pub use super::assignments::Entity as Assignments;
pub use super::employees::Entity as Employees;
pub use super::locations::Entity as Locations;
