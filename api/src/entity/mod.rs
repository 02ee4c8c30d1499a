//! Entity module for database models

pub mod alerts;
pub mod app_settings;
pub mod assets;
pub mod assignments;
pub mod employees;
pub mod locations;
pub mod prelude;
pub mod sea_orm_active_enums;
