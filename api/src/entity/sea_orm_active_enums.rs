//! Enumerated column types shared by the entities

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "assigned")]
    Assigned,
    #[sea_orm(string_value = "repair")]
    Repair,
    #[sea_orm(string_value = "lost")]
    Lost,
    #[sea_orm(string_value = "retired")]
    Retired,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Available => "available",
            AssetStatus::Assigned => "assigned",
            AssetStatus::Repair => "repair",
            AssetStatus::Lost => "lost",
            AssetStatus::Retired => "retired",
        }
    }

    /// Case-insensitive parse, used by the bulk import
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "available" => Some(AssetStatus::Available),
            "assigned" => Some(AssetStatus::Assigned),
            "repair" | "in repair" => Some(AssetStatus::Repair),
            "lost" => Some(AssetStatus::Lost),
            "retired" => Some(AssetStatus::Retired),
            _ => None,
        }
    }
}

/// Physical condition of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(8))")]
#[serde(rename_all = "lowercase")]
pub enum AssetCondition {
    #[sea_orm(string_value = "new")]
    New,
    #[sea_orm(string_value = "good")]
    Good,
    #[sea_orm(string_value = "fair")]
    Fair,
    #[sea_orm(string_value = "poor")]
    Poor,
}

impl AssetCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCondition::New => "new",
            AssetCondition::Good => "good",
            AssetCondition::Fair => "fair",
            AssetCondition::Poor => "poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "inactive")]
    Inactive,
    #[sea_orm(string_value = "on-leave")]
    OnLeave,
    #[sea_orm(string_value = "remote")]
    Remote,
    #[sea_orm(string_value = "terminated")]
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    #[sea_orm(string_value = "office")]
    Office,
    #[sea_orm(string_value = "warehouse")]
    Warehouse,
    #[sea_orm(string_value = "remote")]
    Remote,
    #[sea_orm(string_value = "outlet")]
    Outlet,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Office => "office",
            LocationType::Warehouse => "warehouse",
            LocationType::Remote => "remote",
            LocationType::Outlet => "outlet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    #[sea_orm(string_value = "warranty")]
    Warranty,
    #[sea_orm(string_value = "overdue")]
    Overdue,
    #[sea_orm(string_value = "missing")]
    Missing,
    #[sea_orm(string_value = "approval")]
    Approval,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(8))")]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    #[sea_orm(string_value = "low")]
    Low,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "high")]
    High,
}
