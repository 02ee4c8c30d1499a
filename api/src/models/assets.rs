use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::validation::ValidationErrors;
use crate::entity::sea_orm_active_enums::{AssetCondition, AssetStatus};
use crate::entity::{assets, assignments};

/// Query parameters for GET /assets
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetListQuery {
    pub status: Option<AssetStatus>,
    pub category: Option<String>,
    pub location_id: Option<Uuid>,
    pub search: Option<String>,
}

/// Body of POST /assets. The tag is generated when omitted.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewAsset {
    pub asset_tag: Option<String>,
    pub serial_number: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub category: String,
    pub status: Option<AssetStatus>,
    pub condition: Option<AssetCondition>,
    pub location: Option<String>,
    pub location_id: Option<Uuid>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_cost: Option<Decimal>,
    pub vendor: Option<String>,
    pub warranty_start: Option<NaiveDate>,
    pub warranty_end: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl NewAsset {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", Some(self.name.as_str()));
        errors.min_len("name", &self.name, 2);
        errors.require("category", Some(self.category.as_str()));
        errors.require("brand", Some(self.brand.as_str()));
        errors.require("model", Some(self.model.as_str()));
        if self.location_id.is_none() {
            errors.require("location", self.location.as_deref());
        }
        errors.non_negative("purchaseCost", self.purchase_cost);
        errors.date_order("warrantyEnd", self.warranty_start, self.warranty_end);
        if self.status == Some(AssetStatus::Assigned) {
            errors.add("status", "New assets cannot start as assigned; use assign");
        }
        errors.into_result()
    }
}

/// Body of PUT /assets/{id}; absent fields are left unchanged
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetUpdate {
    pub serial_number: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub category: Option<String>,
    pub status: Option<AssetStatus>,
    pub condition: Option<AssetCondition>,
    pub location: Option<String>,
    pub location_id: Option<Uuid>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_cost: Option<Decimal>,
    pub vendor: Option<String>,
    pub warranty_start: Option<NaiveDate>,
    pub warranty_end: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl AssetUpdate {
    /// Validate the update as applied on top of `current`
    pub fn validate(&self, current: &assets::Model) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for (field, value) in [
            ("name", &self.name),
            ("category", &self.category),
            ("brand", &self.brand),
            ("model", &self.model),
        ] {
            if let Some(value) = value {
                errors.require(field, Some(value.as_str()));
            }
        }
        if let Some(name) = &self.name {
            errors.min_len("name", name, 2);
        }
        if let Some(location) = &self.location {
            if self.location_id.is_none() {
                errors.require("location", Some(location.as_str()));
            }
        }
        errors.non_negative("purchaseCost", self.purchase_cost);
        errors.date_order(
            "warrantyEnd",
            self.warranty_start.or(current.warranty_start),
            self.warranty_end.or(current.warranty_end),
        );
        errors.into_result()
    }
}

/// Body of POST /assets/{id}/assign
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    pub employee_id: Uuid,
    pub notes: Option<String>,
}

/// Body of POST /assets/{id}/return
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReturnRequest {
    pub location_id: Option<Uuid>,
    pub location_name: Option<String>,
    pub condition: Option<AssetCondition>,
}

/// Asset and the assignment opened or closed by a custody change
#[derive(Debug, Serialize)]
pub struct AssignmentOutcome {
    pub asset: assets::Model,
    pub assignment: assignments::Model,
}

/// One row of a bulk import
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkAssetRow {
    pub name: String,
    pub category: String,
    pub serial_number: String,
    pub status: String,
    pub location: String,
    pub assigned_to: String,
}

impl BulkAssetRow {
    /// Build a row from CSV columns in the import order
    pub fn from_columns(columns: &[String]) -> Option<Self> {
        if columns.len() < 5 {
            return None;
        }
        let col = |i: usize| columns.get(i).map(|c| c.trim().to_string()).unwrap_or_default();
        Some(Self {
            name: col(0),
            category: col(1),
            serial_number: col(2),
            status: col(3),
            location: col(4),
            assigned_to: col(5),
        })
    }

    /// The first required column that is blank
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("category", &self.category),
            ("serialNumber", &self.serial_number),
            ("location", &self.location),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

/// Body of POST /assets/bulk: JSON rows or raw CSV text
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkImportRequest {
    pub assets: Option<Vec<BulkAssetRow>>,
    pub csv: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRow {
    /// 1-based row number within the submitted data
    pub row: usize,
    pub reason: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkImportResponse {
    pub imported: Vec<assets::Model>,
    pub skipped: Vec<SkippedRow>,
}
