use serde::Deserialize;
use uuid::Uuid;

use crate::domain::validation::ValidationErrors;
use crate::entity::sea_orm_active_enums::{AlertSeverity, AlertType};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub asset_id: Option<Uuid>,
    pub severity: AlertSeverity,
}

impl NewAlert {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("title", Some(self.title.as_str()));
        errors.into_result()
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertUpdate {
    #[serde(rename = "type")]
    pub alert_type: Option<AlertType>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub asset_id: Option<Uuid>,
    pub severity: Option<AlertSeverity>,
    pub is_resolved: Option<bool>,
}

impl AlertUpdate {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(title) = &self.title {
            errors.require("title", Some(title.as_str()));
        }
        errors.into_result()
    }
}
