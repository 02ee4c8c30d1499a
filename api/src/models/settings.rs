//! The settings document stored in `app_settings.config`.
//!
//! Unknown keys are kept so a client can store extra preferences, and
//! missing keys fall back to the defaults.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub warranty_alerts: bool,
    pub assignment_notifications: bool,
    pub low_stock_alerts: bool,
    pub email_digest: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            warranty_alerts: true,
            assignment_notifications: true,
            low_stock_alerts: false,
            email_digest: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfigDocument {
    pub org_name: String,
    pub tag_prefix: String,
    pub currency: String,
    pub timezone: String,
    pub notifications: NotificationSettings,
    pub categories: Vec<String>,
    pub roles: Vec<Role>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AppConfigDocument {
    fn default() -> Self {
        let role = |name: &str, description: &str| Role {
            name: name.to_string(),
            description: description.to_string(),
        };
        Self {
            org_name: "Asset Compass".to_string(),
            tag_prefix: "AST-".to_string(),
            currency: "INR".to_string(),
            timezone: "UTC".to_string(),
            notifications: NotificationSettings::default(),
            categories: ["Laptops", "Desktops", "Phones", "Tablets", "Monitors", "Accessories"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            roles: vec![
                role("Super Admin", "Full access to all features"),
                role("IT Admin", "Manage assets, assignments, and reports"),
                role("Warehouse Operator", "Issue/receive assets, update status"),
                role("Employee", "View own assigned assets"),
                role("Auditor", "Read-only access to reports"),
            ],
            extra: Map::new(),
        }
    }
}

impl AppConfigDocument {
    /// Read a stored document; anything unreadable falls back to defaults
    pub fn from_stored(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            tracing::warn!("Stored settings are unreadable, using defaults: {}", e);
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("orgName", Some(self.org_name.as_str()));
        errors.require("tagPrefix", Some(self.tag_prefix.as_str()));
        if self.tag_prefix.chars().any(|c| c.is_ascii_digit() || c.is_whitespace()) {
            errors.add("tagPrefix", "tagPrefix cannot contain digits or spaces");
        }
        errors.require("currency", Some(self.currency.as_str()));
        errors.into_result()
    }
}
