use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::validation::ValidationErrors;
use crate::entity::sea_orm_active_enums::EmployeeStatus;
use crate::entity::{assets, employees};

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub location: Option<String>,
    pub location_id: Option<Uuid>,
    pub avatar_url: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub join_date: Option<NaiveDate>,
}

impl NewEmployee {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", Some(self.name.as_str()));
        errors.min_len("name", &self.name, 2);
        errors.require("email", Some(self.email.as_str()));
        errors.email("email", &self.email);
        errors.require("department", Some(self.department.as_str()));
        errors.require("position", Some(self.position.as_str()));
        if self.location_id.is_none() {
            errors.require("location", self.location.as_deref());
        }
        errors.into_result()
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub location_id: Option<Uuid>,
    pub avatar_url: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub join_date: Option<NaiveDate>,
}

impl EmployeeUpdate {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &self.name {
            errors.require("name", Some(name.as_str()));
            errors.min_len("name", name, 2);
        }
        if let Some(email) = &self.email {
            errors.require("email", Some(email.as_str()));
            errors.email("email", email);
        }
        for (field, value) in [
            ("department", &self.department),
            ("position", &self.position),
        ] {
            if let Some(value) = value {
                errors.require(field, Some(value.as_str()));
            }
        }
        errors.into_result()
    }
}

/// Employee together with the assets they currently hold
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetail {
    #[serde(flatten)]
    pub employee: employees::Model,
    pub assets: Vec<assets::Model>,
}

/// Body of POST /employees/{id}/offboard
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OffboardRequest {
    /// Where returned assets go; they stay put when absent
    pub location_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OffboardResponse {
    pub employee: employees::Model,
    pub returned_assets: Vec<assets::Model>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAssetsResponse {
    pub message: String,
    pub mock: bool,
    pub asset_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_employee_validation() {
        let employee = NewEmployee {
            name: "Priya Sharma".into(),
            email: "priya@example".into(),
            department: "IT".into(),
            position: "".into(),
            location: Some("Head Office".into()),
            ..Default::default()
        };
        let errors = employee.validate().unwrap_err();
        let fields: Vec<&str> = errors.fields().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "position"]);
    }

    #[test]
    fn test_status_accepts_kebab_case() {
        let update: EmployeeUpdate = serde_json::from_str(r#"{"status":"on-leave"}"#).unwrap();
        assert_eq!(update.status, Some(EmployeeStatus::OnLeave));
        assert!(update.validate().is_ok());
    }
}
