use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationErrors;
use crate::entity::sea_orm_active_enums::LocationType;
use crate::entity::{assets, employees, locations};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLocation {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub location_type: LocationType,
    pub address: Option<String>,
}

impl NewLocation {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", Some(self.name.as_str()));
        errors.min_len("name", &self.name, 2);
        errors.into_result()
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationUpdate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub location_type: Option<LocationType>,
    pub address: Option<String>,
}

impl LocationUpdate {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &self.name {
            errors.require("name", Some(name.as_str()));
            errors.min_len("name", name, 2);
        }
        errors.into_result()
    }
}

/// Location with the counts derived through the membership rule
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationView {
    #[serde(flatten)]
    pub location: locations::Model,
    pub assets_count: usize,
    pub employees_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetail {
    #[serde(flatten)]
    pub view: LocationView,
    pub assets: Vec<assets::Model>,
    pub employees: Vec<employees::Model>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::location;

    #[test]
    fn test_view_serializes_flat_with_counts() {
        let view = LocationView {
            location: location("Head Office"),
            assets_count: 3,
            employees_count: 1,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["name"], "Head Office");
        assert_eq!(json["type"], "office");
        assert_eq!(json["assetsCount"], 3);
        assert_eq!(json["employeesCount"], 1);
    }

    #[test]
    fn test_new_location_type_is_required() {
        assert!(serde_json::from_str::<NewLocation>(r#"{"name":"Depot"}"#).is_err());
        let loc: NewLocation =
            serde_json::from_str(r#"{"name":"Depot","type":"warehouse"}"#).unwrap();
        assert_eq!(loc.location_type, LocationType::Warehouse);
    }
}
