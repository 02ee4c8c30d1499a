//! Pure domain logic: membership, aggregation, reports, rendering and
//! validation. Nothing in here touches the database.

pub mod csv;
pub mod dashboard;
pub mod handover;
pub mod membership;
pub mod render;
pub mod reports;
pub mod tags;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, NaiveDate, Utc};
    use uuid::Uuid;

    use crate::entity::sea_orm_active_enums::{
        AssetCondition, AssetStatus, EmployeeStatus, LocationType,
    };
    use crate::entity::{assets, assignments, employees, locations};

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn location(name: &str) -> locations::Model {
        locations::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            location_type: LocationType::Office,
            address: None,
            created_at: Utc::now(),
        }
    }

    pub fn asset_at(location_name: &str, location_id: Option<Uuid>) -> assets::Model {
        let id = Uuid::new_v4();
        assets::Model {
            id,
            asset_tag: format!("AST-{}", &id.simple().to_string()[..6]),
            serial_number: "SN-1".to_string(),
            name: "MacBook Pro".to_string(),
            brand: "Apple".to_string(),
            model: "A2442".to_string(),
            category: "laptop".to_string(),
            status: AssetStatus::Available,
            condition: AssetCondition::Good,
            location: location_name.to_string(),
            location_id,
            assigned_to: None,
            assigned_to_id: None,
            purchase_date: None,
            purchase_cost: None,
            vendor: None,
            warranty_start: None,
            warranty_end: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    pub fn asset_with(category: &str, status: AssetStatus) -> assets::Model {
        let mut asset = asset_at("Head Office", None);
        asset.category = category.to_string();
        asset.status = status;
        asset
    }

    pub fn employee_at(location_name: &str, location_id: Option<Uuid>) -> employees::Model {
        let id = Uuid::new_v4();
        employees::Model {
            id,
            name: "Priya Sharma".to_string(),
            email: format!("{}@example.com", id.simple()),
            department: "Engineering".to_string(),
            position: "Developer".to_string(),
            location: location_name.to_string(),
            location_id,
            avatar_url: None,
            status: EmployeeStatus::Active,
            join_date: None,
            created_at: Utc::now(),
        }
    }

    pub fn assignment_for(asset: &assets::Model, at: DateTime<Utc>) -> assignments::Model {
        assignments::Model {
            id: Uuid::new_v4(),
            asset_id: asset.id,
            asset_tag: asset.asset_tag.clone(),
            asset_name: asset.name.clone(),
            employee_id: None,
            employee_name: "Priya Sharma".to_string(),
            assigned_date: at,
            return_date: None,
            condition: asset.condition,
            notes: None,
        }
    }
}
