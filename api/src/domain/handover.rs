//! Handover form: the list of assets whose custody passes to a person or a
//! location, ready to print and sign.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::membership;
use crate::entity::{assets, employees, locations};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandoverKind {
    Employee,
    Location,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoverLine {
    pub sr_no: usize,
    pub asset_tag: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub condition: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoverDocument {
    pub kind: HandoverKind,
    pub reference_id: Uuid,
    pub name: String,
    /// Email for a person, street address for a location
    pub contact: String,
    pub location: String,
    pub date: NaiveDate,
    pub assets: Vec<HandoverLine>,
}

fn lines<'a>(assets: impl Iterator<Item = &'a assets::Model>) -> Vec<HandoverLine> {
    assets
        .enumerate()
        .map(|(i, a)| HandoverLine {
            sr_no: i + 1,
            asset_tag: a.asset_tag.clone(),
            name: a.name.clone(),
            category: a.category.clone(),
            brand: a.brand.clone(),
            model: a.model.clone(),
            serial_number: a.serial_number.clone(),
            condition: a.condition.as_str().to_string(),
        })
        .collect()
}

/// Everything currently held by the employee
pub fn for_employee(
    employee: &employees::Model,
    assets: &[assets::Model],
    date: NaiveDate,
) -> HandoverDocument {
    let held = assets
        .iter()
        .filter(|a| a.assigned_to_id == Some(employee.id));

    HandoverDocument {
        kind: HandoverKind::Employee,
        reference_id: employee.id,
        name: employee.name.clone(),
        contact: employee.email.clone(),
        location: membership::display_name(&employee.location),
        date,
        assets: lines(held),
    }
}

/// Everything kept at the location
pub fn for_location(
    location: &locations::Model,
    assets: &[assets::Model],
    date: NaiveDate,
) -> HandoverDocument {
    let members = membership::members_of(location, assets);

    HandoverDocument {
        kind: HandoverKind::Location,
        reference_id: location.id,
        name: membership::display_name(&location.name),
        contact: location.address.clone().unwrap_or_default(),
        location: membership::display_name(&location.name),
        date,
        assets: lines(members.into_iter()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{asset_at, date, employee_at, location};

    #[test]
    fn test_employee_form_lists_held_assets() {
        let employee = employee_at("Head Office", None);
        let mut laptop = asset_at("Head Office", None);
        laptop.assigned_to_id = Some(employee.id);
        let spare = asset_at("Head Office", None);
        let assets = vec![spare, laptop];

        let doc = for_employee(&employee, &assets, date(2026, 10, 15));
        assert_eq!(doc.kind, HandoverKind::Employee);
        assert_eq!(doc.assets.len(), 1);
        assert_eq!(doc.assets[0].sr_no, 1);
        assert_eq!(doc.contact, employee.email);
    }

    #[test]
    fn test_location_form_uses_membership_rule() {
        let warehouse = location("Warehouse");
        let assets = vec![
            asset_at("Central Warehouse", None),
            asset_at("Office", None),
            asset_at("elsewhere", Some(warehouse.id)),
        ];

        let doc = for_location(&warehouse, &assets, date(2026, 10, 15));
        assert_eq!(doc.name, "Central Warehouse");
        assert_eq!(doc.assets.len(), 2);
        assert_eq!(doc.assets[1].sr_no, 2);
    }
}
