// Report row builders. Each report is a list of rows exported through `csv`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use uuid::Uuid;

use super::csv::CsvRow;
use super::membership;
use crate::entity::sea_orm_active_enums::AssetStatus;
use crate::entity::{assets, assignments, employees, locations};

/// The reports that can be generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Inventory,
    Assignments,
    Aging,
    Warranty,
    Locations,
    Utilization,
}

impl ReportKind {
    /// Base of the downloaded file name
    pub fn file_base(&self) -> &'static str {
        match self {
            ReportKind::Inventory => "inventory_report",
            ReportKind::Assignments => "assignment_report",
            ReportKind::Aging => "aging_report",
            ReportKind::Warranty => "warranty_expiration_report",
            ReportKind::Locations => "location_summary_report",
            ReportKind::Utilization => "utilization_report",
        }
    }
}

fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

fn opt_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

fn opt_money(value: Option<Decimal>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339()
}

// ---------------------------------------------------------------- inventory

pub struct InventoryRow<'a> {
    asset: &'a assets::Model,
}

impl CsvRow for InventoryRow<'_> {
    fn headers() -> &'static [&'static str] {
        &[
            "Asset Tag",
            "Serial Number",
            "Name",
            "Brand",
            "Model",
            "Category",
            "Status",
            "Condition",
            "Location",
            "Assigned To",
            "Purchase Date",
            "Purchase Cost",
            "Vendor",
            "Warranty End",
        ]
    }

    fn values(&self) -> Vec<String> {
        let a = self.asset;
        vec![
            a.asset_tag.clone(),
            a.serial_number.clone(),
            a.name.clone(),
            a.brand.clone(),
            a.model.clone(),
            a.category.clone(),
            a.status.as_str().to_string(),
            a.condition.as_str().to_string(),
            a.location.clone(),
            or_default(a.assigned_to.as_deref(), "Unassigned"),
            opt_date(a.purchase_date),
            opt_money(a.purchase_cost),
            a.vendor.clone().unwrap_or_default(),
            a.warranty_end.map(|d| d.to_string()).unwrap_or_else(|| "N/A".to_string()),
        ]
    }
}

pub fn inventory(assets: &[assets::Model]) -> Vec<InventoryRow<'_>> {
    assets.iter().map(|asset| InventoryRow { asset }).collect()
}

// -------------------------------------------------------------- assignments

pub struct AssignmentRow<'a> {
    assignment: &'a assignments::Model,
}

impl CsvRow for AssignmentRow<'_> {
    fn headers() -> &'static [&'static str] {
        &[
            "Asset Tag",
            "Asset Name",
            "Employee Name",
            "Assigned Date",
            "Return Date",
            "Condition",
            "Notes",
        ]
    }

    fn values(&self) -> Vec<String> {
        let a = self.assignment;
        vec![
            a.asset_tag.clone(),
            a.asset_name.clone(),
            a.employee_name.clone(),
            timestamp(a.assigned_date),
            a.return_date.map(timestamp).unwrap_or_else(|| "N/A".to_string()),
            a.condition.as_str().to_string(),
            or_default(a.notes.as_deref(), "N/A"),
        ]
    }
}

pub fn assignments(assignments: &[assignments::Model]) -> Vec<AssignmentRow<'_>> {
    assignments
        .iter()
        .map(|assignment| AssignmentRow { assignment })
        .collect()
}

// -------------------------------------------------------------------- aging

pub struct AgingRow<'a> {
    asset: &'a assets::Model,
    age_days: Option<i64>,
    age_years: Option<i64>,
}

/// Bucket label for an asset's age in whole years
pub fn age_category(years: i64) -> &'static str {
    if years > 5 {
        "Old (5+ years)"
    } else if years > 3 {
        "Mature (3-5 years)"
    } else if years > 1 {
        "Moderate (1-3 years)"
    } else {
        "New (0-1 years)"
    }
}

/// Straight-line depreciation of 20% a year, floored at 10% of cost
pub fn depreciated_value(cost: Decimal, years: i64) -> Decimal {
    let floor = Decimal::new(1, 1);
    let factor = (Decimal::ONE - Decimal::new(2, 1) * Decimal::from(years)).max(floor);
    (cost * factor).round_dp(2)
}

impl CsvRow for AgingRow<'_> {
    fn headers() -> &'static [&'static str] {
        &[
            "Asset Tag",
            "Name",
            "Category",
            "Purchase Date",
            "Age in Days",
            "Age in Years",
            "Age Category",
            "Original Cost",
            "Current Value",
            "Condition",
            "Status",
        ]
    }

    fn values(&self) -> Vec<String> {
        let a = self.asset;
        let current_value = match (a.purchase_cost, self.age_years) {
            (Some(cost), Some(years)) => format!("{:.2}", depreciated_value(cost, years)),
            _ => String::new(),
        };
        vec![
            a.asset_tag.clone(),
            a.name.clone(),
            a.category.clone(),
            opt_date(a.purchase_date),
            self.age_days.map(|d| d.to_string()).unwrap_or_default(),
            self.age_years.map(|y| y.to_string()).unwrap_or_default(),
            self.age_years
                .map(|y| age_category(y).to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            opt_money(a.purchase_cost),
            current_value,
            a.condition.as_str().to_string(),
            a.status.as_str().to_string(),
        ]
    }
}

pub fn aging(assets: &[assets::Model], today: NaiveDate) -> Vec<AgingRow<'_>> {
    assets
        .iter()
        .map(|asset| {
            let age_days = asset.purchase_date.map(|d| (today - d).num_days());
            AgingRow {
                asset,
                age_days,
                age_years: age_days.map(|d| d.div_euclid(365)),
            }
        })
        .collect()
}

// ----------------------------------------------------------------- warranty

pub struct WarrantyRow<'a> {
    asset: &'a assets::Model,
    warranty_end: NaiveDate,
    days_until_expiry: i64,
}

pub fn warranty_urgency(days_until_expiry: i64) -> &'static str {
    match days_until_expiry {
        d if d < 0 => "Expired",
        d if d <= 30 => "Expiring Within 30 Days",
        d if d <= 60 => "Expiring Within 60 Days",
        d if d <= 90 => "Expiring Within 90 Days",
        _ => "Not Expiring Soon",
    }
}

impl CsvRow for WarrantyRow<'_> {
    fn headers() -> &'static [&'static str] {
        &[
            "Asset Tag",
            "Name",
            "Category",
            "Warranty End",
            "Days Until Expiry",
            "Urgency",
            "Location",
            "Assigned To",
        ]
    }

    fn values(&self) -> Vec<String> {
        let a = self.asset;
        vec![
            a.asset_tag.clone(),
            a.name.clone(),
            a.category.clone(),
            self.warranty_end.to_string(),
            self.days_until_expiry.to_string(),
            warranty_urgency(self.days_until_expiry).to_string(),
            a.location.clone(),
            or_default(a.assigned_to.as_deref(), "Unassigned"),
        ]
    }
}

/// Assets with a warranty end date, soonest expiry first
pub fn warranty(assets: &[assets::Model], today: NaiveDate) -> Vec<WarrantyRow<'_>> {
    let mut rows: Vec<WarrantyRow<'_>> = assets
        .iter()
        .filter_map(|asset| {
            asset.warranty_end.map(|end| WarrantyRow {
                asset,
                warranty_end: end,
                days_until_expiry: (end - today).num_days(),
            })
        })
        .collect();
    rows.sort_by_key(|r| r.days_until_expiry);
    rows
}

// ---------------------------------------------------------------- locations

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSummaryRow {
    pub name: String,
    pub location_type: String,
    pub total: usize,
    pub assigned: usize,
    pub available: usize,
    pub repair: usize,
    pub lost: usize,
    pub retired: usize,
    pub employees: usize,
}

impl LocationSummaryRow {
    pub fn utilization_rate(&self) -> String {
        if self.total == 0 {
            return "0%".to_string();
        }
        format!("{:.1}%", self.assigned as f64 / self.total as f64 * 100.0)
    }
}

impl CsvRow for LocationSummaryRow {
    fn headers() -> &'static [&'static str] {
        &[
            "Location Name",
            "Location Type",
            "Total Assets",
            "Assigned Assets",
            "Available Assets",
            "In Repair Assets",
            "Lost Assets",
            "Retired Assets",
            "Total Employees",
            "Utilization Rate",
        ]
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.location_type.clone(),
            self.total.to_string(),
            self.assigned.to_string(),
            self.available.to_string(),
            self.repair.to_string(),
            self.lost.to_string(),
            self.retired.to_string(),
            self.employees.to_string(),
            self.utilization_rate(),
        ]
    }
}

pub fn location_summary(
    locations: &[locations::Model],
    assets: &[assets::Model],
    employees: &[employees::Model],
) -> Vec<LocationSummaryRow> {
    locations
        .iter()
        .map(|location| {
            let members = membership::members_of(location, assets);
            let with_status =
                |status: AssetStatus| members.iter().filter(|a| a.status == status).count();
            LocationSummaryRow {
                name: location.name.clone(),
                location_type: location.location_type.as_str().to_string(),
                total: members.len(),
                assigned: with_status(AssetStatus::Assigned),
                available: with_status(AssetStatus::Available),
                repair: with_status(AssetStatus::Repair),
                lost: with_status(AssetStatus::Lost),
                retired: with_status(AssetStatus::Retired),
                employees: membership::count_members(location, employees),
            }
        })
        .collect()
}

// -------------------------------------------------------------- utilization

pub struct UtilizationRow<'a> {
    asset: &'a assets::Model,
    last_assigned: Option<DateTime<Utc>>,
    today: NaiveDate,
}

pub fn utilization_status(status: AssetStatus) -> &'static str {
    match status {
        AssetStatus::Assigned => "In Use",
        AssetStatus::Available => "Idle",
        _ => "Unavailable",
    }
}

impl CsvRow for UtilizationRow<'_> {
    fn headers() -> &'static [&'static str] {
        &[
            "Asset Tag",
            "Name",
            "Category",
            "Status",
            "Location",
            "Assigned To",
            "Utilization Status",
            "Last Assignment Date",
            "Days Since Last Assignment",
        ]
    }

    fn values(&self) -> Vec<String> {
        let a = self.asset;
        vec![
            a.asset_tag.clone(),
            a.name.clone(),
            a.category.clone(),
            a.status.as_str().to_string(),
            a.location.clone(),
            or_default(a.assigned_to.as_deref(), "Unassigned"),
            utilization_status(a.status).to_string(),
            self.last_assigned
                .map(timestamp)
                .unwrap_or_else(|| "Never".to_string()),
            self.last_assigned
                .map(|d| (self.today - d.date_naive()).num_days().to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        ]
    }
}

pub fn utilization<'a>(
    assets: &'a [assets::Model],
    assignments: &[assignments::Model],
    today: NaiveDate,
) -> Vec<UtilizationRow<'a>> {
    let mut last_by_asset: HashMap<Uuid, DateTime<Utc>> = HashMap::new();
    for assignment in assignments {
        let entry = last_by_asset
            .entry(assignment.asset_id)
            .or_insert(assignment.assigned_date);
        if assignment.assigned_date > *entry {
            *entry = assignment.assigned_date;
        }
    }

    assets
        .iter()
        .map(|asset| UtilizationRow {
            asset,
            last_assigned: last_by_asset.get(&asset.id).copied(),
            today,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::csv;
    use crate::domain::test_support::{asset_at, assignment_for, date, employee_at, location};
    use chrono::TimeZone;

    #[test]
    fn test_age_category_boundaries() {
        assert_eq!(age_category(0), "New (0-1 years)");
        assert_eq!(age_category(1), "New (0-1 years)");
        assert_eq!(age_category(2), "Moderate (1-3 years)");
        assert_eq!(age_category(4), "Mature (3-5 years)");
        assert_eq!(age_category(6), "Old (5+ years)");
    }

    #[test]
    fn test_depreciation_floors_at_ten_percent() {
        let cost = Decimal::new(100000, 2);
        assert_eq!(depreciated_value(cost, 0), Decimal::new(100000, 2));
        assert_eq!(depreciated_value(cost, 2), Decimal::new(60000, 2));
        assert_eq!(depreciated_value(cost, 9), Decimal::new(10000, 2));
    }

    #[test]
    fn test_aging_rows() {
        let mut asset = asset_at("Office", None);
        asset.purchase_date = Some(date(2022, 10, 15));
        asset.purchase_cost = Some(Decimal::new(2000, 0));
        let assets = vec![asset];

        let rows = aging(&assets, date(2026, 10, 15));
        let values = rows[0].values();
        assert_eq!(values[4], "1461");
        assert_eq!(values[5], "4");
        assert_eq!(values[6], "Mature (3-5 years)");
        assert_eq!(values[8], "400.00");
    }

    #[test]
    fn test_warranty_sorted_and_bucketed() {
        let today = date(2026, 10, 15);
        let mut expired = asset_at("Office", None);
        expired.warranty_end = Some(date(2026, 10, 1));
        let mut soon = asset_at("Office", None);
        soon.warranty_end = Some(date(2026, 11, 1));
        let mut later = asset_at("Office", None);
        later.warranty_end = Some(date(2027, 6, 1));
        let no_warranty = asset_at("Office", None);
        let assets = vec![later, no_warranty, soon, expired];

        let rows = warranty(&assets, today);
        let urgencies: Vec<&str> = rows
            .iter()
            .map(|r| warranty_urgency(r.days_until_expiry))
            .collect();
        assert_eq!(
            urgencies,
            vec!["Expired", "Expiring Within 30 Days", "Not Expiring Soon"]
        );
    }

    #[test]
    fn test_location_summary_uses_membership_rule() {
        let warehouse = location("Warehouse");
        let mut held = asset_at("Central Warehouse", None);
        held.status = AssetStatus::Assigned;
        let assets = vec![held, asset_at("Warehouse", Some(warehouse.id)), asset_at("Office", None)];
        let employees = vec![employee_at("Central Warehouse", None)];

        let rows = location_summary(&[warehouse], &assets, &employees);
        assert_eq!(rows[0].total, 2);
        assert_eq!(rows[0].assigned, 1);
        assert_eq!(rows[0].available, 1);
        assert_eq!(rows[0].employees, 1);
        assert_eq!(rows[0].utilization_rate(), "50.0%");
    }

    #[test]
    fn test_empty_location_utilization() {
        let rows = location_summary(&[location("Empty")], &[], &[]);
        assert_eq!(rows[0].utilization_rate(), "0%");
    }

    #[test]
    fn test_utilization_picks_latest_assignment() {
        let asset = asset_at("Office", None);
        let idle = asset_at("Office", None);
        let older = assignment_for(&asset, Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap());
        let newer = assignment_for(&asset, Utc.with_ymd_and_hms(2026, 10, 5, 9, 0, 0).unwrap());
        let assets = vec![asset, idle];

        let rows = utilization(&assets, &[older, newer], date(2026, 10, 15));
        let first = rows[0].values();
        assert_eq!(first[6], "Idle");
        assert_eq!(first[8], "10");
        let second = rows[1].values();
        assert_eq!(second[7], "Never");
        assert_eq!(second[8], "N/A");
    }

    #[test]
    fn test_inventory_export_defaults() {
        let assets = vec![asset_at("Office", None)];
        let text = csv::export(&inventory(&assets)).unwrap();
        let records = csv::parse(&text).unwrap();
        assert_eq!(records[0].len(), InventoryRow::headers().len());
        assert_eq!(records[1][9], "Unassigned");
        assert_eq!(records[1][13], "N/A");
    }
}
