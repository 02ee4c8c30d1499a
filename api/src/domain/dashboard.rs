// Dashboard aggregation over in-memory collections

use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use super::membership;
use crate::entity::sea_orm_active_enums::AssetStatus;
use crate::entity::{assets, locations};

/// Asset counts by lifecycle status
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub total_assets: usize,
    pub available: usize,
    pub assigned: usize,
    pub in_repair: usize,
    pub lost: usize,
    pub retired: usize,
}

impl StatusCounts {
    pub fn from_assets(assets: &[assets::Model]) -> Self {
        let mut counts = StatusCounts {
            total_assets: assets.len(),
            ..Default::default()
        };
        for asset in assets {
            counts.add(asset.status);
        }
        counts
    }

    fn add(&mut self, status: AssetStatus) {
        match status {
            AssetStatus::Available => self.available += 1,
            AssetStatus::Assigned => self.assigned += 1,
            AssetStatus::Repair => self.in_repair += 1,
            AssetStatus::Lost => self.lost += 1,
            AssetStatus::Retired => self.retired += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub value: usize,
}

/// Canonical spelling of a category: trimmed, first letter upper case,
/// the rest lower case. Blank categories are "Other".
pub fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        None => "Other".to_string(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}

/// Assets per normalized category, largest bucket first, ties by name
pub fn category_breakdown(assets: &[assets::Model]) -> Vec<CategoryCount> {
    let mut buckets: HashMap<String, usize> = HashMap::new();
    for asset in assets {
        *buckets.entry(normalize_category(&asset.category)).or_insert(0) += 1;
    }

    let mut counts: Vec<CategoryCount> = buckets
        .into_iter()
        .map(|(name, value)| CategoryCount { name, value })
        .collect();
    counts.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    counts
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCount {
    pub location_id: Uuid,
    pub name: String,
    pub assets: usize,
}

/// Assets per location, using the shared membership rule
pub fn location_breakdown(
    locations: &[locations::Model],
    assets: &[assets::Model],
) -> Vec<LocationCount> {
    locations
        .iter()
        .map(|location| LocationCount {
            location_id: location.id,
            name: membership::display_name(&location.name),
            assets: membership::count_members(location, assets),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{asset_at, asset_with, location};

    #[test]
    fn test_empty_input_gives_zero_counts() {
        assert_eq!(StatusCounts::from_assets(&[]), StatusCounts::default());
        assert!(category_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_status_counts_sum_to_total() {
        let assets = vec![
            asset_with("laptop", AssetStatus::Available),
            asset_with("laptop", AssetStatus::Assigned),
            asset_with("phone", AssetStatus::Assigned),
            asset_with("monitor", AssetStatus::Repair),
            asset_with("monitor", AssetStatus::Lost),
            asset_with("desktop", AssetStatus::Retired),
        ];
        let counts = StatusCounts::from_assets(&assets);

        assert_eq!(counts.total_assets, 6);
        assert_eq!(counts.assigned, 2);
        assert_eq!(
            counts.available + counts.assigned + counts.in_repair + counts.lost + counts.retired,
            counts.total_assets
        );
    }

    #[test]
    fn test_categories_merge_case_variants() {
        let assets = vec![
            asset_with("Laptop", AssetStatus::Available),
            asset_with("laptop", AssetStatus::Available),
            asset_with("LAPTOP ", AssetStatus::Assigned),
            asset_with("phone", AssetStatus::Available),
            asset_with("", AssetStatus::Available),
        ];
        let breakdown = category_breakdown(&assets);

        assert_eq!(
            breakdown,
            vec![
                CategoryCount { name: "Laptop".into(), value: 3 },
                CategoryCount { name: "Other".into(), value: 1 },
                CategoryCount { name: "Phone".into(), value: 1 },
            ]
        );
        let sum: usize = breakdown.iter().map(|c| c.value).sum();
        assert_eq!(sum, assets.len());
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("tABLET"), "Tablet");
        assert_eq!(normalize_category("  monitor"), "Monitor");
        assert_eq!(normalize_category("   "), "Other");
    }

    #[test]
    fn test_location_breakdown_uses_alias_rule() {
        let warehouse = location("Warehouse");
        let office = location("Office");
        let assets = vec![
            asset_at("Central Warehouse", None),
            asset_at("Warehouse", None),
            asset_at("Office", Some(office.id)),
        ];
        let breakdown = location_breakdown(&[warehouse.clone(), office.clone()], &assets);

        assert_eq!(breakdown[0].assets, 2);
        assert_eq!(breakdown[0].name, "Central Warehouse");
        assert_eq!(breakdown[1].assets, 1);
    }
}
