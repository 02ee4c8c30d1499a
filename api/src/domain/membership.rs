//! Location membership.
//!
//! Assets and employees reference their location twice: a display name and a
//! location id. The two can disagree on legacy rows, and one location was
//! historically stored as both "Warehouse" and "Central Warehouse". Every
//! view that groups records by location goes through [`belongs_to`] so the
//! counts agree everywhere.

use uuid::Uuid;

use crate::entity::{assets, employees, locations};

const WAREHOUSE: &str = "warehouse";
const CENTRAL_WAREHOUSE: &str = "central warehouse";

/// A record that carries a location reference
pub trait LocatedRecord {
    fn location_id(&self) -> Option<Uuid>;
    fn location_name(&self) -> &str;
}

impl LocatedRecord for assets::Model {
    fn location_id(&self) -> Option<Uuid> {
        self.location_id
    }

    fn location_name(&self) -> &str {
        &self.location
    }
}

impl LocatedRecord for employees::Model {
    fn location_id(&self) -> Option<Uuid> {
        self.location_id
    }

    fn location_name(&self) -> &str {
        &self.location
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Name equality after trim + lower-case, with the warehouse alias
/// accepted in both directions.
pub fn names_match(a: &str, b: &str) -> bool {
    let (a, b) = (normalize(a), normalize(b));
    a == b
        || (a == WAREHOUSE && b == CENTRAL_WAREHOUSE)
        || (a == CENTRAL_WAREHOUSE && b == WAREHOUSE)
}

/// Whether `record` belongs to `location`: an id match wins, otherwise the
/// names are compared with [`names_match`].
pub fn belongs_to<R: LocatedRecord + ?Sized>(location: &locations::Model, record: &R) -> bool {
    if record.location_id() == Some(location.id) {
        return true;
    }
    names_match(record.location_name(), &location.name)
}

/// The subset of `records` belonging to `location`, in input order
pub fn members_of<'a, R: LocatedRecord>(
    location: &locations::Model,
    records: &'a [R],
) -> Vec<&'a R> {
    records.iter().filter(|r| belongs_to(location, *r)).collect()
}

pub fn count_members<R: LocatedRecord>(location: &locations::Model, records: &[R]) -> usize {
    records.iter().filter(|r| belongs_to(location, *r)).count()
}

/// Find the location a free-text name refers to
pub fn resolve_by_name<'a>(
    name: &str,
    locations: &'a [locations::Model],
) -> Option<&'a locations::Model> {
    if name.trim().is_empty() {
        return None;
    }
    // Prefer an exact (normalized) match over the alias
    locations
        .iter()
        .find(|l| normalize(&l.name) == normalize(name))
        .or_else(|| locations.iter().find(|l| names_match(&l.name, name)))
}

/// Whether a record's id reference is missing or dangling and needs the
/// name-based backfill
pub fn needs_backfill<R: LocatedRecord>(record: &R, locations: &[locations::Model]) -> bool {
    match record.location_id() {
        None => true,
        Some(id) => !locations.iter().any(|l| l.id == id),
    }
}

/// Name shown for a location; the legacy short name is displayed in full
pub fn display_name(name: &str) -> String {
    if name == "Warehouse" {
        "Central Warehouse".to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{asset_at, employee_at, location};

    #[test]
    fn test_id_match_wins_over_name() {
        let hq = location("Head Office");
        let asset = asset_at("Somewhere Else", Some(hq.id));
        assert!(belongs_to(&hq, &asset));
    }

    #[test]
    fn test_name_match_ignores_case_and_whitespace() {
        let hq = location("Head Office");
        let asset = asset_at("  head office ", None);
        assert!(belongs_to(&hq, &asset));
    }

    #[test]
    fn test_warehouse_alias_in_both_directions() {
        let short = location("Warehouse");
        let long = location("Central Warehouse");

        assert!(belongs_to(&short, &asset_at("Central Warehouse", None)));
        assert!(belongs_to(&long, &asset_at("Warehouse", None)));
        assert!(belongs_to(&short, &employee_at("central warehouse", None)));
        assert!(belongs_to(&long, &employee_at("WAREHOUSE", None)));
    }

    #[test]
    fn test_warehouse_location_collects_central_warehouse_assets() {
        let warehouse = location("Warehouse");
        let assets = vec![
            asset_at("Central Warehouse", None),
            asset_at("Central Warehouse", None),
            asset_at("Head Office", None),
        ];

        let members = members_of(&warehouse, &assets);
        assert_eq!(members.len(), 2);
        assert!(members.iter().all(|a| a.location == "Central Warehouse"));
    }

    #[test]
    fn test_other_id_with_matching_name_is_still_member() {
        let hq = location("Head Office");
        let other = location("Branch");
        let asset = asset_at("Head Office", Some(other.id));
        // The id does not match, so the name decides
        assert!(belongs_to(&hq, &asset));
        assert!(belongs_to(&other, &asset));
    }

    #[test]
    fn test_no_match_yields_empty_set() {
        let hq = location("Head Office");
        let assets = vec![asset_at("Warehouse", None), asset_at("Branch", None)];
        assert!(members_of(&hq, &assets).is_empty());
        assert_eq!(count_members(&hq, &assets), 0);
    }

    #[test]
    fn test_partial_alias_does_not_match() {
        assert!(!names_match("Warehouse 2", "Central Warehouse"));
        assert!(!names_match("North Warehouse", "Warehouse"));
    }

    #[test]
    fn test_resolve_by_name_prefers_exact_match() {
        let locations = vec![location("Warehouse"), location("Central Warehouse")];
        let found = resolve_by_name("central warehouse", &locations).unwrap();
        assert_eq!(found.name, "Central Warehouse");

        let only_short = vec![location("Warehouse")];
        let found = resolve_by_name("Central Warehouse", &only_short).unwrap();
        assert_eq!(found.name, "Warehouse");

        assert!(resolve_by_name("", &locations).is_none());
        assert!(resolve_by_name("Mars", &locations).is_none());
    }

    #[test]
    fn test_needs_backfill_on_missing_or_dangling_id() {
        let locations = vec![location("Head Office")];
        assert!(needs_backfill(&asset_at("Head Office", None), &locations));
        assert!(needs_backfill(
            &asset_at("Head Office", Some(Uuid::new_v4())),
            &locations
        ));
        assert!(!needs_backfill(
            &asset_at("Head Office", Some(locations[0].id)),
            &locations
        ));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Warehouse"), "Central Warehouse");
        assert_eq!(display_name("Head Office"), "Head Office");
    }
}
