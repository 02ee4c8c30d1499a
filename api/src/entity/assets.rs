use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{AssetCondition, AssetStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assets")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub asset_tag: String,
    pub serial_number: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub category: String,
    pub status: AssetStatus,
    pub condition: AssetCondition,
    // Display name; may disagree with location_id on legacy rows
    pub location: String,
    pub location_id: Option<Uuid>,
    pub assigned_to: Option<String>,
    pub assigned_to_id: Option<Uuid>,
    pub purchase_date: Option<Date>,
    pub purchase_cost: Option<Decimal>,
    pub vendor: Option<String>,
    pub warranty_start: Option<Date>,
    pub warranty_end: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::locations::Entity",
        from = "Column::LocationId",
        to = "super::locations::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Location,
    #[sea_orm(
        belongs_to = "super::employees::Entity",
        from = "Column::AssignedToId",
        to = "super::employees::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Employee,
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
}

impl Related<super::locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
