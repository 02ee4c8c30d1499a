use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use super::contains_ignore_case;
use crate::db::DbError;
use crate::entity::assets::{ActiveModel, Column, Entity as Asset, Model};
use crate::entity::sea_orm_active_enums::AssetStatus;

/// Optional filters for listing assets
#[derive(Debug, Default, Clone)]
pub struct AssetFilter {
    pub status: Option<AssetStatus>,
    pub category: Option<String>,
    pub location_id: Option<Uuid>,
    pub search: Option<String>,
}

/// Repository for asset database operations
#[derive(Clone)]
pub struct AssetRepository {
    conn: DatabaseConnection,
}

impl AssetRepository {
    /// Create a new asset repository instance
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get all assets, newest first
    pub async fn find_all(&self) -> Result<Vec<Model>, DbError> {
        Asset::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Find assets matching the optional filters, newest first
    pub async fn find_filtered(&self, filter: &AssetFilter) -> Result<Vec<Model>, DbError> {
        let mut query = Asset::find();

        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status));
        }
        if let Some(category) = filter.category.as_deref() {
            // Categories are stored with inconsistent casing
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(Column::Category)))
                    .eq(category.trim().to_lowercase()),
            );
        }
        if let Some(location_id) = filter.location_id {
            query = query.filter(Column::LocationId.eq(location_id));
        }
        if let Some(term) = filter.search.as_deref().filter(|t| !t.trim().is_empty()) {
            query = query.filter(Self::search_condition(term.trim()));
        }

        query
            .order_by_desc(Column::CreatedAt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Find asset by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Model>, DbError> {
        Asset::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Assets currently held by an employee
    pub async fn find_assigned_to(&self, employee_id: Uuid) -> Result<Vec<Model>, DbError> {
        Asset::find()
            .filter(Column::AssignedToId.eq(employee_id))
            .filter(Column::Status.eq(AssetStatus::Assigned))
            .order_by_asc(Column::AssetTag)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Tag, name, serial number or brand containing the term
    pub async fn search(&self, term: &str, limit: u64) -> Result<Vec<Model>, DbError> {
        Asset::find()
            .filter(Self::search_condition(term))
            .order_by_asc(Column::AssetTag)
            .limit(limit)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// All asset tags starting with the prefix, for tag generation
    pub async fn tags_with_prefix(&self, prefix: &str) -> Result<Vec<String>, DbError> {
        let rows = Asset::find()
            .filter(Column::AssetTag.starts_with(prefix))
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(|a| a.asset_tag).collect())
    }

    pub async fn insert(&self, asset: ActiveModel) -> Result<Model, DbError> {
        asset.insert(&self.conn).await.map_err(Into::into)
    }

    pub async fn update(&self, asset: ActiveModel) -> Result<Model, DbError> {
        asset.update(&self.conn).await.map_err(Into::into)
    }

    /// Point an asset at a location record without touching anything else
    pub async fn set_location_id(&self, id: Uuid, location_id: Uuid) -> Result<(), DbError> {
        Asset::update_many()
            .col_expr(Column::LocationId, Expr::value(Some(location_id)))
            .filter(Column::Id.eq(id))
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    /// Rewrite the display name on every record pointing at the location
    pub async fn rename_location(&self, location_id: Uuid, name: &str) -> Result<u64, DbError> {
        let result = Asset::update_many()
            .col_expr(Column::Location, Expr::value(name.to_string()))
            .filter(Column::LocationId.eq(location_id))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Delete an asset; returns whether a row was removed
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbError> {
        let result = Asset::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    fn search_condition(term: &str) -> Condition {
        Condition::any()
            .add(contains_ignore_case(Column::AssetTag, term))
            .add(contains_ignore_case(Column::Name, term))
            .add(contains_ignore_case(Column::SerialNumber, term))
            .add(contains_ignore_case(Column::Brand, term))
    }
}
