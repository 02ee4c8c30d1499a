use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::db::DbError;
use crate::entity::sea_orm_active_enums::{AssetCondition, AssetStatus};
use crate::entity::{assets, assignments, employees};

/// Where a returned asset goes and in what shape
#[derive(Debug, Default, Clone)]
pub struct ReturnTarget {
    pub location_id: Option<Uuid>,
    pub location_name: Option<String>,
    pub condition: Option<AssetCondition>,
}

/// Repository for assignment history and the custody transitions
#[derive(Clone)]
pub struct AssignmentRepository {
    conn: DatabaseConnection,
}

impl AssignmentRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All assignments, most recent first
    pub async fn find_all(&self) -> Result<Vec<assignments::Model>, DbError> {
        assignments::Entity::find()
            .order_by_desc(assignments::Column::AssignedDate)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<assignments::Model>, DbError> {
        assignments::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// History of one asset, most recent first
    pub async fn find_by_asset(&self, asset_id: Uuid) -> Result<Vec<assignments::Model>, DbError> {
        assignments::Entity::find()
            .filter(assignments::Column::AssetId.eq(asset_id))
            .order_by_desc(assignments::Column::AssignedDate)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Hand an asset to an employee.
    ///
    /// Opens exactly one assignment and flips the asset to `assigned` inside a
    /// single transaction. The asset update is guarded on the status not being
    /// `assigned` already, so two concurrent assigns cannot both succeed.
    pub async fn assign(
        &self,
        asset: &assets::Model,
        employee: &employees::Model,
        notes: Option<String>,
    ) -> Result<(assets::Model, assignments::Model), DbError> {
        let txn = self.conn.begin().await?;
        let now = Utc::now();

        let open = assignments::Entity::find()
            .filter(assignments::Column::AssetId.eq(asset.id))
            .filter(assignments::Column::ReturnDate.is_null())
            .all(&txn)
            .await?;
        if !open.is_empty() {
            return Err(DbError::StaleWrite(format!(
                "asset {} already has an open assignment",
                asset.asset_tag
            )));
        }

        let updated = assets::Entity::update_many()
            .col_expr(assets::Column::Status, Expr::value(AssetStatus::Assigned))
            .col_expr(
                assets::Column::AssignedTo,
                Expr::value(Some(employee.name.clone())),
            )
            .col_expr(assets::Column::AssignedToId, Expr::value(Some(employee.id)))
            .col_expr(assets::Column::UpdatedAt, Expr::value(now))
            .filter(assets::Column::Id.eq(asset.id))
            .filter(assets::Column::Status.ne(AssetStatus::Assigned))
            .exec(&txn)
            .await?;
        if updated.rows_affected != 1 {
            return Err(DbError::StaleWrite(format!(
                "asset {} changed before it could be assigned",
                asset.asset_tag
            )));
        }

        let assignment = assignments::ActiveModel {
            id: Set(Uuid::new_v4()),
            asset_id: Set(asset.id),
            asset_tag: Set(asset.asset_tag.clone()),
            asset_name: Set(asset.name.clone()),
            employee_id: Set(Some(employee.id)),
            employee_name: Set(employee.name.clone()),
            assigned_date: Set(now),
            return_date: Set(None),
            condition: Set(asset.condition),
            notes: Set(notes),
        }
        .insert(&txn)
        .await?;

        let asset = assets::Entity::find_by_id(asset.id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbError::QueryError(format!("asset {} not found", asset.id)))?;

        txn.commit().await?;
        Ok((asset, assignment))
    }

    /// Take an asset back.
    ///
    /// Closes the open assignment and makes the asset `available` again,
    /// optionally moving it, inside a single transaction. Returns the updated
    /// asset and the assignment that was closed.
    pub async fn return_asset(
        &self,
        asset_id: Uuid,
        target: &ReturnTarget,
    ) -> Result<(assets::Model, assignments::Model), DbError> {
        let txn = self.conn.begin().await?;
        let now = Utc::now();

        let open = assignments::Entity::find()
            .filter(assignments::Column::AssetId.eq(asset_id))
            .filter(assignments::Column::ReturnDate.is_null())
            .order_by_desc(assignments::Column::AssignedDate)
            .all(&txn)
            .await?;
        let Some(current) = open.first().cloned() else {
            return Err(DbError::StaleWrite(format!(
                "asset {} has no open assignment",
                asset_id
            )));
        };
        if open.len() > 1 {
            tracing::warn!(
                "Asset {} had {} open assignments; closing all of them",
                asset_id,
                open.len()
            );
        }

        let open_ids: Vec<Uuid> = open.iter().map(|a| a.id).collect();
        assignments::Entity::update_many()
            .col_expr(assignments::Column::ReturnDate, Expr::value(Some(now)))
            .filter(assignments::Column::Id.is_in(open_ids))
            .exec(&txn)
            .await?;

        let mut update = assets::Entity::update_many()
            .col_expr(assets::Column::Status, Expr::value(AssetStatus::Available))
            .col_expr(assets::Column::AssignedTo, Expr::value(Option::<String>::None))
            .col_expr(assets::Column::AssignedToId, Expr::value(Option::<Uuid>::None))
            .col_expr(assets::Column::UpdatedAt, Expr::value(now));
        if let Some(location_id) = target.location_id {
            update = update.col_expr(assets::Column::LocationId, Expr::value(Some(location_id)));
        }
        if let Some(name) = target.location_name.clone() {
            update = update.col_expr(assets::Column::Location, Expr::value(name));
        }
        if let Some(condition) = target.condition {
            update = update.col_expr(assets::Column::Condition, Expr::value(condition));
        }
        let updated = update
            .filter(assets::Column::Id.eq(asset_id))
            .exec(&txn)
            .await?;
        if updated.rows_affected != 1 {
            return Err(DbError::StaleWrite(format!(
                "asset {} disappeared during return",
                asset_id
            )));
        }

        let asset = assets::Entity::find_by_id(asset_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbError::QueryError(format!("asset {} not found", asset_id)))?;
        let closed = assignments::Entity::find_by_id(current.id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbError::QueryError(format!("assignment {} not found", current.id)))?;

        txn.commit().await?;
        Ok((asset, closed))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbError> {
        let result = assignments::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
