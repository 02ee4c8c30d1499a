use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::db::DbError;
use crate::entity::alerts::{ActiveModel, Column, Entity as Alert, Model};

/// Repository for alert database operations
#[derive(Clone)]
pub struct AlertRepository {
    conn: DatabaseConnection,
}

impl AlertRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Unresolved alerts, newest first
    pub async fn find_unresolved(&self) -> Result<Vec<Model>, DbError> {
        Alert::find()
            .filter(Column::IsResolved.eq(false))
            .order_by_desc(Column::CreatedAt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Model>, DbError> {
        Alert::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn insert(&self, alert: ActiveModel) -> Result<Model, DbError> {
        alert.insert(&self.conn).await.map_err(Into::into)
    }

    pub async fn update(&self, alert: ActiveModel) -> Result<Model, DbError> {
        alert.update(&self.conn).await.map_err(Into::into)
    }

    /// Mark an alert resolved; returns whether a row was touched
    pub async fn resolve(&self, id: Uuid) -> Result<bool, DbError> {
        let result = Alert::update_many()
            .col_expr(Column::IsResolved, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::Id.eq(id))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbError> {
        let result = Alert::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }
}
