use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use super::contains_ignore_case;
use crate::db::DbError;
use crate::entity::employees::{ActiveModel, Column, Entity as Employee, Model};

/// Repository for employee database operations
#[derive(Clone)]
pub struct EmployeeRepository {
    conn: DatabaseConnection,
}

impl EmployeeRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get all employees ordered by name
    pub async fn find_all(&self) -> Result<Vec<Model>, DbError> {
        Employee::find()
            .order_by_asc(Column::Name)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Model>, DbError> {
        Employee::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Name or email containing the term
    pub async fn search(&self, term: &str, limit: u64) -> Result<Vec<Model>, DbError> {
        Employee::find()
            .filter(
                Condition::any()
                    .add(contains_ignore_case(Column::Name, term))
                    .add(contains_ignore_case(Column::Email, term)),
            )
            .order_by_asc(Column::Name)
            .limit(limit)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn insert(&self, employee: ActiveModel) -> Result<Model, DbError> {
        employee.insert(&self.conn).await.map_err(Into::into)
    }

    pub async fn update(&self, employee: ActiveModel) -> Result<Model, DbError> {
        employee.update(&self.conn).await.map_err(Into::into)
    }

    pub async fn set_location_id(&self, id: Uuid, location_id: Uuid) -> Result<(), DbError> {
        Employee::update_many()
            .col_expr(Column::LocationId, Expr::value(Some(location_id)))
            .filter(Column::Id.eq(id))
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    /// Rewrite the display name on every record pointing at the location
    pub async fn rename_location(&self, location_id: Uuid, name: &str) -> Result<u64, DbError> {
        let result = Employee::update_many()
            .col_expr(Column::Location, Expr::value(name.to_string()))
            .filter(Column::LocationId.eq(location_id))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Delete an employee; returns whether a row was removed
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbError> {
        let result = Employee::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }
}
