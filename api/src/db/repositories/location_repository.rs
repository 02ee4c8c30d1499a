use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use super::contains_ignore_case;
use crate::db::DbError;
use crate::entity::locations::{ActiveModel, Column, Entity as Location, Model};

/// Repository for location database operations
#[derive(Clone)]
pub struct LocationRepository {
    conn: DatabaseConnection,
}

impl LocationRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get all locations ordered by name
    pub async fn find_all(&self) -> Result<Vec<Model>, DbError> {
        Location::find()
            .order_by_asc(Column::Name)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Model>, DbError> {
        Location::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn search(&self, term: &str, limit: u64) -> Result<Vec<Model>, DbError> {
        Location::find()
            .filter(contains_ignore_case(Column::Name, term))
            .order_by_asc(Column::Name)
            .limit(limit)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn insert(&self, location: ActiveModel) -> Result<Model, DbError> {
        location.insert(&self.conn).await.map_err(Into::into)
    }

    pub async fn update(&self, location: ActiveModel) -> Result<Model, DbError> {
        location.update(&self.conn).await.map_err(Into::into)
    }

    /// Delete a location. Foreign keys from assets and employees reject the
    /// delete while the location is still referenced by id.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbError> {
        let result = Location::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }
}
