use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::db::DbError;
use crate::entity::app_settings::{ActiveModel, Column, Entity as AppSettings, Model};

/// Repository for the singleton settings row
#[derive(Clone)]
pub struct SettingsRepository {
    conn: DatabaseConnection,
}

impl SettingsRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// The settings row, if one was ever saved
    pub async fn get(&self) -> Result<Option<Model>, DbError> {
        AppSettings::find()
            .order_by_asc(Column::Id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Update the existing row or insert the first one
    pub async fn upsert(&self, config: serde_json::Value) -> Result<Model, DbError> {
        match self.get().await? {
            Some(existing) => {
                let mut row: ActiveModel = existing.into();
                row.config = Set(config);
                row.updated_at = Set(Utc::now());
                row.update(&self.conn).await.map_err(Into::into)
            }
            None => {
                let row = ActiveModel {
                    config: Set(config),
                    updated_at: Set(Utc::now()),
                    ..Default::default()
                };
                row.insert(&self.conn).await.map_err(Into::into)
            }
        }
    }
}
