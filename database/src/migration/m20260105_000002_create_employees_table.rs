use sea_orm_migration::prelude::*;

use super::m20260105_000001_create_locations_table::Locations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Employees::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Employees::Name).string().not_null())
                    .col(ColumnDef::new(Employees::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Employees::Department).string().not_null())
                    .col(ColumnDef::new(Employees::Position).string().not_null())
                    // Display name; location_id is the reference
                    .col(ColumnDef::new(Employees::Location).string().not_null())
                    .col(ColumnDef::new(Employees::LocationId).uuid())
                    .col(ColumnDef::new(Employees::AvatarUrl).string())
                    .col(
                        ColumnDef::new(Employees::Status)
                            .string_len(16)
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Employees::JoinDate).date())
                    .col(
                        ColumnDef::new(Employees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_location_id")
                            .from(Employees::Table, Employees::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employees_location_id")
                    .table(Employees::Table)
                    .col(Employees::LocationId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Employees {
    Table,
    Id,
    Name,
    Email,
    Department,
    Position,
    Location,
    LocationId,
    AvatarUrl,
    Status,
    JoinDate,
    CreatedAt,
}
