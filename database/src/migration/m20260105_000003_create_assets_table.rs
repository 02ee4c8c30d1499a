use sea_orm_migration::prelude::*;

use super::m20260105_000001_create_locations_table::Locations;
use super::m20260105_000002_create_employees_table::Employees;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Assets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Assets::AssetTag).string().not_null().unique_key())
                    .col(ColumnDef::new(Assets::SerialNumber).string().not_null().default(""))
                    .col(ColumnDef::new(Assets::Name).string().not_null())
                    .col(ColumnDef::new(Assets::Brand).string().not_null())
                    .col(ColumnDef::new(Assets::Model).string().not_null())
                    // Free text; casing varies between records
                    .col(ColumnDef::new(Assets::Category).string().not_null())
                    .col(
                        ColumnDef::new(Assets::Status)
                            .string_len(16)
                            .not_null()
                            .default("available"),
                    )
                    .col(
                        ColumnDef::new(Assets::Condition)
                            .string_len(8)
                            .not_null()
                            .default("good"),
                    )
                    .col(ColumnDef::new(Assets::Location).string().not_null())
                    .col(ColumnDef::new(Assets::LocationId).uuid())
                    .col(ColumnDef::new(Assets::AssignedTo).string())
                    .col(ColumnDef::new(Assets::AssignedToId).uuid())
                    .col(ColumnDef::new(Assets::PurchaseDate).date())
                    .col(ColumnDef::new(Assets::PurchaseCost).decimal_len(12, 2))
                    .col(ColumnDef::new(Assets::Vendor).string())
                    .col(ColumnDef::new(Assets::WarrantyStart).date())
                    .col(ColumnDef::new(Assets::WarrantyEnd).date())
                    .col(ColumnDef::new(Assets::Notes).text())
                    .col(
                        ColumnDef::new(Assets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Assets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assets_location_id")
                            .from(Assets::Table, Assets::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assets_assigned_to_id")
                            .from(Assets::Table, Assets::AssignedToId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_assets_status", Assets::Status),
            ("idx_assets_location_id", Assets::LocationId),
            ("idx_assets_assigned_to_id", Assets::AssignedToId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Assets::Table)
                        .col(column)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Assets {
    Table,
    Id,
    AssetTag,
    SerialNumber,
    Name,
    Brand,
    Model,
    Category,
    Status,
    Condition,
    Location,
    LocationId,
    AssignedTo,
    AssignedToId,
    PurchaseDate,
    PurchaseCost,
    Vendor,
    WarrantyStart,
    WarrantyEnd,
    Notes,
    CreatedAt,
    UpdatedAt,
}
