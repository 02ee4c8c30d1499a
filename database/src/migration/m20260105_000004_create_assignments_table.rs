use sea_orm_migration::prelude::*;

use super::m20260105_000002_create_employees_table::Employees;
use super::m20260105_000003_create_assets_table::Assets;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Assignments::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Assignments::AssetId).uuid().not_null())
                    .col(ColumnDef::new(Assignments::AssetTag).string().not_null())
                    .col(ColumnDef::new(Assignments::AssetName).string().not_null())
                    .col(ColumnDef::new(Assignments::EmployeeId).uuid())
                    .col(ColumnDef::new(Assignments::EmployeeName).string().not_null())
                    .col(
                        ColumnDef::new(Assignments::AssignedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // NULL while the assignment is open
                    .col(ColumnDef::new(Assignments::ReturnDate).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Assignments::Condition)
                            .string_len(8)
                            .not_null()
                            .default("good"),
                    )
                    .col(ColumnDef::new(Assignments::Notes).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignments_asset_id")
                            .from(Assignments::Table, Assignments::AssetId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignments_employee_id")
                            .from(Assignments::Table, Assignments::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assignments_asset_id")
                    .table(Assignments::Table)
                    .col(Assignments::AssetId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assignments_assigned_date")
                    .table(Assignments::Table)
                    .col(Assignments::AssignedDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Assignments {
    Table,
    Id,
    AssetId,
    AssetTag,
    AssetName,
    EmployeeId,
    EmployeeName,
    AssignedDate,
    ReturnDate,
    Condition,
    Notes,
}
