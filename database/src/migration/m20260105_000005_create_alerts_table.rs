use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // asset_id is informational only and carries no foreign key
        manager
            .create_table(
                Table::create()
                    .table(Alerts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Alerts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Alerts::Type).string_len(16).not_null())
                    .col(ColumnDef::new(Alerts::Title).string().not_null())
                    .col(ColumnDef::new(Alerts::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Alerts::AssetId).uuid())
                    .col(
                        ColumnDef::new(Alerts::Severity)
                            .string_len(8)
                            .not_null()
                            .default("medium"),
                    )
                    .col(
                        ColumnDef::new(Alerts::IsResolved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Alerts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Alerts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_alerts_is_resolved")
                    .table(Alerts::Table)
                    .col(Alerts::IsResolved)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alerts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Alerts {
    Table,
    Id,
    Type,
    Title,
    Description,
    AssetId,
    Severity,
    IsResolved,
    CreatedAt,
    UpdatedAt,
}
