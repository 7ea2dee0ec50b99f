use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StatusHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StatusHistory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StatusHistory::ApplicationId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StatusHistory::PreviousStatus).string_len(16))
                    .col(
                        ColumnDef::new(StatusHistory::NewStatus)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(StatusHistory::Actor).string_len(16).not_null())
                    .col(ColumnDef::new(StatusHistory::Note).text())
                    .col(
                        ColumnDef::new(StatusHistory::ChangedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StatusHistory::Table, StatusHistory::ApplicationId)
                            .to(Applications::Table, Applications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StatusHistory::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum StatusHistory {
    Table,
    Id,
    ApplicationId,
    PreviousStatus,
    NewStatus,
    Actor,
    Note,
    ChangedAt,
}

#[derive(Iden)]
enum Applications {
    Table,
    Id,
}
