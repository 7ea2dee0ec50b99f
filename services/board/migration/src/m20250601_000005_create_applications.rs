use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Applications::UserId).integer().not_null())
                    .col(ColumnDef::new(Applications::OfferId).integer().not_null())
                    .col(ColumnDef::new(Applications::CompanyName).string().not_null())
                    .col(ColumnDef::new(Applications::Position).string().not_null())
                    .col(ColumnDef::new(Applications::Description).text())
                    .col(
                        ColumnDef::new(Applications::Status)
                            .string_len(16)
                            .not_null()
                            .default("Registered"),
                    )
                    .col(ColumnDef::new(Applications::Salary).string())
                    .col(ColumnDef::new(Applications::Location).string())
                    .col(ColumnDef::new(Applications::Tags).text())
                    .col(
                        ColumnDef::new(Applications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Applications::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Applications::Table, Applications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Applications::Table, Applications::OfferId)
                            .to(Offers::Table, Offers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One application per seeker and offer.
        manager
            .create_index(
                Index::create()
                    .table(Applications::Table)
                    .col(Applications::UserId)
                    .col(Applications::OfferId)
                    .unique()
                    .name("uq_applications_user_id_offer_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Applications {
    Table,
    Id,
    UserId,
    OfferId,
    CompanyName,
    Position,
    Description,
    Status,
    Salary,
    Location,
    Tags,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Offers {
    Table,
    Id,
}
