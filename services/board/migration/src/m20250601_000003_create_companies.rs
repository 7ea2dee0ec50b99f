use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Companies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Companies::UserId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Companies::LegalName).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Companies::TaxId)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Companies::Sector).string())
                    .col(ColumnDef::new(Companies::Address).string())
                    .col(ColumnDef::new(Companies::Phone).string())
                    .col(ColumnDef::new(Companies::Website).string())
                    .col(ColumnDef::new(Companies::SocialLinks).text())
                    .col(ColumnDef::new(Companies::EconomicActivity).string())
                    .col(ColumnDef::new(Companies::Size).string())
                    .col(
                        ColumnDef::new(Companies::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Companies::VerifiedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Companies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Companies::Table, Companies::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Companies {
    Table,
    Id,
    UserId,
    LegalName,
    TaxId,
    Sector,
    Address,
    Phone,
    Website,
    SocialLinks,
    EconomicActivity,
    Size,
    Verified,
    VerifiedAt,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
