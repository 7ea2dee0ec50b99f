use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Offers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Offers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Offers::CompanyId).integer().not_null())
                    .col(ColumnDef::new(Offers::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Offers::Description).text().not_null())
                    .col(ColumnDef::new(Offers::Duties).text())
                    .col(ColumnDef::new(Offers::Requirements).text())
                    .col(ColumnDef::new(Offers::RequiredSkills).text())
                    .col(ColumnDef::new(Offers::Location).string())
                    .col(ColumnDef::new(Offers::Modality).string_len(16).not_null())
                    .col(ColumnDef::new(Offers::ContractType).string())
                    .col(ColumnDef::new(Offers::Schedule).string())
                    .col(ColumnDef::new(Offers::SalaryMin).double())
                    .col(ColumnDef::new(Offers::SalaryMax).double())
                    .col(
                        ColumnDef::new(Offers::PublishedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Offers::ClosesOn).date())
                    .col(
                        ColumnDef::new(Offers::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Offers::Table, Offers::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Offers {
    Table,
    Id,
    CompanyId,
    Title,
    Description,
    Duties,
    Requirements,
    RequiredSkills,
    Location,
    Modality,
    ContractType,
    Schedule,
    SalaryMin,
    SalaryMax,
    PublishedAt,
    ClosesOn,
    Active,
}

#[derive(Iden)]
enum Companies {
    Table,
    Id,
}
