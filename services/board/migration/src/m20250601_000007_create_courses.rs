use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::CompanyId).integer().not_null())
                    .col(ColumnDef::new(Courses::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Courses::Description).text().not_null())
                    .col(ColumnDef::new(Courses::Objectives).text())
                    .col(ColumnDef::new(Courses::Syllabus).text())
                    .col(ColumnDef::new(Courses::DurationHours).integer().not_null())
                    .col(ColumnDef::new(Courses::Difficulty).string_len(16).not_null())
                    .col(ColumnDef::new(Courses::ContentFormats).text())
                    .col(
                        ColumnDef::new(Courses::Visibility)
                            .string_len(16)
                            .not_null()
                            .default("public"),
                    )
                    .col(ColumnDef::new(Courses::OfferId).integer())
                    .col(
                        ColumnDef::new(Courses::PublishedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Courses::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::OfferId)
                            .to(Offers::Table, Offers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    CompanyId,
    Title,
    Description,
    Objectives,
    Syllabus,
    DurationHours,
    Difficulty,
    ContentFormats,
    Visibility,
    OfferId,
    PublishedAt,
    Active,
}

#[derive(Iden)]
enum Companies {
    Table,
    Id,
}

#[derive(Iden)]
enum Offers {
    Table,
    Id,
}
