use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assessments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assessments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assessments::CourseId).integer().not_null())
                    .col(ColumnDef::new(Assessments::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Assessments::Description).text())
                    .col(ColumnDef::new(Assessments::Questions).text())
                    .col(
                        ColumnDef::new(Assessments::MinScore)
                            .double()
                            .not_null()
                            .default(60.0),
                    )
                    .col(
                        ColumnDef::new(Assessments::MaxAttempts)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Assessments::Required)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Assessments::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Assessments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assessments::Table, Assessments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assessments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Assessments {
    Table,
    Id,
    CourseId,
    Title,
    Description,
    Questions,
    MinScore,
    MaxAttempts,
    Required,
    Active,
    CreatedAt,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
}
