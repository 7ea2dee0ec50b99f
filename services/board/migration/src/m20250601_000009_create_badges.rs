use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Badges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Badges::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Badges::UserId).integer().not_null())
                    .col(ColumnDef::new(Badges::CourseId).integer().not_null())
                    .col(ColumnDef::new(Badges::Name).string().not_null())
                    .col(ColumnDef::new(Badges::Description).text())
                    .col(
                        ColumnDef::new(Badges::VerificationCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Badges::ImageUrl).string())
                    .col(
                        ColumnDef::new(Badges::ObtainedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Badges::Table, Badges::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Badges::Table, Badges::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Badges::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Badges {
    Table,
    Id,
    UserId,
    CourseId,
    Name,
    Description,
    VerificationCode,
    ImageUrl,
    ObtainedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
}
