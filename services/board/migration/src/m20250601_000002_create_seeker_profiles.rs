use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeekerProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SeekerProfiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SeekerProfiles::UserId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(SeekerProfiles::GenderIdentity).string())
                    .col(ColumnDef::new(SeekerProfiles::Disability).string())
                    .col(ColumnDef::new(SeekerProfiles::Education).text())
                    .col(ColumnDef::new(SeekerProfiles::Experience).text())
                    .col(ColumnDef::new(SeekerProfiles::Skills).text())
                    .col(ColumnDef::new(SeekerProfiles::BirthDate).date())
                    .col(ColumnDef::new(SeekerProfiles::Phone).string())
                    .col(ColumnDef::new(SeekerProfiles::Location).string())
                    .col(
                        ColumnDef::new(SeekerProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SeekerProfiles::Table, SeekerProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeekerProfiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SeekerProfiles {
    Table,
    Id,
    UserId,
    GenderIdentity,
    Disability,
    Education,
    Experience,
    Skills,
    BirthDate,
    Phone,
    Location,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
