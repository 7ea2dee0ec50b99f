use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Offers::Table)
                    .col(Offers::Active)
                    .col((Offers::PublishedAt, IndexOrder::Desc))
                    .name("idx_offers_active_published_at")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(StatusHistory::Table)
                    .col(StatusHistory::ApplicationId)
                    .name("idx_status_history_application_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Applications::Table)
                    .col(Applications::UserId)
                    .col((Applications::CreatedAt, IndexOrder::Desc))
                    .name("idx_applications_user_id_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_applications_user_id_created_at")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_status_history_application_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_offers_active_published_at").to_owned())
            .await
    }
}

#[derive(Iden)]
enum Offers {
    Table,
    Active,
    PublishedAt,
}

#[derive(Iden)]
enum StatusHistory {
    Table,
    ApplicationId,
}

#[derive(Iden)]
enum Applications {
    Table,
    UserId,
    CreatedAt,
}
