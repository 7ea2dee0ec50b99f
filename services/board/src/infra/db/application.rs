use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder, TransactionError, TransactionTrait,
};

use jobboard_board_schema::{applications, status_history};
use jobboard_core::sea_ext::{LockForUpdate as _, is_unique_violation};
use jobboard_domain::status::{Actor, ApplicationStatus};

use super::mapping::{application_from_model, encode, history_from_model};
use crate::domain::repository::ApplicationRepository;
use crate::domain::types::{
    Application, CREATION_NOTE, HistoryEntry, NewApplication, StatusChange, StatusTransition,
};
use crate::error::BoardError;

#[derive(Clone)]
pub struct DbApplicationRepository {
    pub db: DatabaseConnection,
}

impl ApplicationRepository for DbApplicationRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Application>, BoardError> {
        let model = applications::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find application by id")?;
        model.map(application_from_model).transpose()
    }

    async fn find_by_user_and_offer(
        &self,
        user_id: i32,
        offer_id: i32,
    ) -> Result<Option<Application>, BoardError> {
        let model = applications::Entity::find()
            .filter(applications::Column::UserId.eq(user_id))
            .filter(applications::Column::OfferId.eq(offer_id))
            .one(&self.db)
            .await
            .context("find application by user and offer")?;
        model.map(application_from_model).transpose()
    }

    async fn create_with_history(
        &self,
        application: &NewApplication,
    ) -> Result<Option<Application>, BoardError> {
        let tags = encode(&application.tags, "tags")?;
        let result = self
            .db
            .transaction::<_, applications::Model, DbErr>(|txn| {
                let new = application.clone();
                Box::pin(async move {
                    let model = applications::ActiveModel {
                        user_id: Set(new.user_id),
                        offer_id: Set(new.offer_id),
                        company_name: Set(new.company_name),
                        position: Set(new.position),
                        description: Set(new.description),
                        status: Set(ApplicationStatus::Registered.as_str().to_owned()),
                        salary: Set(new.salary),
                        location: Set(new.location),
                        tags: Set(Some(tags)),
                        created_at: Set(new.created_at),
                        updated_at: Set(new.created_at),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    status_history::ActiveModel {
                        application_id: Set(model.id),
                        previous_status: Set(None),
                        new_status: Set(ApplicationStatus::Registered.as_str().to_owned()),
                        actor: Set(Actor::Seeker.as_str().to_owned()),
                        note: Set(Some(CREATION_NOTE.to_owned())),
                        changed_at: Set(new.created_at),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;
                    Ok(model)
                })
            })
            .await;

        match result {
            Ok(model) => Ok(Some(application_from_model(model)?)),
            Err(TransactionError::Transaction(err)) if is_unique_violation(&err) => Ok(None),
            Err(err) => Err(anyhow::Error::new(err)
                .context("create application with history")
                .into()),
        }
    }

    async fn change_status(
        &self,
        id: i32,
        change: &StatusChange,
    ) -> Result<Option<StatusTransition>, BoardError> {
        let rows = self
            .db
            .transaction::<_, Option<(applications::Model, status_history::Model)>, DbErr>(
                |txn| {
                    let change = change.clone();
                    Box::pin(async move {
                        // The previous status must come from the locked row, not an
                        // earlier read, so concurrent changes chain correctly.
                        let Some(current) = applications::Entity::find_by_id(id)
                            .lock_for_update(txn)
                            .one(txn)
                            .await?
                        else {
                            return Ok(None);
                        };
                        let previous = current.status.clone();
                        // A writer that waited on the lock may carry an older stamp.
                        let changed_at = change.changed_at.max(current.updated_at);

                        let mut active = current.into_active_model();
                        active.status = Set(change.status.as_str().to_owned());
                        active.updated_at = Set(changed_at);
                        let application = active.update(txn).await?;

                        let entry = status_history::ActiveModel {
                            application_id: Set(id),
                            previous_status: Set(Some(previous)),
                            new_status: Set(change.status.as_str().to_owned()),
                            actor: Set(change.actor.as_str().to_owned()),
                            note: Set(change.note),
                            changed_at: Set(changed_at),
                            ..Default::default()
                        }
                        .insert(txn)
                        .await?;
                        Ok(Some((application, entry)))
                    })
                },
            )
            .await
            .context("change application status")?;

        let Some((application, entry)) = rows else {
            return Ok(None);
        };
        Ok(Some(StatusTransition {
            application: application_from_model(application)?,
            entry: history_from_model(entry)?,
        }))
    }

    async fn history(&self, application_id: i32) -> Result<Vec<HistoryEntry>, BoardError> {
        let models = status_history::Entity::find()
            .filter(status_history::Column::ApplicationId.eq(application_id))
            .order_by_desc(status_history::Column::Id)
            .all(&self.db)
            .await
            .context("list status history")?;
        models.into_iter().map(history_from_model).collect()
    }
}
