use anyhow::anyhow;
use chrono::Utc;
use tracing::{debug, info};

use crate::domain::repository::{ApplicationRepository, OfferRepository, UserRepository};
use crate::domain::types::{
    Application, ApplicationWithHistory, Created, NewApplication, StatusChange,
};
use crate::domain::validate;
use crate::error::BoardError;

// ── CreateApplication ────────────────────────────────────────────────────────

pub struct CreateApplicationUseCase<U, O, A>
where
    U: UserRepository,
    O: OfferRepository,
    A: ApplicationRepository,
{
    pub users: U,
    pub offers: O,
    pub applications: A,
}

impl<U, O, A> CreateApplicationUseCase<U, O, A>
where
    U: UserRepository,
    O: OfferRepository,
    A: ApplicationRepository,
{
    /// Apply `user_id` to `offer_id`. Applying twice returns the first
    /// application with `created = false`.
    pub async fn execute(
        &self,
        user_id: Option<i32>,
        offer_id: Option<i32>,
    ) -> Result<Created<Application>, BoardError> {
        let user_id = user_id.ok_or_else(|| BoardError::validation("user_id is required"))?;
        let offer_id = offer_id.ok_or_else(|| BoardError::validation("offer_id is required"))?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(BoardError::UserNotFound)?;
        if !user.role.is_seeker() {
            return Err(BoardError::Forbidden);
        }
        let listing = self
            .offers
            .find_active(offer_id)
            .await?
            .ok_or(BoardError::OfferNotFound)?;

        if let Some(existing) = self
            .applications
            .find_by_user_and_offer(user_id, offer_id)
            .await?
        {
            debug!(application_id = existing.id, user_id, offer_id, "already applied");
            return Ok(Created {
                record: existing,
                created: false,
            });
        }

        let new = NewApplication::snapshot(user_id, &listing, Utc::now());
        match self.applications.create_with_history(&new).await? {
            Some(application) => {
                info!(application_id = application.id, user_id, offer_id, "application created");
                Ok(Created {
                    record: application,
                    created: true,
                })
            }
            // A concurrent request inserted the same pair between our check and insert.
            None => {
                let existing = self
                    .applications
                    .find_by_user_and_offer(user_id, offer_id)
                    .await?
                    .ok_or_else(|| anyhow!("application {user_id}/{offer_id} missing after conflict"))?;
                debug!(application_id = existing.id, user_id, offer_id, "lost insert race");
                Ok(Created {
                    record: existing,
                    created: false,
                })
            }
        }
    }
}

// ── ChangeStatus ─────────────────────────────────────────────────────────────

pub struct ChangeStatusInput {
    pub status: Option<String>,
    pub actor: Option<String>,
    pub note: Option<String>,
}

pub struct ChangeStatusUseCase<A: ApplicationRepository> {
    pub applications: A,
}

impl<A: ApplicationRepository> ChangeStatusUseCase<A> {
    /// Any status may follow any other, including itself.
    pub async fn execute(
        &self,
        application_id: i32,
        input: ChangeStatusInput,
    ) -> Result<Application, BoardError> {
        self.applications
            .find_by_id(application_id)
            .await?
            .ok_or(BoardError::ApplicationNotFound)?;

        let change = StatusChange {
            status: validate::status(input.status)?,
            actor: validate::actor(input.actor)?,
            note: validate::optional(input.note),
            changed_at: Utc::now(),
        };
        let transition = self
            .applications
            .change_status(application_id, &change)
            .await?
            .ok_or(BoardError::ApplicationNotFound)?;

        info!(
            application_id,
            from = transition.entry.previous_status.map(|s| s.as_str()),
            to = %transition.entry.new_status,
            actor = %transition.entry.actor,
            "application status changed"
        );
        Ok(transition.application)
    }
}

// ── GetApplication ───────────────────────────────────────────────────────────

pub struct GetApplicationUseCase<A: ApplicationRepository> {
    pub applications: A,
}

impl<A: ApplicationRepository> GetApplicationUseCase<A> {
    pub async fn execute(&self, application_id: i32) -> Result<ApplicationWithHistory, BoardError> {
        let application = self
            .applications
            .find_by_id(application_id)
            .await?
            .ok_or(BoardError::ApplicationNotFound)?;
        let history = self.applications.history(application_id).await?;
        Ok(ApplicationWithHistory {
            application,
            history,
        })
    }
}
