use std::collections::HashMap;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, sea_query::Expr,
};

use jobboard_board_schema::{
    applications, badges, companies, courses, enrollments, offers, status_history, users,
};
use jobboard_domain::catalog::{Modality, Visibility};
use jobboard_domain::listing::Limit;

use super::mapping::{
    application_from_model, badge_from_model, brief_from_model, company_from_model,
    course_from_model, enrollment_from_model, history_from_model, joined, offer_brief_from_model,
    offer_from_model, parse_modality, parse_status,
};
use super::offer::listing_from_models;
use crate::domain::repository::CatalogRepository;
use crate::domain::types::{
    Applicant, ApplicationSummary, ApplicationWithHistory, Badge, CompanyApplication,
    CompanyOffer, Course, CourseCard, CourseDetail, EnrollmentView, HistoryEntry, OfferDetail,
    OfferListing, ProfileApplication, UserCourse, split_name,
};
use crate::error::BoardError;

#[derive(Debug, FromQueryResult)]
struct ApplicantCountRow {
    offer_id: i32,
    applicants: i64,
}

#[derive(Debug, FromQueryResult)]
struct CompanyApplicationRow {
    id: i32,
    user_id: i32,
    user_name: String,
    user_email: String,
    offer_id: i32,
    offer_title: String,
    modality: String,
    contract_type: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromQueryResult)]
struct ApplicantRow {
    application_id: i32,
    user_id: i32,
    user_name: String,
    user_email: String,
    offer_id: i32,
    offer_title: String,
    status: String,
    applied_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct DbCatalogRepository {
    pub db: DatabaseConnection,
}

impl DbCatalogRepository {
    async fn applicant_counts(&self, offer_ids: Vec<i32>) -> Result<HashMap<i32, u64>, BoardError> {
        if offer_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = applications::Entity::find()
            .select_only()
            .column(applications::Column::OfferId)
            .column_as(Expr::col(applications::Column::Id).count(), "applicants")
            .filter(applications::Column::OfferId.is_in(offer_ids))
            .group_by(applications::Column::OfferId)
            .into_model::<ApplicantCountRow>()
            .all(&self.db)
            .await
            .context("count applicants per offer")?;
        Ok(rows
            .into_iter()
            .map(|row| (row.offer_id, row.applicants.max(0) as u64))
            .collect())
    }

    /// History of every listed application, grouped by application, newest first.
    async fn histories(
        &self,
        application_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<HistoryEntry>>, BoardError> {
        if application_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let models = status_history::Entity::find()
            .filter(status_history::Column::ApplicationId.is_in(application_ids))
            .order_by_desc(status_history::Column::Id)
            .all(&self.db)
            .await
            .context("list status history of applications")?;
        let mut grouped: HashMap<i32, Vec<HistoryEntry>> = HashMap::new();
        for model in models {
            let entry = history_from_model(model)?;
            grouped.entry(entry.application_id).or_default().push(entry);
        }
        Ok(grouped)
    }
}

impl CatalogRepository for DbCatalogRepository {
    async fn active_offers(&self, limit: Limit) -> Result<Vec<OfferListing>, BoardError> {
        let rows = offers::Entity::find()
            .filter(offers::Column::Active.eq(true))
            .order_by_desc(offers::Column::PublishedAt)
            .order_by_desc(offers::Column::Id)
            .find_also_related(companies::Entity)
            .limit(limit.as_option())
            .all(&self.db)
            .await
            .context("list active offers")?;
        rows.into_iter()
            .map(|(offer, company)| listing_from_models(offer, company))
            .collect()
    }

    async fn offer_detail(&self, id: i32) -> Result<Option<OfferDetail>, BoardError> {
        let row = offers::Entity::find_by_id(id)
            .filter(offers::Column::Active.eq(true))
            .find_also_related(companies::Entity)
            .one(&self.db)
            .await
            .context("find offer detail")?;
        let Some((offer, company)) = row else {
            return Ok(None);
        };
        let company = joined(company, "company", offer.id)?;
        Ok(Some(OfferDetail {
            offer: offer_from_model(offer)?,
            company: company_from_model(company),
        }))
    }

    async fn company_offers(&self, company_id: i32) -> Result<Vec<CompanyOffer>, BoardError> {
        let models = offers::Entity::find()
            .filter(offers::Column::CompanyId.eq(company_id))
            .order_by_desc(offers::Column::PublishedAt)
            .order_by_desc(offers::Column::Id)
            .all(&self.db)
            .await
            .context("list company offers")?;
        let counts = self
            .applicant_counts(models.iter().map(|m| m.id).collect())
            .await?;
        models
            .into_iter()
            .map(|model| {
                let applicant_count = counts.get(&model.id).copied().unwrap_or(0);
                Ok(CompanyOffer {
                    offer: offer_from_model(model)?,
                    applicant_count,
                })
            })
            .collect()
    }

    async fn company_courses(&self, company_id: i32) -> Result<Vec<Course>, BoardError> {
        let models = courses::Entity::find()
            .filter(courses::Column::CompanyId.eq(company_id))
            .order_by_desc(courses::Column::PublishedAt)
            .order_by_desc(courses::Column::Id)
            .all(&self.db)
            .await
            .context("list company courses")?;
        models.into_iter().map(course_from_model).collect()
    }

    async fn user_applications(
        &self,
        user_id: i32,
    ) -> Result<Vec<ApplicationWithHistory>, BoardError> {
        let models = applications::Entity::find()
            .filter(applications::Column::UserId.eq(user_id))
            .order_by_desc(applications::Column::CreatedAt)
            .order_by_desc(applications::Column::Id)
            .all(&self.db)
            .await
            .context("list user applications")?;
        let mut histories = self.histories(models.iter().map(|m| m.id).collect()).await?;
        models
            .into_iter()
            .map(|model| {
                let history = histories.remove(&model.id).unwrap_or_default();
                Ok(ApplicationWithHistory {
                    application: application_from_model(model)?,
                    history,
                })
            })
            .collect()
    }

    async fn user_application_summaries(
        &self,
        user_id: i32,
    ) -> Result<Vec<ApplicationSummary>, BoardError> {
        let rows = applications::Entity::find()
            .filter(applications::Column::UserId.eq(user_id))
            .order_by_desc(applications::Column::CreatedAt)
            .order_by_desc(applications::Column::Id)
            .find_also_related(offers::Entity)
            .all(&self.db)
            .await
            .context("list user application summaries")?;
        rows.into_iter()
            .map(|(application, offer)| {
                Ok(ApplicationSummary {
                    offer_title: offer
                        .map(|o| o.title)
                        .unwrap_or_else(|| application.position.clone()),
                    status: parse_status(&application.status)?,
                    id: application.id,
                    offer_id: application.offer_id,
                    company_name: application.company_name,
                    created_at: application.created_at,
                    updated_at: application.updated_at,
                })
            })
            .collect()
    }

    async fn company_applications(
        &self,
        company_id: i32,
    ) -> Result<Vec<CompanyApplication>, BoardError> {
        let rows = applications::Entity::find()
            .select_only()
            .column(applications::Column::Id)
            .column(applications::Column::UserId)
            .column_as(users::Column::Name, "user_name")
            .column_as(users::Column::Email, "user_email")
            .column(applications::Column::OfferId)
            .column_as(offers::Column::Title, "offer_title")
            .column(offers::Column::Modality)
            .column(offers::Column::ContractType)
            .column(applications::Column::Status)
            .column(applications::Column::CreatedAt)
            .join(JoinType::InnerJoin, applications::Relation::User.def())
            .join(JoinType::InnerJoin, applications::Relation::Offer.def())
            .filter(offers::Column::CompanyId.eq(company_id))
            .order_by_desc(applications::Column::CreatedAt)
            .order_by_desc(applications::Column::Id)
            .into_model::<CompanyApplicationRow>()
            .all(&self.db)
            .await
            .context("list company applications")?;
        rows.into_iter()
            .map(|row| {
                Ok(CompanyApplication {
                    modality: parse_modality(&row.modality)?,
                    status: parse_status(&row.status)?,
                    id: row.id,
                    user_id: row.user_id,
                    user_name: row.user_name,
                    user_email: row.user_email,
                    offer_id: row.offer_id,
                    offer_title: row.offer_title,
                    contract_type: row.contract_type,
                    created_at: row.created_at,
                })
            })
            .collect()
    }

    async fn company_applicants(
        &self,
        company_id: i32,
        limit: Limit,
    ) -> Result<Vec<Applicant>, BoardError> {
        let rows = applications::Entity::find()
            .select_only()
            .column_as(applications::Column::Id, "application_id")
            .column(applications::Column::UserId)
            .column_as(users::Column::Name, "user_name")
            .column_as(users::Column::Email, "user_email")
            .column(applications::Column::OfferId)
            .column_as(offers::Column::Title, "offer_title")
            .column(applications::Column::Status)
            .column_as(applications::Column::CreatedAt, "applied_at")
            .join(JoinType::InnerJoin, applications::Relation::User.def())
            .join(JoinType::InnerJoin, applications::Relation::Offer.def())
            .filter(offers::Column::CompanyId.eq(company_id))
            .order_by_desc(applications::Column::CreatedAt)
            .order_by_desc(applications::Column::Id)
            .limit(limit.as_option())
            .into_model::<ApplicantRow>()
            .all(&self.db)
            .await
            .context("list company applicants")?;
        rows.into_iter()
            .map(|row| {
                let (first_name, last_name) = split_name(&row.user_name);
                Ok(Applicant {
                    status: parse_status(&row.status)?,
                    application_id: row.application_id,
                    user_id: row.user_id,
                    first_name,
                    last_name,
                    email: row.user_email,
                    offer_id: row.offer_id,
                    offer_title: row.offer_title,
                    applied_at: row.applied_at,
                })
            })
            .collect()
    }

    async fn public_courses(&self) -> Result<Vec<CourseCard>, BoardError> {
        let rows = courses::Entity::find()
            .filter(courses::Column::Active.eq(true))
            .filter(courses::Column::Visibility.eq(Visibility::Public.as_str()))
            .order_by_desc(courses::Column::PublishedAt)
            .order_by_desc(courses::Column::Id)
            .find_also_related(companies::Entity)
            .all(&self.db)
            .await
            .context("list public courses")?;
        rows.into_iter()
            .map(|(course, company)| {
                let company = joined(company, "company", course.id)?;
                Ok(CourseCard {
                    company: brief_from_model(&company),
                    course: course_from_model(course)?,
                })
            })
            .collect()
    }

    async fn course_detail(&self, id: i32) -> Result<Option<CourseDetail>, BoardError> {
        let row = courses::Entity::find_by_id(id)
            .filter(courses::Column::Active.eq(true))
            .find_also_related(companies::Entity)
            .one(&self.db)
            .await
            .context("find course detail")?;
        let Some((course, company)) = row else {
            return Ok(None);
        };
        let company = joined(company, "company", course.id)?;
        let offer = match course.offer_id {
            Some(offer_id) => offers::Entity::find_by_id(offer_id)
                .one(&self.db)
                .await
                .context("find course offer")?
                .map(offer_brief_from_model)
                .transpose()?,
            None => None,
        };
        Ok(Some(CourseDetail {
            company: brief_from_model(&company),
            course: course_from_model(course)?,
            offer,
        }))
    }

    async fn user_courses(&self, user_id: i32) -> Result<Vec<UserCourse>, BoardError> {
        let rows = enrollments::Entity::find()
            .filter(enrollments::Column::UserId.eq(user_id))
            .order_by_desc(enrollments::Column::EnrolledAt)
            .order_by_desc(enrollments::Column::Id)
            .find_also_related(courses::Entity)
            .filter(courses::Column::Active.eq(true))
            .all(&self.db)
            .await
            .context("list user courses")?;
        rows.into_iter()
            .map(|(enrollment, course)| {
                let course = joined(course, "course", enrollment.id)?;
                Ok(UserCourse {
                    course: course_from_model(course)?,
                    enrollment: enrollment_from_model(enrollment)?,
                })
            })
            .collect()
    }

    async fn user_badges(&self, user_id: i32) -> Result<Vec<Badge>, BoardError> {
        let models = badges::Entity::find()
            .filter(badges::Column::UserId.eq(user_id))
            .order_by_desc(badges::Column::ObtainedAt)
            .order_by_desc(badges::Column::Id)
            .all(&self.db)
            .await
            .context("list user badges")?;
        Ok(models.into_iter().map(badge_from_model).collect())
    }

    async fn user_enrollments(&self, user_id: i32) -> Result<Vec<EnrollmentView>, BoardError> {
        let rows = enrollments::Entity::find()
            .filter(enrollments::Column::UserId.eq(user_id))
            .order_by_desc(enrollments::Column::EnrolledAt)
            .order_by_desc(enrollments::Column::Id)
            .find_also_related(courses::Entity)
            .all(&self.db)
            .await
            .context("list user enrollments")?;
        rows.into_iter()
            .map(|(enrollment, course)| {
                Ok(EnrollmentView {
                    course_title: course.map(|c| c.title).unwrap_or_default(),
                    enrollment: enrollment_from_model(enrollment)?,
                })
            })
            .collect()
    }

    async fn user_profile_applications(
        &self,
        user_id: i32,
    ) -> Result<Vec<ProfileApplication>, BoardError> {
        let rows = applications::Entity::find()
            .filter(applications::Column::UserId.eq(user_id))
            .order_by_desc(applications::Column::CreatedAt)
            .order_by_desc(applications::Column::Id)
            .find_also_related(offers::Entity)
            .all(&self.db)
            .await
            .context("list profile applications")?;
        rows.into_iter()
            .map(|(application, offer)| {
                let (offer_title, offer_modality) = match offer {
                    Some(offer) => (offer.title, Modality::parse(&offer.modality)),
                    None => (application.position.clone(), None),
                };
                Ok(ProfileApplication {
                    application: application_from_model(application)?,
                    offer_title,
                    offer_modality,
                })
            })
            .collect()
    }
}
