use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, sea_query::OnConflict,
};

use jobboard_board_schema::{companies, seeker_profiles, users};
use jobboard_core::sea_ext::is_unique_violation;

use super::mapping::{company_from_model, encode, profile_from_model, user_from_model};
use crate::domain::repository::{CompanyRepository, ProfileRepository, UserRepository};
use crate::domain::types::{
    Company, Credentials, NewCompany, NewUser, ProfileFields, SeekerProfile, User,
};
use crate::error::BoardError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, BoardError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>, BoardError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        let Some(model) = model else {
            return Ok(None);
        };
        let password = model.password.clone();
        Ok(Some(Credentials {
            user: user_from_model(model)?,
            password,
        }))
    }

    async fn create(&self, user: &NewUser) -> Result<Option<User>, BoardError> {
        let result = users::ActiveModel {
            email: Set(user.email.clone()),
            password: Set(user.password.clone()),
            name: Set(user.name.clone()),
            role: Set(user.role.as_str().to_owned()),
            active: Set(true),
            created_at: Set(user.created_at),
            updated_at: Set(user.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(Some(user_from_model(model)?)),
            Err(err) if is_unique_violation(&err) => Ok(None),
            Err(err) => Err(anyhow::Error::new(err).context("create user").into()),
        }
    }
}

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_user(&self, user_id: i32) -> Result<Option<SeekerProfile>, BoardError> {
        let model = seeker_profiles::Entity::find()
            .filter(seeker_profiles::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find seeker profile")?;
        Ok(model.map(profile_from_model))
    }

    async fn upsert(
        &self,
        user_id: i32,
        fields: &ProfileFields,
    ) -> Result<SeekerProfile, BoardError> {
        let profile = seeker_profiles::ActiveModel {
            user_id: Set(user_id),
            gender_identity: Set(fields.gender_identity.clone()),
            disability: Set(fields.disability.clone()),
            education: Set(fields.education.clone()),
            experience: Set(fields.experience.clone()),
            skills: Set(Some(encode(&fields.skills, "skills")?)),
            birth_date: Set(fields.birth_date),
            phone: Set(fields.phone.clone()),
            location: Set(fields.location.clone()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        seeker_profiles::Entity::insert(profile)
            .on_conflict(
                OnConflict::column(seeker_profiles::Column::UserId)
                    .update_columns([
                        seeker_profiles::Column::GenderIdentity,
                        seeker_profiles::Column::Disability,
                        seeker_profiles::Column::Education,
                        seeker_profiles::Column::Experience,
                        seeker_profiles::Column::Skills,
                        seeker_profiles::Column::BirthDate,
                        seeker_profiles::Column::Phone,
                        seeker_profiles::Column::Location,
                        seeker_profiles::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert seeker profile")?;

        self.find_by_user(user_id)
            .await?
            .context("seeker profile missing after upsert")
            .map_err(BoardError::from)
    }
}

// ── Company repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCompanyRepository {
    pub db: DatabaseConnection,
}

impl CompanyRepository for DbCompanyRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Company>, BoardError> {
        let model = companies::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find company by id")?;
        Ok(model.map(company_from_model))
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Option<Company>, BoardError> {
        let model = companies::Entity::find()
            .filter(companies::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find company by user")?;
        Ok(model.map(company_from_model))
    }

    async fn find_by_tax_id(&self, tax_id: &str) -> Result<Option<Company>, BoardError> {
        let model = companies::Entity::find()
            .filter(companies::Column::TaxId.eq(tax_id))
            .one(&self.db)
            .await
            .context("find company by tax id")?;
        Ok(model.map(company_from_model))
    }

    async fn create(&self, company: &NewCompany) -> Result<Option<Company>, BoardError> {
        let result = companies::ActiveModel {
            user_id: Set(company.user_id),
            legal_name: Set(company.legal_name.clone()),
            tax_id: Set(company.tax_id.clone()),
            sector: Set(company.sector.clone()),
            address: Set(company.address.clone()),
            phone: Set(company.phone.clone()),
            website: Set(company.website.clone()),
            social_links: Set(Some(encode(&company.social_links, "social_links")?)),
            economic_activity: Set(company.economic_activity.clone()),
            size: Set(company.size.clone()),
            verified: Set(false),
            verified_at: Set(None),
            created_at: Set(company.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(Some(company_from_model(model))),
            Err(err) if is_unique_violation(&err) => Ok(None),
            Err(err) => Err(anyhow::Error::new(err).context("create company").into()),
        }
    }
}
