use std::collections::BTreeMap;

use chrono::Utc;
use tracing::info;

use crate::domain::repository::{CompanyRepository, UserRepository};
use crate::domain::types::{Company, NewCompany};
use crate::domain::validate;
use crate::error::BoardError;

// ── RegisterCompany ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct RegisterCompanyInput {
    pub user_id: Option<i32>,
    pub legal_name: Option<String>,
    pub tax_id: Option<String>,
    pub sector: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub social_links: Option<BTreeMap<String, String>>,
    pub economic_activity: Option<String>,
    pub size: Option<String>,
}

pub struct RegisterCompanyUseCase<U, C>
where
    U: UserRepository,
    C: CompanyRepository,
{
    pub users: U,
    pub companies: C,
}

impl<U, C> RegisterCompanyUseCase<U, C>
where
    U: UserRepository,
    C: CompanyRepository,
{
    pub async fn execute(&self, input: RegisterCompanyInput) -> Result<Company, BoardError> {
        let user_id = input
            .user_id
            .ok_or_else(|| BoardError::validation("user_id is required"))?;
        let legal_name = validate::required("legal_name", input.legal_name, 200)?;
        let tax_id = validate::required("tax_id", input.tax_id, 20)?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(BoardError::UserNotFound)?;
        if user.role.is_seeker() {
            return Err(BoardError::Forbidden);
        }
        if self.companies.find_by_user(user_id).await?.is_some() {
            return Err(BoardError::CompanyExists);
        }
        if self.companies.find_by_tax_id(&tax_id).await?.is_some() {
            return Err(BoardError::TaxIdTaken);
        }

        let social_links = input
            .social_links
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(k, v)| {
                let (k, v) = (k.trim().to_owned(), v.trim().to_owned());
                (!k.is_empty() && !v.is_empty()).then_some((k, v))
            })
            .collect();
        let new = NewCompany {
            user_id,
            legal_name,
            tax_id,
            sector: validate::optional(input.sector),
            address: validate::optional(input.address),
            phone: validate::optional(input.phone),
            website: validate::optional(input.website),
            social_links,
            economic_activity: validate::optional(input.economic_activity),
            size: validate::optional(input.size),
            created_at: Utc::now(),
        };

        match self.companies.create(&new).await? {
            Some(company) => {
                info!(company_id = company.id, user_id, "company registered");
                Ok(company)
            }
            // Lost a race on one of the unique columns; report which.
            None if self.companies.find_by_user(user_id).await?.is_some() => {
                Err(BoardError::CompanyExists)
            }
            None => Err(BoardError::TaxIdTaken),
        }
    }
}
