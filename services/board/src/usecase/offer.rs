use chrono::{NaiveDate, Utc};
use tracing::info;

use jobboard_domain::codec::clean_list;

use crate::domain::repository::{CatalogRepository, CompanyRepository, OfferRepository};
use crate::domain::types::{NewOffer, Offer, OfferDetail};
use crate::domain::validate;
use crate::error::BoardError;

// ── CreateOffer ──────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct CreateOfferInput {
    pub company_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duties: Option<String>,
    pub requirements: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub location: Option<String>,
    pub modality: Option<String>,
    pub contract_type: Option<String>,
    pub schedule: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub closes_on: Option<NaiveDate>,
}

pub struct CreateOfferUseCase<C, O>
where
    C: CompanyRepository,
    O: OfferRepository,
{
    pub companies: C,
    pub offers: O,
}

impl<C, O> CreateOfferUseCase<C, O>
where
    C: CompanyRepository,
    O: OfferRepository,
{
    pub async fn execute(&self, input: CreateOfferInput) -> Result<Offer, BoardError> {
        let company_id = input
            .company_id
            .ok_or_else(|| BoardError::validation("company_id is required"))?;
        self.companies
            .find_by_id(company_id)
            .await?
            .ok_or(BoardError::CompanyNotFound)?;

        let new = NewOffer {
            company_id,
            title: validate::required("title", input.title, 200)?,
            description: validate::required("description", input.description, 10_000)?,
            duties: validate::optional(input.duties),
            requirements: validate::optional(input.requirements),
            required_skills: clean_list(input.required_skills.unwrap_or_default()),
            location: validate::optional(input.location),
            modality: validate::modality(input.modality)?,
            contract_type: validate::optional(input.contract_type),
            schedule: validate::optional(input.schedule),
            salary: validate::salary(input.salary_min, input.salary_max)?,
            published_at: Utc::now(),
            closes_on: input.closes_on,
        };
        let offer = self.offers.create(&new).await?;
        info!(offer_id = offer.id, company_id, "offer published");
        Ok(offer)
    }
}

// ── GetOffer ─────────────────────────────────────────────────────────────────

pub struct GetOfferUseCase<K: CatalogRepository> {
    pub catalog: K,
}

impl<K: CatalogRepository> GetOfferUseCase<K> {
    /// Only active offers are visible.
    pub async fn execute(&self, offer_id: i32) -> Result<OfferDetail, BoardError> {
        self.catalog
            .offer_detail(offer_id)
            .await?
            .ok_or(BoardError::OfferNotFound)
    }
}

// ── UpdateOffer ──────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct OfferPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duties: Option<String>,
    pub requirements: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub location: Option<String>,
    pub modality: Option<String>,
    pub contract_type: Option<String>,
    pub schedule: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub closes_on: Option<NaiveDate>,
}

impl OfferPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.duties.is_none()
            && self.requirements.is_none()
            && self.required_skills.is_none()
            && self.location.is_none()
            && self.modality.is_none()
            && self.contract_type.is_none()
            && self.schedule.is_none()
            && self.salary_min.is_none()
            && self.salary_max.is_none()
            && self.closes_on.is_none()
    }
}

pub struct UpdateOfferUseCase<O: OfferRepository> {
    pub offers: O,
}

impl<O: OfferRepository> UpdateOfferUseCase<O> {
    /// Apply the fields present in `patch`; absent fields keep their value.
    pub async fn execute(&self, offer_id: i32, patch: OfferPatch) -> Result<Offer, BoardError> {
        if patch.is_empty() {
            return Err(BoardError::MissingData);
        }
        let mut offer = self
            .offers
            .find_by_id(offer_id)
            .await?
            .ok_or(BoardError::OfferNotFound)?;

        if patch.title.is_some() {
            offer.title = validate::required("title", patch.title, 200)?;
        }
        if patch.description.is_some() {
            offer.description = validate::required("description", patch.description, 10_000)?;
        }
        if patch.duties.is_some() {
            offer.duties = validate::optional(patch.duties);
        }
        if patch.requirements.is_some() {
            offer.requirements = validate::optional(patch.requirements);
        }
        if let Some(skills) = patch.required_skills {
            offer.required_skills = clean_list(skills);
        }
        if patch.location.is_some() {
            offer.location = validate::optional(patch.location);
        }
        if patch.modality.is_some() {
            offer.modality = validate::modality(patch.modality)?;
        }
        if patch.contract_type.is_some() {
            offer.contract_type = validate::optional(patch.contract_type);
        }
        if patch.schedule.is_some() {
            offer.schedule = validate::optional(patch.schedule);
        }
        if patch.closes_on.is_some() {
            offer.closes_on = patch.closes_on;
        }
        offer.salary = validate::salary(
            patch.salary_min.or(offer.salary.min),
            patch.salary_max.or(offer.salary.max),
        )?;

        let offer = self.offers.update(&offer).await?;
        info!(offer_id, "offer updated");
        Ok(offer)
    }
}

// ── DeactivateOffer ──────────────────────────────────────────────────────────

pub struct DeactivateOfferUseCase<O: OfferRepository> {
    pub offers: O,
}

impl<O: OfferRepository> DeactivateOfferUseCase<O> {
    pub async fn execute(&self, offer_id: i32) -> Result<(), BoardError> {
        if !self.offers.deactivate(offer_id).await? {
            return Err(BoardError::OfferNotFound);
        }
        info!(offer_id, "offer deactivated");
        Ok(())
    }
}
