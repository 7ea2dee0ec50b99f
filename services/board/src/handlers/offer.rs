use axum::{extract::State, http::StatusCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use jobboard_domain::listing::{Limit, Listing};

use crate::domain::types::OfferDetail;
use crate::error::BoardError;
use crate::handlers::extract::{Json, Path, Query};
use crate::handlers::application::{ApplyRequest, CreatedApplicationResponse};
use crate::handlers::company::LimitQuery;
use crate::handlers::response::{CompanyResponse, OfferListingResponse, OfferResponse};
use crate::state::AppState;
use crate::usecase::application::CreateApplicationUseCase;
use crate::usecase::catalog::{ListOffersUseCase, RecommendedOffersUseCase};
use crate::usecase::offer::{
    CreateOfferInput, CreateOfferUseCase, DeactivateOfferUseCase, GetOfferUseCase, OfferPatch,
    UpdateOfferUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct OfferDetailResponse {
    #[serde(flatten)]
    pub offer: OfferResponse,
    pub company: CompanyResponse,
}

impl From<OfferDetail> for OfferDetailResponse {
    fn from(d: OfferDetail) -> Self {
        Self {
            offer: d.offer.into(),
            company: d.company.into(),
        }
    }
}

// ── GET /api/offers ──────────────────────────────────────────────────────────

pub async fn list_offers(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Listing<OfferListingResponse>>, BoardError> {
    let usecase = ListOffersUseCase {
        catalog: state.catalog_repo(),
    };
    let offers = usecase.execute(Limit::from_query(query.limit)).await?;
    Ok(Json(offers.map(Into::into)))
}

// ── GET /api/offers/recommended ──────────────────────────────────────────────

pub async fn recommended_offers(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Listing<OfferListingResponse>>, BoardError> {
    let usecase = RecommendedOffersUseCase {
        catalog: state.catalog_repo(),
    };
    Ok(Json(usecase.execute(query.limit).await?.map(Into::into)))
}

// ── POST /api/offers ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateOfferRequest {
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

pub async fn create_offer(
    State(state): State<AppState>,
    Json(body): Json<CreateOfferRequest>,
) -> Result<(StatusCode, Json<OfferResponse>), BoardError> {
    let usecase = CreateOfferUseCase {
        companies: state.company_repo(),
        offers: state.offer_repo(),
    };
    let offer = usecase
        .execute(CreateOfferInput {
            company_id: body.company_id,
            title: body.title,
            description: body.description,
            duties: body.duties,
            requirements: body.requirements,
            required_skills: body.required_skills,
            location: body.location,
            modality: body.modality,
            contract_type: body.contract_type,
            schedule: body.schedule,
            salary_min: body.salary_min,
            salary_max: body.salary_max,
            closes_on: body.closes_on,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(offer.into())))
}

// ── GET /api/offers/{offer_id} ───────────────────────────────────────────────

pub async fn get_offer(
    State(state): State<AppState>,
    Path(offer_id): Path<i32>,
) -> Result<Json<OfferDetailResponse>, BoardError> {
    let usecase = GetOfferUseCase {
        catalog: state.catalog_repo(),
    };
    Ok(Json(usecase.execute(offer_id).await?.into()))
}

// ── PATCH /api/offers/{offer_id} ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateOfferRequest {
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

pub async fn update_offer(
    State(state): State<AppState>,
    Path(offer_id): Path<i32>,
    Json(body): Json<UpdateOfferRequest>,
) -> Result<Json<OfferResponse>, BoardError> {
    let usecase = UpdateOfferUseCase {
        offers: state.offer_repo(),
    };
    let offer = usecase
        .execute(
            offer_id,
            OfferPatch {
                title: body.title,
                description: body.description,
                duties: body.duties,
                requirements: body.requirements,
                required_skills: body.required_skills,
                location: body.location,
                modality: body.modality,
                contract_type: body.contract_type,
                schedule: body.schedule,
                salary_min: body.salary_min,
                salary_max: body.salary_max,
                closes_on: body.closes_on,
            },
        )
        .await?;
    Ok(Json(offer.into()))
}

// ── DELETE /api/offers/{offer_id} ────────────────────────────────────────────

pub async fn deactivate_offer(
    State(state): State<AppState>,
    Path(offer_id): Path<i32>,
) -> Result<StatusCode, BoardError> {
    let usecase = DeactivateOfferUseCase {
        offers: state.offer_repo(),
    };
    usecase.execute(offer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /api/offers/{offer_id}/apply ────────────────────────────────────────

pub async fn apply_to_offer(
    State(state): State<AppState>,
    Path(offer_id): Path<i32>,
    Json(body): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<CreatedApplicationResponse>), BoardError> {
    let usecase = CreateApplicationUseCase {
        users: state.user_repo(),
        offers: state.offer_repo(),
        applications: state.application_repo(),
    };
    let created = usecase.execute(body.user_id, Some(offer_id)).await?;
    Ok(CreatedApplicationResponse::reply(created))
}
