use std::collections::BTreeMap;

use axum::{extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jobboard_domain::catalog::Modality;
use jobboard_domain::listing::{Limit, Listing};
use jobboard_domain::status::ApplicationStatus;

use crate::domain::types::{Applicant, CompanyAggregate, CompanyApplication};
use crate::error::BoardError;
use crate::handlers::extract::{Json, Path, Query};
use crate::handlers::response::{CompanyOfferResponse, CompanyResponse, CourseResponse};
use crate::state::AppState;
use crate::usecase::catalog::{
    CompanyAggregateUseCase, CompanyApplicantsUseCase, CompanyApplicationsUseCase,
    CompanyOffersUseCase,
};
use crate::usecase::company::{RegisterCompanyInput, RegisterCompanyUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CompanyAggregateResponse {
    pub company: CompanyResponse,
    pub offers: Vec<CompanyOfferResponse>,
    pub courses: Vec<CourseResponse>,
}

impl From<CompanyAggregate> for CompanyAggregateResponse {
    fn from(a: CompanyAggregate) -> Self {
        Self {
            company: a.company.into(),
            offers: a.offers.into_iter().map(Into::into).collect(),
            courses: a.courses.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct CompanyApplicationResponse {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub user_email: String,
    pub offer_id: i32,
    pub offer_title: String,
    pub modality: Modality,
    pub contract_type: Option<String>,
    pub status: ApplicationStatus,
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<CompanyApplication> for CompanyApplicationResponse {
    fn from(a: CompanyApplication) -> Self {
        Self {
            id: a.id,
            user_id: a.user_id,
            user_name: a.user_name,
            user_email: a.user_email,
            offer_id: a.offer_id,
            offer_title: a.offer_title,
            modality: a.modality,
            contract_type: a.contract_type,
            status: a.status,
            created_at: a.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct ApplicantResponse {
    pub application_id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub offer_id: i32,
    pub offer_title: String,
    pub status: ApplicationStatus,
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub applied_at: DateTime<Utc>,
}

impl From<Applicant> for ApplicantResponse {
    fn from(a: Applicant) -> Self {
        Self {
            application_id: a.application_id,
            user_id: a.user_id,
            first_name: a.first_name,
            last_name: a.last_name,
            email: a.email,
            offer_id: a.offer_id,
            offer_title: a.offer_title,
            status: a.status,
            applied_at: a.applied_at,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

// ── POST /api/companies ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterCompanyRequest {
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

pub async fn register_company(
    State(state): State<AppState>,
    Json(body): Json<RegisterCompanyRequest>,
) -> Result<(StatusCode, Json<CompanyResponse>), BoardError> {
    let usecase = RegisterCompanyUseCase {
        users: state.user_repo(),
        companies: state.company_repo(),
    };
    let company = usecase
        .execute(RegisterCompanyInput {
            user_id: body.user_id,
            legal_name: body.legal_name,
            tax_id: body.tax_id,
            sector: body.sector,
            address: body.address,
            phone: body.phone,
            website: body.website,
            social_links: body.social_links,
            economic_activity: body.economic_activity,
            size: body.size,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(company.into())))
}

// ── GET /api/companies/{company_id} ──────────────────────────────────────────

pub async fn get_company(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> Result<Json<CompanyAggregateResponse>, BoardError> {
    let usecase = CompanyAggregateUseCase {
        companies: state.company_repo(),
        catalog: state.catalog_repo(),
    };
    Ok(Json(usecase.execute(company_id).await?.into()))
}

// ── GET /api/companies/{company_id}/offers ───────────────────────────────────

pub async fn get_company_offers(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> Result<Json<Listing<CompanyOfferResponse>>, BoardError> {
    let usecase = CompanyOffersUseCase {
        companies: state.company_repo(),
        catalog: state.catalog_repo(),
    };
    Ok(Json(usecase.execute(company_id).await?.map(Into::into)))
}

// ── GET /api/companies/{company_id}/applications ─────────────────────────────

pub async fn get_company_applications(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> Result<Json<Listing<CompanyApplicationResponse>>, BoardError> {
    let usecase = CompanyApplicationsUseCase {
        companies: state.company_repo(),
        catalog: state.catalog_repo(),
    };
    Ok(Json(usecase.execute(company_id).await?.map(Into::into)))
}

// ── GET /api/companies/{company_id}/applicants ───────────────────────────────

pub async fn get_company_applicants(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Listing<ApplicantResponse>>, BoardError> {
    let usecase = CompanyApplicantsUseCase {
        companies: state.company_repo(),
        catalog: state.catalog_repo(),
    };
    let applicants = usecase
        .execute(company_id, Limit::from_query(query.limit))
        .await?;
    Ok(Json(applicants.map(Into::into)))
}
