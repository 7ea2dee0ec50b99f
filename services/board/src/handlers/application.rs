use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use jobboard_domain::listing::Listing;

use crate::domain::types::{Application, ApplicationWithHistory, Created};
use crate::error::BoardError;
use crate::handlers::extract::{Json, Path, Query};
use crate::handlers::response::{ApplicationResponse, HistoryEntryResponse};
use crate::state::AppState;
use crate::usecase::application::{
    ChangeStatusInput, ChangeStatusUseCase, CreateApplicationUseCase, GetApplicationUseCase,
};
use crate::usecase::catalog::UserApplicationsUseCase;

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CreatedApplicationResponse {
    pub created: bool,
    pub application: ApplicationResponse,
}

impl CreatedApplicationResponse {
    /// 201 for a new application, 200 when the seeker had already applied.
    pub fn reply(created: Created<Application>) -> (StatusCode, Json<Self>) {
        let status = if created.created {
            StatusCode::CREATED
        } else {
            StatusCode::OK
        };
        let body = Self {
            created: created.created,
            application: created.record.into(),
        };
        (status, Json(body))
    }
}

#[derive(Serialize)]
pub struct ApplicationWithHistoryResponse {
    #[serde(flatten)]
    pub application: ApplicationResponse,
    pub history: Vec<HistoryEntryResponse>,
}

impl From<ApplicationWithHistory> for ApplicationWithHistoryResponse {
    fn from(a: ApplicationWithHistory) -> Self {
        Self {
            application: a.application.into(),
            history: a.history.into_iter().map(Into::into).collect(),
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UserQuery {
    pub user_id: Option<i32>,
}

// ── POST /api/applications ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ApplyRequest {
    pub user_id: Option<i32>,
    pub offer_id: Option<i32>,
}

pub async fn create_application(
    State(state): State<AppState>,
    Json(body): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<CreatedApplicationResponse>), BoardError> {
    let usecase = CreateApplicationUseCase {
        users: state.user_repo(),
        offers: state.offer_repo(),
        applications: state.application_repo(),
    };
    let created = usecase.execute(body.user_id, body.offer_id).await?;
    Ok(CreatedApplicationResponse::reply(created))
}

// ── GET /api/applications?user_id= ───────────────────────────────────────────

pub async fn list_applications(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Listing<ApplicationWithHistoryResponse>>, BoardError> {
    let usecase = UserApplicationsUseCase {
        users: state.user_repo(),
        catalog: state.catalog_repo(),
    };
    Ok(Json(usecase.execute(query.user_id).await?.map(Into::into)))
}

// ── GET /api/applications/{application_id} ───────────────────────────────────

pub async fn get_application(
    State(state): State<AppState>,
    Path(application_id): Path<i32>,
) -> Result<Json<ApplicationWithHistoryResponse>, BoardError> {
    let usecase = GetApplicationUseCase {
        applications: state.application_repo(),
    };
    Ok(Json(usecase.execute(application_id).await?.into()))
}

// ── PUT /api/applications/{application_id}/status ────────────────────────────

#[derive(Deserialize)]
pub struct ChangeStatusRequest {
    pub status: Option<String>,
    pub actor: Option<String>,
    pub note: Option<String>,
}

pub async fn change_status(
    State(state): State<AppState>,
    Path(application_id): Path<i32>,
    Json(body): Json<ChangeStatusRequest>,
) -> Result<Json<ApplicationResponse>, BoardError> {
    let usecase = ChangeStatusUseCase {
        applications: state.application_repo(),
    };
    let application = usecase
        .execute(
            application_id,
            ChangeStatusInput {
                status: body.status,
                actor: body.actor,
                note: body.note,
            },
        )
        .await?;
    Ok(Json(application.into()))
}
