use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use jobboard_domain::salary::SalaryRangeError;

/// Job board error variants.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("user not found")]
    UserNotFound,
    #[error("company not found")]
    CompanyNotFound,
    #[error("offer not found")]
    OfferNotFound,
    #[error("application not found")]
    ApplicationNotFound,
    #[error("course not found")]
    CourseNotFound,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("forbidden")]
    Forbidden,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("email already registered")]
    EmailTaken,
    #[error("tax id already registered")]
    TaxIdTaken,
    #[error("user already owns a company")]
    CompanyExists,
    #[error("invalid status")]
    InvalidStatus,
    #[error("course is not active")]
    CourseInactive,
    #[error("{0}")]
    Validation(String),
    #[error("missing data")]
    MissingData,
    #[error("store failure: {0:#}")]
    Store(#[from] anyhow::Error),
}

impl BoardError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::CompanyNotFound => "COMPANY_NOT_FOUND",
            Self::OfferNotFound => "OFFER_NOT_FOUND",
            Self::ApplicationNotFound => "APPLICATION_NOT_FOUND",
            Self::CourseNotFound => "COURSE_NOT_FOUND",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::TaxIdTaken => "TAX_ID_TAKEN",
            Self::CompanyExists => "COMPANY_EXISTS",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::CourseInactive => "COURSE_INACTIVE",
            Self::Validation(_) => "VALIDATION",
            Self::MissingData => "MISSING_DATA",
            Self::Store(_) => "STORE_FAILURE",
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<SalaryRangeError> for BoardError {
    fn from(err: SalaryRangeError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound
            | Self::CompanyNotFound
            | Self::OfferNotFound
            | Self::ApplicationNotFound
            | Self::CourseNotFound
            | Self::ProfileNotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::EmailTaken | Self::TaxIdTaken | Self::CompanyExists => StatusCode::CONFLICT,
            Self::InvalidStatus | Self::CourseInactive | Self::Validation(_) | Self::MissingData => {
                StatusCode::BAD_REQUEST
            }
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Store(ref e) = self {
            tracing::error!(error = format!("{e:#}"), kind = "STORE_FAILURE", "store failure");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
