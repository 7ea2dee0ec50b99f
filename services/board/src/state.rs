use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbApplicationRepository, DbAssessmentRepository, DbCatalogRepository, DbCompanyRepository,
    DbCourseRepository, DbEnrollmentRepository, DbOfferRepository, DbProfileRepository,
    DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn company_repo(&self) -> DbCompanyRepository {
        DbCompanyRepository {
            db: self.db.clone(),
        }
    }

    pub fn offer_repo(&self) -> DbOfferRepository {
        DbOfferRepository {
            db: self.db.clone(),
        }
    }

    pub fn application_repo(&self) -> DbApplicationRepository {
        DbApplicationRepository {
            db: self.db.clone(),
        }
    }

    pub fn course_repo(&self) -> DbCourseRepository {
        DbCourseRepository {
            db: self.db.clone(),
        }
    }

    pub fn enrollment_repo(&self) -> DbEnrollmentRepository {
        DbEnrollmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn assessment_repo(&self) -> DbAssessmentRepository {
        DbAssessmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn catalog_repo(&self) -> DbCatalogRepository {
        DbCatalogRepository {
            db: self.db.clone(),
        }
    }
}
