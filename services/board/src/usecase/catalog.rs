//! Read-side use cases. None of them write; each wraps one or more
//! [`CatalogRepository`] joins and answers with a [`Listing`] or a single view.

use jobboard_domain::listing::{Limit, Listing};

use crate::domain::repository::{
    CatalogRepository, CompanyRepository, ProfileRepository, UserRepository,
};
use crate::domain::types::{
    Applicant, ApplicationSummary, ApplicationWithHistory, Company, CompanyAggregate,
    CompanyApplication, CompanyOffer, CourseCard, CourseDetail, OfferListing,
    RECOMMENDED_OFFERS, SeekerAggregate, User, UserCourse,
};
use crate::error::BoardError;

async fn require_user<U: UserRepository>(users: &U, user_id: i32) -> Result<User, BoardError> {
    users
        .find_by_id(user_id)
        .await?
        .ok_or(BoardError::UserNotFound)
}

async fn require_company<C: CompanyRepository>(
    companies: &C,
    company_id: i32,
) -> Result<Company, BoardError> {
    companies
        .find_by_id(company_id)
        .await?
        .ok_or(BoardError::CompanyNotFound)
}

// ── ListOffers ───────────────────────────────────────────────────────────────

pub struct ListOffersUseCase<K: CatalogRepository> {
    pub catalog: K,
}

impl<K: CatalogRepository> ListOffersUseCase<K> {
    pub async fn execute(&self, limit: Limit) -> Result<Listing<OfferListing>, BoardError> {
        Ok(self.catalog.active_offers(limit).await?.into())
    }
}

// ── RecommendedOffers ────────────────────────────────────────────────────────

pub struct RecommendedOffersUseCase<K: CatalogRepository> {
    pub catalog: K,
}

impl<K: CatalogRepository> RecommendedOffersUseCase<K> {
    /// Most recent active offers. A missing or non-positive limit uses the default.
    pub async fn execute(&self, limit: Option<i64>) -> Result<Listing<OfferListing>, BoardError> {
        let limit = Limit::from_query(Some(
            limit.filter(|n| *n > 0).unwrap_or(RECOMMENDED_OFFERS),
        ));
        Ok(self.catalog.active_offers(limit).await?.into())
    }
}

// ── CompanyOffers ────────────────────────────────────────────────────────────

pub struct CompanyOffersUseCase<C, K>
where
    C: CompanyRepository,
    K: CatalogRepository,
{
    pub companies: C,
    pub catalog: K,
}

impl<C, K> CompanyOffersUseCase<C, K>
where
    C: CompanyRepository,
    K: CatalogRepository,
{
    pub async fn execute(&self, company_id: i32) -> Result<Listing<CompanyOffer>, BoardError> {
        require_company(&self.companies, company_id).await?;
        Ok(self.catalog.company_offers(company_id).await?.into())
    }
}

// ── CompanyApplications ──────────────────────────────────────────────────────

pub struct CompanyApplicationsUseCase<C, K>
where
    C: CompanyRepository,
    K: CatalogRepository,
{
    pub companies: C,
    pub catalog: K,
}

impl<C, K> CompanyApplicationsUseCase<C, K>
where
    C: CompanyRepository,
    K: CatalogRepository,
{
    pub async fn execute(
        &self,
        company_id: i32,
    ) -> Result<Listing<CompanyApplication>, BoardError> {
        require_company(&self.companies, company_id).await?;
        Ok(self.catalog.company_applications(company_id).await?.into())
    }
}

// ── CompanyApplicants ────────────────────────────────────────────────────────

pub struct CompanyApplicantsUseCase<C, K>
where
    C: CompanyRepository,
    K: CatalogRepository,
{
    pub companies: C,
    pub catalog: K,
}

impl<C, K> CompanyApplicantsUseCase<C, K>
where
    C: CompanyRepository,
    K: CatalogRepository,
{
    pub async fn execute(
        &self,
        company_id: i32,
        limit: Limit,
    ) -> Result<Listing<Applicant>, BoardError> {
        require_company(&self.companies, company_id).await?;
        Ok(self.catalog.company_applicants(company_id, limit).await?.into())
    }
}

// ── UserApplications ─────────────────────────────────────────────────────────

pub struct UserApplicationsUseCase<U, K>
where
    U: UserRepository,
    K: CatalogRepository,
{
    pub users: U,
    pub catalog: K,
}

impl<U, K> UserApplicationsUseCase<U, K>
where
    U: UserRepository,
    K: CatalogRepository,
{
    /// Applications of one seeker, each with its full history.
    pub async fn execute(
        &self,
        user_id: Option<i32>,
    ) -> Result<Listing<ApplicationWithHistory>, BoardError> {
        let user_id = user_id.ok_or_else(|| BoardError::validation("user_id is required"))?;
        require_user(&self.users, user_id).await?;
        Ok(self.catalog.user_applications(user_id).await?.into())
    }
}

// ── UserApplicationSummaries ─────────────────────────────────────────────────

pub struct UserApplicationSummariesUseCase<U, K>
where
    U: UserRepository,
    K: CatalogRepository,
{
    pub users: U,
    pub catalog: K,
}

impl<U, K> UserApplicationSummariesUseCase<U, K>
where
    U: UserRepository,
    K: CatalogRepository,
{
    pub async fn execute(&self, user_id: i32) -> Result<Listing<ApplicationSummary>, BoardError> {
        require_user(&self.users, user_id).await?;
        Ok(self.catalog.user_application_summaries(user_id).await?.into())
    }
}

// ── UserCourses ──────────────────────────────────────────────────────────────

pub struct UserCoursesUseCase<U, K>
where
    U: UserRepository,
    K: CatalogRepository,
{
    pub users: U,
    pub catalog: K,
}

impl<U, K> UserCoursesUseCase<U, K>
where
    U: UserRepository,
    K: CatalogRepository,
{
    pub async fn execute(&self, user_id: i32) -> Result<Listing<UserCourse>, BoardError> {
        require_user(&self.users, user_id).await?;
        Ok(self.catalog.user_courses(user_id).await?.into())
    }
}

// ── PublicCourses ────────────────────────────────────────────────────────────

pub struct PublicCoursesUseCase<K: CatalogRepository> {
    pub catalog: K,
}

impl<K: CatalogRepository> PublicCoursesUseCase<K> {
    pub async fn execute(&self) -> Result<Listing<CourseCard>, BoardError> {
        Ok(self.catalog.public_courses().await?.into())
    }
}

// ── CourseDetail ─────────────────────────────────────────────────────────────

pub struct CourseDetailUseCase<K: CatalogRepository> {
    pub catalog: K,
}

impl<K: CatalogRepository> CourseDetailUseCase<K> {
    pub async fn execute(&self, course_id: i32) -> Result<CourseDetail, BoardError> {
        self.catalog
            .course_detail(course_id)
            .await?
            .ok_or(BoardError::CourseNotFound)
    }
}

// ── SeekerAggregate ──────────────────────────────────────────────────────────

pub struct SeekerAggregateUseCase<U, P, K>
where
    U: UserRepository,
    P: ProfileRepository,
    K: CatalogRepository,
{
    pub users: U,
    pub profiles: P,
    pub catalog: K,
}

impl<U, P, K> SeekerAggregateUseCase<U, P, K>
where
    U: UserRepository,
    P: ProfileRepository,
    K: CatalogRepository,
{
    /// Profile page of a seeker. A seeker who never filled the profile form
    /// still gets the page, with `profile` absent.
    pub async fn execute(&self, user_id: i32) -> Result<SeekerAggregate, BoardError> {
        let user = require_user(&self.users, user_id).await?;
        if !user.role.is_seeker() {
            return Err(BoardError::Forbidden);
        }
        Ok(SeekerAggregate {
            profile: self.profiles.find_by_user(user_id).await?,
            badges: self.catalog.user_badges(user_id).await?,
            enrollments: self.catalog.user_enrollments(user_id).await?,
            applications: self.catalog.user_profile_applications(user_id).await?,
            user,
        })
    }
}

// ── CompanyAggregate ─────────────────────────────────────────────────────────

pub struct CompanyAggregateUseCase<C, K>
where
    C: CompanyRepository,
    K: CatalogRepository,
{
    pub companies: C,
    pub catalog: K,
}

impl<C, K> CompanyAggregateUseCase<C, K>
where
    C: CompanyRepository,
    K: CatalogRepository,
{
    pub async fn execute(&self, company_id: i32) -> Result<CompanyAggregate, BoardError> {
        let company = require_company(&self.companies, company_id).await?;
        Ok(CompanyAggregate {
            offers: self.catalog.company_offers(company_id).await?,
            courses: self.catalog.company_courses(company_id).await?,
            company,
        })
    }
}
