//! In-memory repositories for use case tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use jobboard_domain::catalog::{Difficulty, EnrollmentStatus, Modality, Visibility};
use jobboard_domain::listing::Limit;
use jobboard_domain::role::UserRole;
use jobboard_domain::salary::SalaryRange;
use jobboard_domain::status::{Actor, ApplicationStatus};

use crate::domain::repository::{
    ApplicationRepository, AssessmentRepository, CatalogRepository, CompanyRepository,
    CourseRepository, EnrollmentRepository, OfferRepository, ProfileRepository, UserRepository,
};
use crate::domain::types::{
    Applicant, Application, ApplicationSummary, ApplicationWithHistory, Assessment, Badge,
    CREATION_NOTE, Company, CompanyApplication, CompanyBrief, CompanyOffer, Course, CourseCard,
    CourseDetail, Credentials, Enrollment, EnrollmentView, HistoryEntry, NewApplication,
    NewAssessment, NewCompany, NewCourse, NewOffer, NewUser, Offer, OfferDetail, OfferListing,
    ProfileApplication, ProfileFields, SeekerProfile, StatusChange, StatusTransition, User,
    UserCourse, split_name,
};
use crate::error::BoardError;

pub const PASSWORD: &str = "password123";

fn take<T>(items: Vec<T>, limit: Limit) -> Vec<T> {
    match limit.as_option() {
        Some(n) => items.into_iter().take(n as usize).collect(),
        None => items,
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

fn user(id: i32, email: &str, role: UserRole) -> User {
    User {
        id,
        email: email.to_owned(),
        name: email.split('@').next().unwrap_or(email).to_owned(),
        role,
        active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn seeker(id: i32, email: &str) -> User {
    user(id, email, UserRole::Seeker)
}

pub fn company_user(id: i32, email: &str) -> User {
    user(id, email, UserRole::Company)
}

pub fn company(id: i32, user_id: i32, legal_name: &str, tax_id: &str) -> Company {
    Company {
        id,
        user_id,
        legal_name: legal_name.to_owned(),
        tax_id: tax_id.to_owned(),
        sector: Some("Technology".into()),
        address: None,
        phone: None,
        website: None,
        social_links: BTreeMap::new(),
        economic_activity: None,
        size: None,
        verified: false,
        verified_at: None,
        created_at: Utc::now(),
    }
}

fn brief(company_id: i32) -> CompanyBrief {
    CompanyBrief {
        id: company_id,
        legal_name: format!("Company {company_id}"),
        sector: Some("Technology".into()),
    }
}

pub fn listing(id: i32, company_id: i32, title: &str) -> OfferListing {
    OfferListing {
        offer: Offer {
            id,
            company_id,
            title: title.to_owned(),
            description: format!("{title} wanted"),
            duties: None,
            requirements: None,
            required_skills: vec!["rust".into()],
            location: Some("Bogota".into()),
            modality: Modality::Remote,
            contract_type: Some("full-time".into()),
            schedule: None,
            salary: SalaryRange {
                min: Some(2_800_000.0),
                max: Some(3_500_000.0),
            },
            published_at: Utc::now(),
            closes_on: None,
            active: true,
        },
        company: brief(company_id),
    }
}

pub fn course(id: i32, company_id: i32, active: bool) -> Course {
    Course {
        id,
        company_id,
        title: format!("Course {id}"),
        description: "Hands-on training".into(),
        objectives: None,
        syllabus: None,
        duration_hours: 10,
        difficulty: Difficulty::Basic,
        content_formats: Vec::new(),
        visibility: Visibility::Public,
        offer_id: None,
        published_at: Utc::now(),
        active,
    }
}

pub fn applicant(application_id: i32, name: &str) -> Applicant {
    let (first_name, last_name) = split_name(name);
    Applicant {
        application_id,
        user_id: application_id,
        first_name,
        last_name,
        email: format!("applicant{application_id}@mail.com"),
        offer_id: 10,
        offer_title: "Engineer".into(),
        status: ApplicationStatus::Registered,
        applied_at: Utc::now(),
    }
}

pub fn badge(user_id: i32, course_id: i32, name: &str) -> Badge {
    Badge {
        id: course_id,
        user_id,
        course_id,
        name: name.to_owned(),
        description: None,
        verification_code: format!("{user_id}-{course_id}"),
        image_url: None,
        obtained_at: Utc::now(),
    }
}

pub fn stored_application(id: i32, user_id: i32, offer_id: i32) -> Application {
    Application {
        id,
        user_id,
        offer_id,
        company_name: "Company 5".into(),
        position: "Engineer".into(),
        description: None,
        status: ApplicationStatus::Registered,
        salary: None,
        location: None,
        tags: Vec::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

// ── Users ────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockUsers {
    rows: Mutex<Vec<Credentials>>,
}

impl MockUsers {
    /// Seed an account whose password is [`PASSWORD`].
    pub fn insert(&self, user: User) {
        self.rows.lock().unwrap().push(Credentials {
            user,
            password: PASSWORD.to_owned(),
        });
    }
}

impl UserRepository for MockUsers {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, BoardError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.user.id == id).map(|c| c.user.clone()))
    }

    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>, BoardError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.user.email == email).cloned())
    }

    async fn create(&self, new: &NewUser) -> Result<Option<User>, BoardError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|c| c.user.email == new.email) {
            return Ok(None);
        }
        let user = User {
            id: rows.iter().map(|c| c.user.id).max().unwrap_or(0) + 1,
            email: new.email.clone(),
            name: new.name.clone(),
            role: new.role,
            active: true,
            created_at: new.created_at,
            updated_at: new.created_at,
        };
        rows.push(Credentials {
            user: user.clone(),
            password: new.password.clone(),
        });
        Ok(Some(user))
    }
}

// ── Profiles ─────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockProfiles {
    rows: Mutex<Vec<SeekerProfile>>,
}

impl ProfileRepository for MockProfiles {
    async fn find_by_user(&self, user_id: i32) -> Result<Option<SeekerProfile>, BoardError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn upsert(
        &self,
        user_id: i32,
        fields: &ProfileFields,
    ) -> Result<SeekerProfile, BoardError> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|p| p.user_id != user_id);
        let profile = SeekerProfile {
            id: user_id,
            user_id,
            fields: fields.clone(),
            updated_at: Utc::now(),
        };
        rows.push(profile.clone());
        Ok(profile)
    }
}

// ── Companies ────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockCompanies {
    rows: Mutex<Vec<Company>>,
}

impl MockCompanies {
    pub fn insert(&self, company: Company) {
        self.rows.lock().unwrap().push(company);
    }
}

impl CompanyRepository for MockCompanies {
    async fn find_by_id(&self, id: i32) -> Result<Option<Company>, BoardError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Option<Company>, BoardError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.user_id == user_id).cloned())
    }

    async fn find_by_tax_id(&self, tax_id: &str) -> Result<Option<Company>, BoardError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.tax_id == tax_id).cloned())
    }

    async fn create(&self, new: &NewCompany) -> Result<Option<Company>, BoardError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|c| c.user_id == new.user_id || c.tax_id == new.tax_id)
        {
            return Ok(None);
        }
        let company = Company {
            id: rows.iter().map(|c| c.id).max().unwrap_or(0) + 1,
            user_id: new.user_id,
            legal_name: new.legal_name.clone(),
            tax_id: new.tax_id.clone(),
            sector: new.sector.clone(),
            address: new.address.clone(),
            phone: new.phone.clone(),
            website: new.website.clone(),
            social_links: new.social_links.clone(),
            economic_activity: new.economic_activity.clone(),
            size: new.size.clone(),
            verified: false,
            verified_at: None,
            created_at: new.created_at,
        };
        rows.push(company.clone());
        Ok(Some(company))
    }
}

// ── Offers ───────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockOffers {
    rows: Mutex<Vec<OfferListing>>,
}

impl MockOffers {
    pub fn insert(&self, listing: OfferListing) {
        self.rows.lock().unwrap().push(listing);
    }
}

impl OfferRepository for MockOffers {
    async fn find_by_id(&self, id: i32) -> Result<Option<Offer>, BoardError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|l| l.offer.id == id).map(|l| l.offer.clone()))
    }

    async fn find_active(&self, id: i32) -> Result<Option<OfferListing>, BoardError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|l| l.offer.id == id && l.offer.active)
            .cloned())
    }

    async fn create(&self, new: &NewOffer) -> Result<Offer, BoardError> {
        let mut rows = self.rows.lock().unwrap();
        let offer = Offer {
            id: rows.iter().map(|l| l.offer.id).max().unwrap_or(0) + 1,
            company_id: new.company_id,
            title: new.title.clone(),
            description: new.description.clone(),
            duties: new.duties.clone(),
            requirements: new.requirements.clone(),
            required_skills: new.required_skills.clone(),
            location: new.location.clone(),
            modality: new.modality,
            contract_type: new.contract_type.clone(),
            schedule: new.schedule.clone(),
            salary: new.salary,
            published_at: new.published_at,
            closes_on: new.closes_on,
            active: true,
        };
        rows.push(OfferListing {
            offer: offer.clone(),
            company: brief(new.company_id),
        });
        Ok(offer)
    }

    async fn update(&self, offer: &Offer) -> Result<Offer, BoardError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|l| l.offer.id == offer.id) {
            row.offer = offer.clone();
        }
        Ok(offer.clone())
    }

    async fn deactivate(&self, id: i32) -> Result<bool, BoardError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|l| l.offer.id == id) {
            Some(row) => {
                row.offer.active = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ── Applications ─────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockApplications {
    rows: Mutex<Vec<Application>>,
    history: Mutex<Vec<HistoryEntry>>,
    race: Mutex<bool>,
}

impl MockApplications {
    /// Make the next insert behave as if another request committed the same
    /// pair first: the row appears, but the caller is told it lost.
    pub fn simulate_concurrent_insert(&self) {
        *self.race.lock().unwrap() = true;
    }

    fn append(
        &self,
        application_id: i32,
        previous: Option<ApplicationStatus>,
        change: &StatusChange,
    ) -> HistoryEntry {
        let mut history = self.history.lock().unwrap();
        let entry = HistoryEntry {
            id: history.len() as i32 + 1,
            application_id,
            previous_status: previous,
            new_status: change.status,
            actor: change.actor,
            note: change.note.clone(),
            changed_at: change.changed_at,
        };
        history.push(entry.clone());
        entry
    }

    fn insert(&self, new: &NewApplication) -> Application {
        let application = {
            let mut rows = self.rows.lock().unwrap();
            let application = Application {
                id: rows.len() as i32 + 1,
                user_id: new.user_id,
                offer_id: new.offer_id,
                company_name: new.company_name.clone(),
                position: new.position.clone(),
                description: new.description.clone(),
                status: ApplicationStatus::Registered,
                salary: new.salary.clone(),
                location: new.location.clone(),
                tags: new.tags.clone(),
                created_at: new.created_at,
                updated_at: new.created_at,
            };
            rows.push(application.clone());
            application
        };
        self.append(
            application.id,
            None,
            &StatusChange {
                status: ApplicationStatus::Registered,
                actor: Actor::Seeker,
                note: Some(CREATION_NOTE.to_owned()),
                changed_at: new.created_at,
            },
        );
        application
    }
}

impl ApplicationRepository for MockApplications {
    async fn find_by_id(&self, id: i32) -> Result<Option<Application>, BoardError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_user_and_offer(
        &self,
        user_id: i32,
        offer_id: i32,
    ) -> Result<Option<Application>, BoardError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|a| a.user_id == user_id && a.offer_id == offer_id)
            .cloned())
    }

    async fn create_with_history(
        &self,
        new: &NewApplication,
    ) -> Result<Option<Application>, BoardError> {
        let raced = std::mem::take(&mut *self.race.lock().unwrap());
        if raced {
            self.insert(new);
            return Ok(None);
        }
        let exists = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.user_id == new.user_id && a.offer_id == new.offer_id);
        if exists {
            return Ok(None);
        }
        Ok(Some(self.insert(new)))
    }

    async fn change_status(
        &self,
        id: i32,
        change: &StatusChange,
    ) -> Result<Option<StatusTransition>, BoardError> {
        let (application, previous) = {
            let mut rows = self.rows.lock().unwrap();
            let Some(row) = rows.iter_mut().find(|a| a.id == id) else {
                return Ok(None);
            };
            let previous = row.status;
            row.status = change.status;
            row.updated_at = change.changed_at;
            (row.clone(), previous)
        };
        let entry = self.append(id, Some(previous), change);
        Ok(Some(StatusTransition { application, entry }))
    }

    async fn history(&self, application_id: i32) -> Result<Vec<HistoryEntry>, BoardError> {
        let history = self.history.lock().unwrap();
        Ok(history
            .iter()
            .rev()
            .filter(|h| h.application_id == application_id)
            .cloned()
            .collect())
    }
}

// ── Courses ──────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockCourses {
    rows: Mutex<Vec<Course>>,
}

impl MockCourses {
    pub fn insert(&self, course: Course) {
        self.rows.lock().unwrap().push(course);
    }
}

impl CourseRepository for MockCourses {
    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, BoardError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, new: &NewCourse) -> Result<Course, BoardError> {
        let mut rows = self.rows.lock().unwrap();
        let course = Course {
            id: rows.iter().map(|c| c.id).max().unwrap_or(0) + 1,
            company_id: new.company_id,
            title: new.title.clone(),
            description: new.description.clone(),
            objectives: new.objectives.clone(),
            syllabus: new.syllabus.clone(),
            duration_hours: new.duration_hours,
            difficulty: new.difficulty,
            content_formats: new.content_formats.clone(),
            visibility: new.visibility,
            offer_id: new.offer_id,
            published_at: new.published_at,
            active: true,
        };
        rows.push(course.clone());
        Ok(course)
    }
}

// ── Enrollments ──────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockEnrollments {
    rows: Mutex<Vec<Enrollment>>,
    race: Mutex<bool>,
}

impl MockEnrollments {
    pub fn simulate_concurrent_insert(&self) {
        *self.race.lock().unwrap() = true;
    }

    fn insert(&self, user_id: i32, course_id: i32, enrolled_at: DateTime<Utc>) -> Enrollment {
        let mut rows = self.rows.lock().unwrap();
        let enrollment = Enrollment {
            id: rows.len() as i32 + 1,
            user_id,
            course_id,
            progress: 0.0,
            status: EnrollmentStatus::NotStarted,
            completed_at: None,
            test_score: None,
            enrolled_at,
        };
        rows.push(enrollment.clone());
        enrollment
    }
}

impl EnrollmentRepository for MockEnrollments {
    async fn find_by_user_and_course(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<Option<Enrollment>, BoardError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|e| e.user_id == user_id && e.course_id == course_id)
            .cloned())
    }

    async fn create(
        &self,
        user_id: i32,
        course_id: i32,
        enrolled_at: DateTime<Utc>,
    ) -> Result<Option<Enrollment>, BoardError> {
        let raced = std::mem::take(&mut *self.race.lock().unwrap());
        if raced {
            self.insert(user_id, course_id, enrolled_at);
            return Ok(None);
        }
        if self
            .find_by_user_and_course(user_id, course_id)
            .await?
            .is_some()
        {
            return Ok(None);
        }
        Ok(Some(self.insert(user_id, course_id, enrolled_at)))
    }
}

// ── Assessments ──────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockAssessments {
    rows: Mutex<Vec<Assessment>>,
}

impl AssessmentRepository for MockAssessments {
    async fn create(&self, new: &NewAssessment) -> Result<Assessment, BoardError> {
        let mut rows = self.rows.lock().unwrap();
        let assessment = Assessment {
            id: rows.len() as i32 + 1,
            course_id: new.course_id,
            title: new.title.clone(),
            description: new.description.clone(),
            questions: new.questions.clone(),
            min_score: new.min_score,
            max_attempts: new.max_attempts,
            required: new.required,
            active: true,
            created_at: new.created_at,
        };
        rows.push(assessment.clone());
        Ok(assessment)
    }

    async fn list_by_course(&self, course_id: i32) -> Result<Vec<Assessment>, BoardError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|a| a.course_id == course_id && a.active)
            .cloned()
            .collect())
    }
}

// ── Catalog ──────────────────────────────────────────────────────────────────

/// Canned read-side rows. Tests fill the vectors they need.
#[derive(Default)]
pub struct MockCatalog {
    pub offers: Vec<OfferListing>,
    pub details: Vec<OfferDetail>,
    pub company_offers: Vec<CompanyOffer>,
    pub courses: Vec<Course>,
    pub applications: Vec<ApplicationWithHistory>,
    pub company_applications: Vec<CompanyApplication>,
    pub applicants: Vec<Applicant>,
    pub course_cards: Vec<CourseCard>,
    pub course_details: Vec<CourseDetail>,
    pub user_courses: Vec<UserCourse>,
    pub badges: Vec<Badge>,
    pub enrollments: Vec<EnrollmentView>,
    pub profile_applications: Vec<ProfileApplication>,
}

impl CatalogRepository for MockCatalog {
    async fn active_offers(&self, limit: Limit) -> Result<Vec<OfferListing>, BoardError> {
        let active = self
            .offers
            .iter()
            .filter(|l| l.offer.active)
            .cloned()
            .collect();
        Ok(take(active, limit))
    }

    async fn offer_detail(&self, id: i32) -> Result<Option<OfferDetail>, BoardError> {
        Ok(self
            .details
            .iter()
            .find(|d| d.offer.id == id && d.offer.active)
            .cloned())
    }

    async fn company_offers(&self, company_id: i32) -> Result<Vec<CompanyOffer>, BoardError> {
        Ok(self
            .company_offers
            .iter()
            .filter(|o| o.offer.company_id == company_id)
            .cloned()
            .collect())
    }

    async fn company_courses(&self, company_id: i32) -> Result<Vec<Course>, BoardError> {
        Ok(self
            .courses
            .iter()
            .filter(|c| c.company_id == company_id)
            .cloned()
            .collect())
    }

    async fn user_applications(
        &self,
        user_id: i32,
    ) -> Result<Vec<ApplicationWithHistory>, BoardError> {
        Ok(self
            .applications
            .iter()
            .filter(|a| a.application.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn user_application_summaries(
        &self,
        user_id: i32,
    ) -> Result<Vec<ApplicationSummary>, BoardError> {
        Ok(self
            .applications
            .iter()
            .map(|a| &a.application)
            .filter(|a| a.user_id == user_id)
            .map(|a| ApplicationSummary {
                id: a.id,
                offer_id: a.offer_id,
                offer_title: a.position.clone(),
                company_name: a.company_name.clone(),
                status: a.status,
                created_at: a.created_at,
                updated_at: a.updated_at,
            })
            .collect())
    }

    async fn company_applications(
        &self,
        _company_id: i32,
    ) -> Result<Vec<CompanyApplication>, BoardError> {
        Ok(self.company_applications.clone())
    }

    async fn company_applicants(
        &self,
        _company_id: i32,
        limit: Limit,
    ) -> Result<Vec<Applicant>, BoardError> {
        Ok(take(self.applicants.clone(), limit))
    }

    async fn public_courses(&self) -> Result<Vec<CourseCard>, BoardError> {
        Ok(self.course_cards.clone())
    }

    async fn course_detail(&self, id: i32) -> Result<Option<CourseDetail>, BoardError> {
        Ok(self
            .course_details
            .iter()
            .find(|d| d.course.id == id && d.course.active)
            .cloned())
    }

    async fn user_courses(&self, user_id: i32) -> Result<Vec<UserCourse>, BoardError> {
        Ok(self
            .user_courses
            .iter()
            .filter(|c| c.enrollment.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn user_badges(&self, user_id: i32) -> Result<Vec<Badge>, BoardError> {
        Ok(self
            .badges
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn user_enrollments(&self, user_id: i32) -> Result<Vec<EnrollmentView>, BoardError> {
        Ok(self
            .enrollments
            .iter()
            .filter(|e| e.enrollment.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn user_profile_applications(
        &self,
        user_id: i32,
    ) -> Result<Vec<ProfileApplication>, BoardError> {
        Ok(self
            .profile_applications
            .iter()
            .filter(|a| a.application.user_id == user_id)
            .cloned()
            .collect())
    }
}
