use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users;
mod m20250601_000002_create_seeker_profiles;
mod m20250601_000003_create_companies;
mod m20250601_000004_create_offers;
mod m20250601_000005_create_applications;
mod m20250601_000006_create_status_history;
mod m20250601_000007_create_courses;
mod m20250601_000008_create_enrollments;
mod m20250601_000009_create_badges;
mod m20250601_000010_create_assessments;
mod m20250601_000011_add_read_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users::Migration),
            Box::new(m20250601_000002_create_seeker_profiles::Migration),
            Box::new(m20250601_000003_create_companies::Migration),
            Box::new(m20250601_000004_create_offers::Migration),
            Box::new(m20250601_000005_create_applications::Migration),
            Box::new(m20250601_000006_create_status_history::Migration),
            Box::new(m20250601_000007_create_courses::Migration),
            Box::new(m20250601_000008_create_enrollments::Migration),
            Box::new(m20250601_000009_create_badges::Migration),
            Box::new(m20250601_000010_create_assessments::Migration),
            Box::new(m20250601_000011_add_read_indexes::Migration),
        ]
    }
}
