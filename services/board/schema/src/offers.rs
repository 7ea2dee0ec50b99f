use sea_orm::entity::prelude::*;

/// Job posting. `active = false` is a soft delete.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "offers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub title: String,
    pub description: String,
    pub duties: Option<String>,
    pub requirements: Option<String>,
    /// JSON array of strings.
    pub required_skills: Option<String>,
    pub location: Option<String>,
    /// `onsite`, `remote` or `hybrid`.
    pub modality: String,
    pub contract_type: Option<String>,
    pub schedule: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub published_at: chrono::DateTime<chrono::Utc>,
    pub closes_on: Option<Date>,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompanyId",
        to = "super::companies::Column::Id"
    )]
    Company,
    #[sea_orm(has_many = "super::applications::Entity")]
    Applications,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
