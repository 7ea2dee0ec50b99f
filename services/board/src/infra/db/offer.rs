use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, sea_query::Expr,
};

use jobboard_board_schema::{companies, offers};

use super::mapping::{brief_from_model, encode, joined, offer_from_model};
use crate::domain::repository::OfferRepository;
use crate::domain::types::{NewOffer, Offer, OfferListing};
use crate::error::BoardError;

#[derive(Clone)]
pub struct DbOfferRepository {
    pub db: DatabaseConnection,
}

impl OfferRepository for DbOfferRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Offer>, BoardError> {
        let model = offers::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find offer by id")?;
        model.map(offer_from_model).transpose()
    }

    async fn find_active(&self, id: i32) -> Result<Option<OfferListing>, BoardError> {
        let row = offers::Entity::find_by_id(id)
            .filter(offers::Column::Active.eq(true))
            .find_also_related(companies::Entity)
            .one(&self.db)
            .await
            .context("find active offer")?;
        row.map(|(offer, company)| listing_from_models(offer, company))
            .transpose()
    }

    async fn create(&self, offer: &NewOffer) -> Result<Offer, BoardError> {
        let model = offers::ActiveModel {
            company_id: Set(offer.company_id),
            title: Set(offer.title.clone()),
            description: Set(offer.description.clone()),
            duties: Set(offer.duties.clone()),
            requirements: Set(offer.requirements.clone()),
            required_skills: Set(Some(encode(&offer.required_skills, "required_skills")?)),
            location: Set(offer.location.clone()),
            modality: Set(offer.modality.as_str().to_owned()),
            contract_type: Set(offer.contract_type.clone()),
            schedule: Set(offer.schedule.clone()),
            salary_min: Set(offer.salary.min),
            salary_max: Set(offer.salary.max),
            published_at: Set(offer.published_at),
            closes_on: Set(offer.closes_on),
            active: Set(true),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create offer")?;
        offer_from_model(model)
    }

    async fn update(&self, offer: &Offer) -> Result<Offer, BoardError> {
        let model = offers::ActiveModel {
            id: Set(offer.id),
            title: Set(offer.title.clone()),
            description: Set(offer.description.clone()),
            duties: Set(offer.duties.clone()),
            requirements: Set(offer.requirements.clone()),
            required_skills: Set(Some(encode(&offer.required_skills, "required_skills")?)),
            location: Set(offer.location.clone()),
            modality: Set(offer.modality.as_str().to_owned()),
            contract_type: Set(offer.contract_type.clone()),
            schedule: Set(offer.schedule.clone()),
            salary_min: Set(offer.salary.min),
            salary_max: Set(offer.salary.max),
            closes_on: Set(offer.closes_on),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update offer")?;
        offer_from_model(model)
    }

    async fn deactivate(&self, id: i32) -> Result<bool, BoardError> {
        let result = offers::Entity::update_many()
            .col_expr(offers::Column::Active, Expr::value(false))
            .filter(offers::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("deactivate offer")?;
        Ok(result.rows_affected > 0)
    }
}

pub(crate) fn listing_from_models(
    offer: offers::Model,
    company: Option<companies::Model>,
) -> Result<OfferListing, BoardError> {
    let company = joined(company, "company", offer.id)?;
    Ok(OfferListing {
        company: brief_from_model(&company),
        offer: offer_from_model(offer)?,
    })
}
